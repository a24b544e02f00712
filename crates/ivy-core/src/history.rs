//! History grouping: transfer batching, ordering and date dividers.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;
use uuid::Uuid;

use ivy_domain::{Amounted, HistoryItem, Transaction, Transfer, TransferIssue};

use crate::CalendarZone;

/// A realized history entry before date dividers are interleaved.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    Transaction(Transaction),
    Transfer(Transfer),
}

impl HistoryEntry {
    pub fn time(&self) -> DateTime<Utc> {
        match self {
            HistoryEntry::Transaction(txn) => txn.time,
            HistoryEntry::Transfer(transfer) => transfer.time(),
        }
    }

    /// Secondary ordering key; transfers are identified by their batch id.
    pub fn id(&self) -> Uuid {
        match self {
            HistoryEntry::Transaction(txn) => txn.id,
            HistoryEntry::Transfer(transfer) => transfer.batch_id,
        }
    }

    /// Contribution to the day's cashflow. Transfers move money between own accounts.
    fn cashflow(&self) -> f64 {
        match self {
            HistoryEntry::Transaction(txn) => txn.signed_amount(),
            HistoryEntry::Transfer(_) => 0.0,
        }
    }

    fn into_item(self) -> HistoryItem {
        match self {
            HistoryEntry::Transaction(txn) => HistoryItem::Transaction(txn),
            HistoryEntry::Transfer(transfer) => HistoryItem::Transfer(transfer),
        }
    }
}

/// Groups legs by batch id; records without a batch id are returned separately.
pub(crate) fn split_batches<'a, I>(
    realized: I,
) -> (BTreeMap<Uuid, Vec<&'a Transaction>>, Vec<&'a Transaction>)
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut batches: BTreeMap<Uuid, Vec<&Transaction>> = BTreeMap::new();
    let mut singles = Vec::new();
    for txn in realized {
        match txn.batch_id {
            Some(batch_id) => batches.entry(batch_id).or_default().push(txn),
            None => singles.push(txn),
        }
    }
    (batches, singles)
}

/// Pairs legs of one batch, or reports why they must stay separate.
pub(crate) fn pair_batch(
    batch_id: Uuid,
    legs: &[&Transaction],
) -> Result<Transfer, TransferIssue> {
    let owned: Vec<Transaction> = legs.iter().map(|leg| (*leg).clone()).collect();
    Transfer::from_legs(batch_id, &owned)
}

pub struct HistoryService;

impl HistoryService {
    /// Collapses valid transfer batches and keeps every other record as a plain entry.
    pub fn batch_transfers<'a, I>(realized: I) -> Vec<HistoryEntry>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (batches, singles) = split_batches(realized);
        let mut entries: Vec<HistoryEntry> = singles
            .into_iter()
            .map(|txn| HistoryEntry::Transaction(txn.clone()))
            .collect();

        for (batch_id, legs) in batches {
            match pair_batch(batch_id, &legs) {
                Ok(transfer) => entries.push(HistoryEntry::Transfer(transfer)),
                Err(issue) => {
                    warn!(batch = %batch_id, %issue, "showing transfer legs individually");
                    entries.extend(
                        legs.into_iter()
                            .map(|leg| HistoryEntry::Transaction(leg.clone())),
                    );
                }
            }
        }
        entries
    }

    /// Most recent first; equal timestamps are ordered by ascending id.
    pub fn sort(entries: &mut [HistoryEntry]) {
        entries.sort_by(|a, b| b.time().cmp(&a.time()).then_with(|| a.id().cmp(&b.id())));
    }

    /// Sorts `entries` and inserts a divider before every change of calendar day.
    pub fn group_by_day(
        mut entries: Vec<HistoryEntry>,
        calendar: &CalendarZone,
    ) -> Vec<HistoryItem> {
        Self::sort(&mut entries);

        let mut days: Vec<(NaiveDate, Vec<HistoryEntry>)> = Vec::new();
        for entry in entries {
            let date = calendar.date_of(entry.time());
            match days.last_mut() {
                Some((current, run)) if *current == date => run.push(entry),
                _ => days.push((date, vec![entry])),
            }
        }

        let mut items = Vec::with_capacity(days.iter().map(|(_, run)| run.len() + 1).sum());
        for (date, run) in days {
            let cashflow = run.iter().map(HistoryEntry::cashflow).sum();
            items.push(HistoryItem::DateDivider { date, cashflow });
            items.extend(run.into_iter().map(HistoryEntry::into_item));
        }
        items
    }
}
