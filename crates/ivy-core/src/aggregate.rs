//! The transactions list aggregator.
//!
//! A pure function of `(records, now, options)`: it never reads the clock, never
//! mutates its input and never fails. Bad records degrade to plainer output.

use std::{collections::HashSet, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ivy_domain::{Transaction, TransactionsList};

use crate::{CalendarZone, CoreError, DueService, HistoryService};

/// Which record wins when the same id is supplied more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    #[default]
    FirstSeen,
    LastSeen,
}

/// Accepts `first_seen`/`last_seen` in any case, with `-` for `_`, or `first`/`last`.
impl FromStr for DuplicatePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_seen" | "first" => Ok(DuplicatePolicy::FirstSeen),
            "last_seen" | "last" => Ok(DuplicatePolicy::LastSeen),
            _ => Err(CoreError::InvalidDuplicatePolicy(s.trim().to_string())),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DuplicatePolicy::FirstSeen => "first_seen",
            DuplicatePolicy::LastSeen => "last_seen",
        };
        f.write_str(label)
    }
}

/// Calendar and data-policy knobs for an aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub calendar: CalendarZone,
    pub duplicate_policy: DuplicatePolicy,
}

impl ListOptions {
    pub fn new(calendar: CalendarZone) -> Self {
        Self {
            calendar,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Builds the sectioned list with default options for `calendar`.
pub fn aggregate(
    records: &[Transaction],
    now: DateTime<Utc>,
    calendar: &CalendarZone,
) -> TransactionsList {
    TransactionsListService::aggregate(records, now, &ListOptions::new(*calendar))
}

pub struct TransactionsListService;

impl TransactionsListService {
    /// Partitions, sections, batches and groups `records` as seen at `now`.
    pub fn aggregate(
        records: &[Transaction],
        now: DateTime<Utc>,
        options: &ListOptions,
    ) -> TransactionsList {
        let unique = dedupe(records, options.duplicate_policy);
        let (planned, realized): (Vec<&Transaction>, Vec<&Transaction>) =
            unique.into_iter().partition(|txn| txn.is_planned());

        let due = DueService::sections(planned, now);
        let entries = HistoryService::batch_transfers(realized);
        let history = HistoryService::group_by_day(entries, &options.calendar);

        let list = TransactionsList {
            upcoming: due.upcoming,
            overdue: due.overdue,
            history,
        };
        debug!(
            records = records.len(),
            upcoming = list.upcoming.as_ref().map_or(0, |s| s.len()),
            overdue = list.overdue.as_ref().map_or(0, |s| s.len()),
            history = list.history.len(),
            excluded = due.excluded.len(),
            "aggregated transactions list"
        );
        list
    }
}

/// Drops repeated ids according to `policy`, keeping the winners in input order.
pub fn dedupe(records: &[Transaction], policy: DuplicatePolicy) -> Vec<&Transaction> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut keep = |txn: &&Transaction| {
        let fresh = seen.insert(txn.id);
        if !fresh {
            warn!(transaction = %txn.id, %policy, "duplicate transaction id dropped");
        }
        fresh
    };
    match policy {
        DuplicatePolicy::FirstSeen => records.iter().filter(|txn| keep(txn)).collect(),
        DuplicatePolicy::LastSeen => {
            let mut winners: Vec<&Transaction> =
                records.iter().rev().filter(|txn| keep(txn)).collect();
            winners.reverse();
            winners
        }
    }
}
