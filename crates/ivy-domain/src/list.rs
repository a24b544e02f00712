//! Display-ready transactions list: due sections plus grouped history.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Transaction, TransactionKind, Transfer};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Temporal relation of a planned transaction to the evaluation instant.
pub enum DueKind {
    Upcoming,
    Overdue,
}

impl fmt::Display for DueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DueKind::Upcoming => "Upcoming",
            DueKind::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// Planned transactions sharing a [`DueKind`], soonest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DueSection {
    pub kind: DueKind,
    pub transactions: Vec<Transaction>,
    pub income: f64,
    pub expense: f64,
}

impl DueSection {
    /// Builds a section, or `None` when there is nothing due of this kind.
    pub fn new(kind: DueKind, transactions: Vec<Transaction>) -> Option<DueSection> {
        if transactions.is_empty() {
            return None;
        }
        let mut income = 0.0;
        let mut expense = 0.0;
        for txn in &transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount.abs(),
                TransactionKind::Expense => expense += txn.amount.abs(),
            }
        }
        Some(DueSection {
            kind,
            transactions,
            income,
            expense,
        })
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// One entry of the history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum HistoryItem {
    /// Starts a calendar day; `cashflow` nets the plain transactions below it.
    DateDivider { date: NaiveDate, cashflow: f64 },
    Transaction(Transaction),
    Transfer(Transfer),
}

impl HistoryItem {
    pub fn key(&self) -> ItemKey {
        match self {
            HistoryItem::DateDivider { date, .. } => ItemKey::Date(*date),
            HistoryItem::Transaction(txn) => ItemKey::Transaction(txn.id),
            HistoryItem::Transfer(transfer) => ItemKey::Transfer(transfer.batch_id),
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, HistoryItem::DateDivider { .. })
    }
}

/// Stable identity of a list entry, suitable for incremental UI diffing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Date(NaiveDate),
    Transaction(Uuid),
    Transfer(Uuid),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Date(date) => write!(f, "date:{date}"),
            ItemKey::Transaction(id) => write!(f, "trn:{id}"),
            ItemKey::Transfer(id) => write!(f, "transfer:{id}"),
        }
    }
}

/// Sectioned output of a single aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionsList {
    pub upcoming: Option<DueSection>,
    pub overdue: Option<DueSection>,
    pub history: Vec<HistoryItem>,
}

impl TransactionsList {
    /// `true` when there is no due section and no history at all.
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_none() && self.overdue.is_none() && self.history.is_empty()
    }

    pub fn section(&self, kind: DueKind) -> Option<&DueSection> {
        match kind {
            DueKind::Upcoming => self.upcoming.as_ref(),
            DueKind::Overdue => self.overdue.as_ref(),
        }
    }

    /// History entries without their dividers.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryItem> {
        self.history.iter().filter(|item| !item.is_divider())
    }
}
