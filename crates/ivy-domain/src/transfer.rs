//! Transfers: two transaction legs linked by a batch id.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, Transaction, TransactionKind};

/// Largest leg magnitude difference still treated as the same amount.
pub const AMOUNT_TOLERANCE: f64 = 1e-9;

/// A movement between two accounts, presented and removed as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub batch_id: Uuid,
    /// Source debit leg.
    pub from: Transaction,
    /// Destination credit leg.
    pub to: Transaction,
}

impl Transfer {
    /// Pairs the legs of `batch_id`, returning why the batch is malformed otherwise.
    pub fn from_legs(batch_id: Uuid, legs: &[Transaction]) -> Result<Transfer, TransferIssue> {
        let [first, second] = legs else {
            return Err(TransferIssue::LegCount {
                batch_id,
                legs: legs.len(),
            });
        };
        let (from, to) = match (first.kind, second.kind) {
            (TransactionKind::Expense, TransactionKind::Income) => (first, second),
            (TransactionKind::Income, TransactionKind::Expense) => (second, first),
            (kind, _) => return Err(TransferIssue::Direction { batch_id, kind }),
        };
        let debit = from.amount.abs();
        let credit = to.amount.abs();
        if (debit - credit).abs() > AMOUNT_TOLERANCE {
            return Err(TransferIssue::AmountMismatch {
                batch_id,
                debit,
                credit,
            });
        }
        Ok(Transfer {
            batch_id,
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// The instant the transfer is ordered by: its debit leg's timestamp.
    pub fn time(&self) -> DateTime<Utc> {
        self.from.time
    }

    pub fn amount(&self) -> f64 {
        self.from.amount.abs()
    }
}

impl Identifiable for Transfer {
    fn id(&self) -> Uuid {
        self.batch_id
    }
}

impl Displayable for Transfer {
    fn display_label(&self) -> String {
        format!(
            "Transfer {} -> {}",
            short_id(self.from.account_id),
            short_id(self.to.account_id)
        )
    }
}

fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

/// Reasons a batch cannot be presented as a single transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferIssue {
    LegCount { batch_id: Uuid, legs: usize },
    Direction { batch_id: Uuid, kind: TransactionKind },
    AmountMismatch { batch_id: Uuid, debit: f64, credit: f64 },
}

impl TransferIssue {
    pub fn batch_id(&self) -> Uuid {
        match self {
            TransferIssue::LegCount { batch_id, .. }
            | TransferIssue::Direction { batch_id, .. }
            | TransferIssue::AmountMismatch { batch_id, .. } => *batch_id,
        }
    }
}

impl fmt::Display for TransferIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferIssue::LegCount { batch_id, legs } => {
                write!(f, "transfer {batch_id} has {legs} legs, expected 2")
            }
            TransferIssue::Direction { batch_id, kind } => {
                write!(f, "transfer {batch_id} has two {kind} legs")
            }
            TransferIssue::AmountMismatch {
                batch_id,
                debit,
                credit,
            } => write!(
                f,
                "transfer {batch_id} debit {debit} does not match credit {credit}"
            ),
        }
    }
}
