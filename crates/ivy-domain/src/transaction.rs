//! Domain models for realized and planned transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    /// Magnitude of the movement; `kind` carries the direction.
    pub amount: f64,
    pub time: DateTime<Utc>,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: SettlementState,
    /// Shared by the two legs of a transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_series_id: Option<Uuid>,
}

impl Transaction {
    /// Builds a realized transaction that happened at `time`.
    pub fn realized(
        kind: TransactionKind,
        amount: f64,
        time: DateTime<Utc>,
        account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            time,
            account_id,
            category_id: None,
            due_date: None,
            state: SettlementState::Realized,
            batch_id: None,
            title: None,
            recurrence_series_id: None,
        }
    }

    /// Builds a planned transaction due at `due_date`.
    pub fn planned(
        kind: TransactionKind,
        amount: f64,
        due_date: DateTime<Utc>,
        account_id: Uuid,
    ) -> Self {
        Self {
            due_date: Some(due_date),
            state: SettlementState::Planned,
            ..Self::realized(kind, amount, due_date, account_id)
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_batch(mut self, batch_id: Uuid) -> Self {
        self.batch_id = Some(batch_id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_planned(&self) -> bool {
        matches!(self.state, SettlementState::Planned)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Transaction {
    fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount.abs(),
            TransactionKind::Expense => -self.amount.abs(),
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        self.title.clone().unwrap_or_else(|| self.kind.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Direction of money relative to the owning account.
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Whether money already moved or is only scheduled to move.
pub enum SettlementState {
    #[default]
    Realized,
    Planned,
}

impl fmt::Display for SettlementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettlementState::Realized => "Realized",
            SettlementState::Planned => "Planned",
        };
        f.write_str(label)
    }
}
