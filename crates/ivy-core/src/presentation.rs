//! Flattens a [`TransactionsList`] into keyed rows for a list widget.
//!
//! Expand/collapse state is a plain value owned by the caller: it goes in with
//! every call and comes back, possibly toggled, in the returned presentation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ivy_domain::{
    DueKind, DueSection, HistoryItem, ItemKey, Transaction, TransactionsList, Transfer,
};

/// Which due sections show their transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandState {
    pub upcoming: bool,
    pub overdue: bool,
}

impl Default for ExpandState {
    fn default() -> Self {
        Self {
            upcoming: false,
            overdue: true,
        }
    }
}

impl ExpandState {
    pub fn is_expanded(&self, kind: DueKind) -> bool {
        match kind {
            DueKind::Upcoming => self.upcoming,
            DueKind::Overdue => self.overdue,
        }
    }

    pub fn with(mut self, kind: DueKind, expanded: bool) -> Self {
        match kind {
            DueKind::Upcoming => self.upcoming = expanded,
            DueKind::Overdue => self.overdue = expanded,
        }
        self
    }

    pub fn toggled(self, kind: DueKind) -> Self {
        let expanded = self.is_expanded(kind);
        self.with(kind, !expanded)
    }
}

/// Copy shown in place of the list when there is nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No transactions".into(),
            description: "You don't have any transactions yet. Tap the \"+\" to add one.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    DueHeader {
        kind: DueKind,
        count: usize,
        income: f64,
        expense: f64,
        expanded: bool,
    },
    Due(Transaction),
    DateDivider {
        date: NaiveDate,
        cashflow: f64,
    },
    Transaction(Transaction),
    Transfer(Transfer),
    Empty(EmptyState),
}

/// Stable row identity for incremental diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    Header(DueKind),
    Item(ItemKey),
    Empty,
}

impl ListRow {
    pub fn key(&self) -> RowKey {
        match self {
            ListRow::DueHeader { kind, .. } => RowKey::Header(*kind),
            ListRow::Due(txn) | ListRow::Transaction(txn) => {
                RowKey::Item(ItemKey::Transaction(txn.id))
            }
            ListRow::DateDivider { date, .. } => RowKey::Item(ItemKey::Date(*date)),
            ListRow::Transfer(transfer) => RowKey::Item(ItemKey::Transfer(transfer.batch_id)),
            ListRow::Empty(_) => RowKey::Empty,
        }
    }
}

/// Rows to draw together with the expand state they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPresentation {
    pub rows: Vec<ListRow>,
    pub expand: ExpandState,
}

impl ListPresentation {
    pub fn is_empty_state(&self) -> bool {
        matches!(self.rows.as_slice(), [ListRow::Empty(_)])
    }

    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(ListRow::key).collect()
    }
}

/// Builds rows for `list`: upcoming, overdue, then history, or a single empty row.
pub fn present(
    list: &TransactionsList,
    expand: ExpandState,
    empty: &EmptyState,
) -> ListPresentation {
    if list.is_empty() {
        return ListPresentation {
            rows: vec![ListRow::Empty(empty.clone())],
            expand,
        };
    }

    let mut rows = Vec::new();
    for section in [&list.upcoming, &list.overdue].into_iter().flatten() {
        push_section(&mut rows, section, expand);
    }
    rows.extend(list.history.iter().map(|item| match item {
        HistoryItem::DateDivider { date, cashflow } => ListRow::DateDivider {
            date: *date,
            cashflow: *cashflow,
        },
        HistoryItem::Transaction(txn) => ListRow::Transaction(txn.clone()),
        HistoryItem::Transfer(transfer) => ListRow::Transfer(transfer.clone()),
    }));

    ListPresentation { rows, expand }
}

/// Applies a header tap and rebuilds the rows with the new state.
pub fn toggle_section(
    list: &TransactionsList,
    expand: ExpandState,
    kind: DueKind,
    empty: &EmptyState,
) -> ListPresentation {
    present(list, expand.toggled(kind), empty)
}

fn push_section(rows: &mut Vec<ListRow>, section: &DueSection, expand: ExpandState) {
    let expanded = expand.is_expanded(section.kind);
    rows.push(ListRow::DueHeader {
        kind: section.kind,
        count: section.len(),
        income: section.income,
        expense: section.expense,
        expanded,
    });
    if expanded {
        rows.extend(section.transactions.iter().cloned().map(ListRow::Due));
    }
}
