//! Classification of planned transactions into upcoming and overdue sections.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use ivy_domain::{DueKind, DueSection, Transaction};

/// Due sections computed for one evaluation instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DueSections {
    pub upcoming: Option<DueSection>,
    pub overdue: Option<DueSection>,
    /// Planned records left out because they carry no due date.
    pub excluded: Vec<Uuid>,
}

pub struct DueService;

impl DueService {
    /// A due date equal to `now` still counts as upcoming.
    pub fn classify(due_date: DateTime<Utc>, now: DateTime<Utc>) -> DueKind {
        if due_date >= now {
            DueKind::Upcoming
        } else {
            DueKind::Overdue
        }
    }

    /// Splits planned transactions into sections sorted soonest first, ties by id.
    pub fn sections<'a, I>(planned: I, now: DateTime<Utc>) -> DueSections
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut upcoming: Vec<(DateTime<Utc>, &Transaction)> = Vec::new();
        let mut overdue: Vec<(DateTime<Utc>, &Transaction)> = Vec::new();
        let mut excluded = Vec::new();

        for txn in planned {
            let Some(due_date) = txn.due_date else {
                warn!(transaction = %txn.id, "planned transaction has no due date, skipping");
                excluded.push(txn.id);
                continue;
            };
            match Self::classify(due_date, now) {
                DueKind::Upcoming => upcoming.push((due_date, txn)),
                DueKind::Overdue => overdue.push((due_date, txn)),
            }
        }

        DueSections {
            upcoming: build_section(DueKind::Upcoming, upcoming),
            overdue: build_section(DueKind::Overdue, overdue),
            excluded,
        }
    }
}

fn build_section(
    kind: DueKind,
    mut entries: Vec<(DateTime<Utc>, &Transaction)>,
) -> Option<DueSection> {
    entries.sort_by(|(a_due, a), (b_due, b)| a_due.cmp(b_due).then_with(|| a.id.cmp(&b.id)));
    DueSection::new(kind, entries.into_iter().map(|(_, txn)| txn.clone()).collect())
}
