//! Detects data-contract violations in a record snapshot without altering it.

use std::{collections::HashSet, fmt};

use uuid::Uuid;

use ivy_domain::{Transaction, TransferIssue};

use crate::{
    dedupe,
    history::{pair_batch, split_batches},
    DuplicatePolicy,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordIssue {
    /// A planned record arrived without a due date.
    MissingDueDate(Uuid),
    DuplicateId(Uuid),
    Transfer(TransferIssue),
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIssue::MissingDueDate(id) => {
                write!(f, "planned transaction {id} has no due date")
            }
            RecordIssue::DuplicateId(id) => write!(f, "transaction id {id} appears more than once"),
            RecordIssue::Transfer(issue) => write!(f, "{issue}"),
        }
    }
}

/// Lists every anomaly the aggregator would silently degrade around.
///
/// Repeated ids are reported once as [`RecordIssue::DuplicateId`]; the remaining
/// checks run on the deduplicated records, as aggregation does.
pub fn record_issues(records: &[Transaction]) -> Vec<RecordIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::with_capacity(records.len());
    let mut reported = HashSet::new();
    for txn in records {
        if !seen.insert(txn.id) && reported.insert(txn.id) {
            issues.push(RecordIssue::DuplicateId(txn.id));
        }
    }

    let unique = dedupe(records, DuplicatePolicy::FirstSeen);
    for txn in &unique {
        if txn.is_planned() && txn.due_date.is_none() {
            issues.push(RecordIssue::MissingDueDate(txn.id));
        }
    }

    let (batches, _) = split_batches(unique.into_iter().filter(|txn| !txn.is_planned()));
    for (batch_id, legs) in batches {
        if let Err(issue) = pair_batch(batch_id, &legs) {
            issues.push(RecordIssue::Transfer(issue));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ivy_domain::TransactionKind;

    #[test]
    fn clean_snapshot_has_no_issues() {
        let time = Utc.with_ymd_and_hms(2025, 2, 2, 2, 0, 0).unwrap();
        let batch = Uuid::new_v4();
        let records = vec![
            Transaction::realized(TransactionKind::Expense, 9.0, time, Uuid::new_v4()),
            Transaction::realized(TransactionKind::Expense, 70.0, time, Uuid::new_v4())
                .with_batch(batch),
            Transaction::realized(TransactionKind::Income, 70.0, time, Uuid::new_v4())
                .with_batch(batch),
            Transaction::planned(TransactionKind::Income, 5.0, time, Uuid::new_v4()),
        ];

        assert!(record_issues(&records).is_empty());
    }

    #[test]
    fn reports_each_kind_of_violation_once() {
        let time = Utc.with_ymd_and_hms(2025, 2, 2, 2, 0, 0).unwrap();
        let batch = Uuid::new_v4();
        let mut undated = Transaction::planned(TransactionKind::Expense, 1.0, time, Uuid::new_v4());
        undated.due_date = None;
        let single = Transaction::realized(TransactionKind::Expense, 3.0, time, Uuid::new_v4());
        let records = vec![
            undated.clone(),
            single.clone(),
            single.clone(),
            single.clone(),
            Transaction::realized(TransactionKind::Expense, 70.0, time, Uuid::new_v4())
                .with_batch(batch),
        ];

        let issues = record_issues(&records);

        assert_eq!(
            issues,
            vec![
                RecordIssue::DuplicateId(single.id),
                RecordIssue::MissingDueDate(undated.id),
                RecordIssue::Transfer(TransferIssue::LegCount {
                    batch_id: batch,
                    legs: 1
                }),
            ]
        );
        assert_eq!(
            issues[1].to_string(),
            format!("planned transaction {} has no due date", undated.id)
        );
    }

    #[test]
    fn repeated_transfer_leg_is_only_a_duplicate() {
        let time = Utc.with_ymd_and_hms(2025, 2, 2, 2, 0, 0).unwrap();
        let batch = Uuid::new_v4();
        let debit = Transaction::realized(TransactionKind::Expense, 70.0, time, Uuid::new_v4())
            .with_batch(batch);
        let credit = Transaction::realized(TransactionKind::Income, 70.0, time, Uuid::new_v4())
            .with_batch(batch);
        let records = vec![debit.clone(), credit, debit.clone()];

        let list = crate::aggregate(&records, time, &crate::CalendarZone::Utc);
        let transfers = list
            .entries()
            .filter(|item| matches!(item, ivy_domain::HistoryItem::Transfer(_)))
            .count();

        assert_eq!(transfers, 1);
        assert_eq!(record_issues(&records), vec![RecordIssue::DuplicateId(debit.id)]);
    }
}
