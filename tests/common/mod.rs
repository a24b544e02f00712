#![allow(dead_code)]

use std::path::PathBuf;

use assert_fs::{prelude::*, TempDir};
use chrono::{DateTime, TimeZone, Utc};
use ivy_domain::{Transaction, TransactionKind};
use ivy_wallet::snapshot::SnapshotFile;
use uuid::Uuid;

/// Temporary directory holding a snapshot and a config file for one test.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn snapshot(&self, records: Vec<Transaction>) -> PathBuf {
        let file = self.dir.child("snapshot.json");
        let json = SnapshotFile::new(records).to_json().expect("encode snapshot");
        file.write_str(&json).expect("write snapshot");
        file.path().to_path_buf()
    }

    /// Path for a config file that does not exist yet, so defaults apply.
    pub fn config_path(&self) -> PathBuf {
        self.dir.child("config.json").path().to_path_buf()
    }

    pub fn config(&self, json: &str) -> PathBuf {
        let file = self.dir.child("config.json");
        file.write_str(json).expect("write config");
        file.path().to_path_buf()
    }
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap()
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap()
}

pub fn checking() -> Uuid {
    Uuid::from_u128(0x1111_1111_1111_1111_1111_1111_1111_1111)
}

pub fn savings() -> Uuid {
    Uuid::from_u128(0x2222_2222_2222_2222_2222_2222_2222_2222)
}

/// One upcoming bill, one overdue bill, two expenses and a salary on May 9, and a transfer on May 8.
pub fn household() -> Vec<Transaction> {
    let batch = Uuid::from_u128(0xbeef);
    vec![
        Transaction::planned(TransactionKind::Expense, 800.0, at(20, 9), checking())
            .with_title("Rent"),
        Transaction::planned(TransactionKind::Expense, 30.0, at(1, 9), checking())
            .with_title("Gym"),
        Transaction::realized(TransactionKind::Expense, 3.5, at(9, 7), checking())
            .with_title("Coffee"),
        Transaction::realized(TransactionKind::Income, 2500.0, at(9, 8), checking())
            .with_title("Salary"),
        Transaction::realized(TransactionKind::Expense, 200.0, at(8, 10), checking())
            .with_batch(batch),
        Transaction::realized(TransactionKind::Income, 200.0, at(8, 10), savings())
            .with_batch(batch),
    ]
}
