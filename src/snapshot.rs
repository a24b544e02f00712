//! JSON snapshot files: either `{ "transactions": [...] }` or a bare array.

use std::{
    fs,
    path::PathBuf,
};

use ivy_core::{CoreError, TransactionSource};
use ivy_domain::Transaction;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl SnapshotFile {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Reads the whole snapshot from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for JsonFileSource {
    fn snapshot(&self) -> Result<Vec<Transaction>, CoreError> {
        let data = fs::read_to_string(&self.path).map_err(|err| {
            CoreError::SourceUnavailable(format!("{}: {err}", self.path.display()))
        })?;
        let records = decode(&data)?;
        debug!(
            path = %self.path.display(),
            records = records.len(),
            "snapshot loaded"
        );
        Ok(records)
    }
}

/// Decodes snapshot text into records.
pub fn decode(data: &str) -> Result<Vec<Transaction>, CoreError> {
    let result = if data.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Transaction>>(data)
    } else {
        serde_json::from_str::<SnapshotFile>(data).map(|file| file.transactions)
    };
    result.map_err(|err| CoreError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "6f1c2b1e-8a5e-4c3f-9a43-0c7f3c1b2a10",
        "kind": "Expense",
        "amount": 12.5,
        "time": "2025-05-09T10:00:00Z",
        "account_id": "0b6f3a4e-2c1d-4f5e-8a9b-1c2d3e4f5a6b"
    }"#;

    #[test]
    fn decodes_wrapped_and_bare_documents() {
        let wrapped = format!(r#"{{ "transactions": [{RECORD}] }}"#);
        let bare = format!("[{RECORD}]");

        let from_wrapped = decode(&wrapped).unwrap();
        let from_bare = decode(&bare).unwrap();

        assert_eq!(from_wrapped.len(), 1);
        assert_eq!(from_wrapped, from_bare);
        assert!(!from_wrapped[0].is_planned());
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        assert!(decode("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_text_is_a_decode_error() {
        assert!(matches!(decode("{ nope"), Err(CoreError::Decode(_))));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(
            source.snapshot(),
            Err(CoreError::SourceUnavailable(_))
        ));
    }
}
