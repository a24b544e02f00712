use ivy_domain::Transaction;

use crate::CoreError;

/// Upstream supplier of a complete, already-filtered record snapshot.
pub trait TransactionSource: Send + Sync {
    fn snapshot(&self) -> Result<Vec<Transaction>, CoreError>;
}

/// Serves a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Transaction>,
}

impl InMemorySource {
    pub fn new(records: Vec<Transaction>) -> Self {
        Self { records }
    }
}

impl TransactionSource for InMemorySource {
    fn snapshot(&self) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.records.clone())
    }
}
