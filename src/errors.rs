use ivy_config::ConfigError;
use ivy_core::CoreError;
use thiserror::Error;

/// Failures surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no snapshot file given")]
    MissingSnapshot,
    #[error("{count} record issue(s) found")]
    InvalidRecords { count: usize },
}
