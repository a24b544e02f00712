use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),
    #[error("Unknown duplicate policy: {0}")]
    InvalidDuplicatePolicy(String),
    #[error("Snapshot unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Snapshot could not be decoded: {0}")]
    Decode(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
