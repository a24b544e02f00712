use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Failures reading or writing the preferences file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {path} is not a valid preferences document: {message}")]
    Format { path: PathBuf, message: String },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, err: serde_json::Error) -> Self {
        ConfigError::Format {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
