//! ivy-config
//!
//! Persistent preferences for the transactions list.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, EmptyStateText, SectionDefaults};
