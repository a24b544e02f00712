//! ivy-core
//!
//! Turns a flat snapshot of transactions into a sectioned, display-ready list.
//! Depends on ivy-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod aggregate;
pub mod due;
pub mod error;
pub mod feed;
pub mod history;
pub mod presentation;
pub mod source;
pub mod time;
pub mod validation;

pub use aggregate::*;
pub use due::*;
pub use error::CoreError;
pub use feed::*;
pub use history::*;
pub use presentation::*;
pub use source::*;
pub use time::*;
pub use validation::*;
