//! ivy-domain
//!
//! Pure domain models (Transaction, Transfer, due sections, history items).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod list;
pub mod transaction;
pub mod transfer;

pub use common::*;
pub use list::*;
pub use transaction::*;
pub use transfer::*;
