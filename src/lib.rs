#![doc(test(attr(deny(warnings))))]

//! Ivy Wallet transactions list: a command-line front end over `ivy-core`
//! that loads a record snapshot, aggregates it and prints the sectioned list.

pub mod cli;
pub mod errors;
pub mod settings;
pub mod snapshot;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("ivy_wallet tracing initialized");
    });
}
