//! Live re-aggregation: every incoming snapshot maps to a fresh list.
//!
//! The subscription lives here so [`TransactionsListService::aggregate`] stays a
//! plain function with no streaming concerns.

use std::{
    sync::mpsc::{self, Receiver},
    thread::{self, JoinHandle},
};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use ivy_domain::{Transaction, TransactionsList};

use crate::{Clock, CoreError, ListOptions, TransactionSource, TransactionsListService};

/// Records plus the instant they should be evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub records: Vec<Transaction>,
    pub now: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(records: Vec<Transaction>, now: DateTime<Utc>) -> Self {
        Self { records, now }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListFeed {
    options: ListOptions,
}

impl ListFeed {
    pub fn new(options: ListOptions) -> Self {
        Self { options }
    }

    pub fn apply(&self, snapshot: &Snapshot) -> TransactionsList {
        TransactionsListService::aggregate(&snapshot.records, snapshot.now, &self.options)
    }

    /// Pulls a snapshot from `source`, stamped with `clock`, and aggregates it.
    pub fn refresh(
        &self,
        source: &dyn TransactionSource,
        clock: &dyn Clock,
    ) -> Result<TransactionsList, CoreError> {
        let snapshot = Snapshot::new(source.snapshot()?, clock.now());
        Ok(self.apply(&snapshot))
    }

    /// Lazily maps a sequence of snapshots to lists.
    pub fn map_snapshots<'a, I>(
        &'a self,
        snapshots: I,
    ) -> impl Iterator<Item = TransactionsList> + 'a
    where
        I: IntoIterator<Item = Snapshot> + 'a,
        I::IntoIter: 'a,
    {
        snapshots.into_iter().map(move |snapshot| self.apply(&snapshot))
    }

    /// Runs the feed on a worker thread until `input` hangs up.
    ///
    /// A list equal to the previously published one is not sent again.
    pub fn spawn(self, input: Receiver<Snapshot>) -> Result<FeedHandle, CoreError> {
        let (output, updates) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("ivy-list-feed".into())
            .spawn(move || {
                let mut last: Option<TransactionsList> = None;
                for snapshot in input {
                    let list = self.apply(&snapshot);
                    if last.as_ref() == Some(&list) {
                        debug!("list unchanged, skipping update");
                        continue;
                    }
                    if output.send(list.clone()).is_err() {
                        debug!("list feed subscriber dropped");
                        break;
                    }
                    last = Some(list);
                }
            })?;
        Ok(FeedHandle { updates, worker })
    }
}

/// Subscription side of a spawned [`ListFeed`].
#[derive(Debug)]
pub struct FeedHandle {
    pub updates: Receiver<TransactionsList>,
    worker: JoinHandle<()>,
}

impl FeedHandle {
    /// Waits for the worker to stop; it stops once the snapshot sender is dropped.
    pub fn join(self) -> Vec<TransactionsList> {
        let FeedHandle { updates, worker } = self;
        let remaining: Vec<TransactionsList> = updates.iter().collect();
        if worker.join().is_err() {
            warn!("list feed worker panicked");
        }
        remaining
    }
}
