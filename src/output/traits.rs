//! Output handler traits and types
//!
//! This module defines the interface the page processor uses to publish
//! snapshots of the corpus statistics.

use crate::stats::StatsSnapshot;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Receives a snapshot after every processed page
///
/// Emission is fire-and-forget from the processor's point of view: an error is
/// logged and the crawl carries on.
pub trait SnapshotSink {
    /// Publishes a snapshot, replacing whatever was published before
    fn emit(&mut self, snapshot: &StatsSnapshot) -> OutputResult<()>;
}

/// Keeps the most recent snapshot in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    latest: Option<StatsSnapshot>,
    emitted: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last snapshot emitted, if any
    pub fn latest(&self) -> Option<&StatsSnapshot> {
        self.latest.as_ref()
    }

    /// Number of snapshots emitted so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl SnapshotSink for MemorySink {
    fn emit(&mut self, snapshot: &StatsSnapshot) -> OutputResult<()> {
        self.latest = Some(snapshot.clone());
        self.emitted += 1;
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn emit(&mut self, snapshot: &StatsSnapshot) -> OutputResult<()> {
        (**self).emit(snapshot)
    }
}
