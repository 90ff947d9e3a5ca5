//! Progress reporting hooks for long scans
//!
//! The conversion never depends on an observer; the driver calls one if it
//! was given one.

use std::fmt;

/// Pipeline stage reported to [`ProgressObserver::stage_finished`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Node selection over the metadata dump
    Selection,
    /// Edge filtering over the edge list
    EdgeFilter,
    /// Writing the graph document
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Selection => "selection",
            Stage::EdgeFilter => "edge-filter",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Observer for scan progress
///
/// All methods default to doing nothing.
pub trait ProgressObserver {
    /// A metadata record was scanned; `total` records so far
    fn record_scanned(&mut self, _total: usize) {}

    /// An edge-list line was read; `total` lines so far
    fn edge_line_read(&mut self, _total: usize) {}

    /// A stage completed, producing `count` items
    fn stage_finished(&mut self, _stage: Stage, _count: usize) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Observer that logs a `debug!` event every `every` items
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    every: usize,
}

impl LogProgress {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl ProgressObserver for LogProgress {
    fn record_scanned(&mut self, total: usize) {
        if total % self.every == 0 {
            tracing::debug!(records = total, "scanning nodes");
        }
    }

    fn edge_line_read(&mut self, total: usize) {
        if total % self.every == 0 {
            tracing::debug!(lines = total, "processing edges");
        }
    }

    fn stage_finished(&mut self, stage: Stage, count: usize) {
        tracing::debug!(%stage, count, "stage finished");
    }
}
