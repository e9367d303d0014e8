//! The `OutputWriter` trait implemented by backend writers.

use crate::{CycleSummaryRow, OutputResult, ProcessSnapshotRow};

/// Backend-agnostic sink for simulation output.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-process snapshots for one cycle.
    fn write_snapshots(&mut self, rows: &[ProcessSnapshotRow]) -> OutputResult<()>;

    /// Write one cycle summary row.
    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
