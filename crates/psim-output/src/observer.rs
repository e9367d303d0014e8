//! `OutputObserver<W>` — bridges `CycleObserver` to an `OutputWriter`.

use psim_core::Cycle;
use psim_engine::{CycleObserver, CycleReport};
use psim_process::ProcessStore;

use crate::row::{CycleSummaryRow, ProcessSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`CycleObserver`] that writes per-process snapshots and cycle
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run completes, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CycleObserver for OutputObserver<W> {
    fn on_cycle_end(&mut self, cycle: Cycle, processes: &ProcessStore, report: &CycleReport) {
        let summary = CycleSummaryRow::from_counts(cycle, &report.state_counts);
        let result = self.writer.write_cycle_summary(&summary);
        self.store_err(result);

        let rows: Vec<ProcessSnapshotRow> = processes
            .iter()
            .map(|record| ProcessSnapshotRow::of(record, cycle))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_cycle: Cycle) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
