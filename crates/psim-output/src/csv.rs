//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `process_snapshots.csv`
//! - `cycle_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CycleSummaryRow, OutputResult, ProcessSnapshotRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("process_snapshots.csv"))?;
        snapshots.write_record([
            "process_id",
            "cycle",
            "state",
            "remaining_execution_time",
            "cpu_usage",
            "memory_usage_mb",
        ])?;

        let mut summaries = Writer::from_path(dir.join("cycle_summaries.csv"))?;
        summaries.write_record(["cycle", "new", "ready", "running", "waiting", "terminated"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ProcessSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.process_id.to_string(),
                row.cycle.to_string(),
                row.state.to_string(),
                row.remaining_execution_time.to_string(),
                row.cpu_usage.to_string(),
                row.memory_usage_mb.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.cycle.to_string(),
            row.new.to_string(),
            row.ready.to_string(),
            row.running.to_string(),
            row.waiting.to_string(),
            row.terminated.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
