//! `psim-output` — simulation output and chart-data preparation for psim.
//!
//! Two concerns live here, both on the presentation side of the engine's
//! read interface:
//!
//! - **File output**: the [`OutputWriter`] trait with a CSV backend
//!   (`process_snapshots.csv`, `cycle_summaries.csv`), driven per cycle by
//!   [`OutputObserver`], which implements `psim_engine::CycleObserver`.
//! - **Chart series**: helpers in [`series`] that turn raw histories into
//!   the equal-length, pre-aggregated series charts want — forward-filled
//!   CPU series and per-state time shares.
//!
//! # Usage
//!
//! ```rust,ignore
//! use psim_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! engine.run_cycles(5, delay, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod series;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{CycleSummaryRow, ProcessSnapshotRow};
pub use writer::OutputWriter;
