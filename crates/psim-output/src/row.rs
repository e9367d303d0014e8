//! Plain data row types written by output backends.

use psim_core::{Cycle, ProcessState, StateMap};
use psim_process::ProcessRecord;

/// A snapshot of one process at the end of a given cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSnapshotRow {
    pub process_id:               u32,
    pub cycle:                    u64,
    /// State label (`"Running"`, `"Waiting"`, …).
    pub state:                    &'static str,
    pub remaining_execution_time: u32,
    /// The CPU sample drawn for this cycle.
    pub cpu_usage:                u8,
    pub memory_usage_mb:          u32,
}

impl ProcessSnapshotRow {
    /// Flatten one record's post-cycle state into a row.
    pub fn of(record: &ProcessRecord, cycle: Cycle) -> Self {
        Self {
            process_id:               record.id.0,
            cycle:                    cycle.0,
            state:                    record.current_state().label(),
            remaining_execution_time: record.remaining_execution_time(),
            cpu_usage:                record.last_cpu_sample(),
            memory_usage_mb:          record.memory_usage_mb,
        }
    }
}

/// Per-state population counts for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummaryRow {
    pub cycle:      u64,
    pub new:        u32,
    pub ready:      u32,
    pub running:    u32,
    pub waiting:    u32,
    pub terminated: u32,
}

impl CycleSummaryRow {
    /// Flatten a state-count map into the fixed column set.
    pub fn from_counts(cycle: Cycle, counts: &StateMap<u32>) -> Self {
        Self {
            cycle:      cycle.0,
            new:        counts[ProcessState::New],
            ready:      counts[ProcessState::Ready],
            running:    counts[ProcessState::Running],
            waiting:    counts[ProcessState::Waiting],
            terminated: counts[ProcessState::Terminated],
        }
    }
}
