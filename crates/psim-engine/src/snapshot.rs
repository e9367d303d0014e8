//! Owned snapshot types — the pull-based read model for presentation.
//!
//! A snapshot is captured after a cycle and owns all of its data: the
//! presentation layer renders from it freely while the engine stays
//! exclusively owned by whoever drives the simulation.  With the `serde`
//! feature the whole snapshot serializes to JSON for out-of-process viewers.

use psim_core::{Cycle, Priority, ProcessId, ProcessState, StateMap};
use psim_process::{ProcessRecord, ProcessStore};

// ── ProcessView ───────────────────────────────────────────────────────────────

/// Owned copy of everything the presentation layer shows for one process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessView {
    pub id:                       ProcessId,
    pub priority:                 Priority,
    pub state:                    ProcessState,
    pub initial_execution_time:   u32,
    pub remaining_execution_time: u32,
    pub execution_cycle_hint:     u32,
    /// Completed fraction of the initial execution time, in `[0.0, 1.0]`.
    pub progress_ratio:           f64,
    pub memory_usage_mb:          u32,
    pub core_affinity:            u8,
    pub thread_affinity:          u8,
    pub state_history:            Vec<ProcessState>,
    pub time_in_state:            StateMap<u64>,
    pub cpu_usage_history:        Vec<u8>,
}

impl ProcessView {
    fn of(record: &ProcessRecord) -> Self {
        Self {
            id:                       record.id,
            priority:                 record.priority,
            state:                    record.current_state(),
            initial_execution_time:   record.initial_execution_time,
            remaining_execution_time: record.remaining_execution_time(),
            execution_cycle_hint:     record.execution_cycle_hint,
            progress_ratio:           record.progress_ratio(),
            memory_usage_mb:          record.memory_usage_mb,
            core_affinity:            record.core_affinity,
            thread_affinity:          record.thread_affinity,
            state_history:            record.state_history().to_vec(),
            time_in_state:            *record.time_in_state(),
            cpu_usage_history:        record.cpu_usage_history().to_vec(),
        }
    }
}

// ── EngineSnapshot ────────────────────────────────────────────────────────────

/// Owned, point-in-time view of the whole engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    pub cycle:        Cycle,
    pub state_counts: StateMap<u32>,
    pub processes:    Vec<ProcessView>,
}

impl EngineSnapshot {
    pub(crate) fn capture(
        cycle:        Cycle,
        state_counts: &StateMap<u32>,
        store:        &ProcessStore,
    ) -> Self {
        Self {
            cycle,
            state_counts: *state_counts,
            processes: store.iter().map(ProcessView::of).collect(),
        }
    }
}
