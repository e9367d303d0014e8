//! Chart-series preparation.
//!
//! Charts want pre-shaped data: every process's CPU series the same length,
//! per-state time as fractions of a whole.  These helpers do that shaping on
//! the adapter side so the engine's histories stay raw and append-only.

use psim_core::{Cycle, ProcessId, StateMap};
use psim_process::{ProcessRecord, ProcessStore};

/// CPU load series for every process, forward-filled to a common length.
///
/// Returns one `(id, series)` pair per process, each series exactly
/// `through.history_index() + 1` entries long: histories shorter than the
/// target are padded by repeating their last sample, longer ones are
/// truncated.  The engine normally keeps all histories in lockstep, so the
/// padding only matters for charts drawn against a different cycle horizon.
pub fn padded_cpu_series(store: &ProcessStore, through: Cycle) -> Vec<(ProcessId, Vec<u8>)> {
    let target = through.history_index() + 1;

    store
        .iter()
        .map(|record| {
            let history = record.cpu_usage_history();
            let mut series: Vec<u8> = history.iter().copied().take(target).collect();
            let fill = series.last().copied().unwrap_or(0);
            series.resize(target, fill);
            (record.id, series)
        })
        .collect()
}

/// Fraction of a process's recorded lifetime spent in each state.
///
/// The shares always sum to 1.0 (every recorded cycle is in exactly one
/// state) — ready to feed a pie chart without re-normalizing.
pub fn time_in_state_shares(record: &ProcessRecord) -> StateMap<f64> {
    let recorded = record.cycles_recorded() as f64;
    StateMap::from_fn(|state| record.time_in_state()[state] as f64 / recorded)
}
