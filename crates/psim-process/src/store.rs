//! Process storage: `ProcessStore` (records) and `ProcessRngs` (per-process RNG).
//!
//! # Why two structs?
//!
//! The engine's cycle pass needs `&mut` access to each record *and* to that
//! record's RNG at the same time.  Keeping the RNGs in a separate struct
//! lets the engine hold disjoint `&mut self.store` + `&mut self.rngs` field
//! borrows, and — just as important — lets it hand observers a plain
//! `&ProcessStore` that carries no generator state at all.

use psim_core::{ProcessId, ProcessRng, ProcessState, StateMap};

use crate::record::ProcessRecord;

// ── ProcessRngs ───────────────────────────────────────────────────────────────

/// Per-process deterministic RNG state, separated from [`ProcessStore`] so
/// the cycle pass can borrow both mutably at once.
pub struct ProcessRngs {
    inner: Vec<ProcessRng>,
}

impl ProcessRngs {
    /// Allocate and seed `count` per-process RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| ProcessRng::new(global_seed, ProcessId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one process's RNG.
    #[inline]
    pub fn get_mut(&mut self, process: ProcessId) -> &mut ProcessRng {
        &mut self.inner[process.index()]
    }

    /// Iterate all RNGs in process-ID order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessRng> {
        self.inner.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── ProcessStore ──────────────────────────────────────────────────────────────

/// The ordered collection of all process records in a run.
///
/// Membership is fixed for the lifetime of the run: records are created
/// together by [`ProcessSetBuilder`][crate::ProcessSetBuilder] and replaced
/// wholesale on reset, never added or removed mid-run.  The `ProcessId`
/// value is the index into the collection.
pub struct ProcessStore {
    records: Vec<ProcessRecord>,
}

impl ProcessStore {
    pub(crate) fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    /// Number of processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if there are no processes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by ID.  Returns `None` for out-of-range IDs
    /// (including `ProcessId::INVALID`).
    pub fn get(&self, process: ProcessId) -> Option<&ProcessRecord> {
        self.records.get(process.index())
    }

    /// Iterator over all `ProcessId`s in ascending index order.
    pub fn process_ids(&self) -> impl Iterator<Item = ProcessId> + '_ {
        (0..self.records.len() as u32).map(ProcessId)
    }

    /// Iterate records in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.records.iter()
    }

    /// Iterate records mutably, in collection order.  Used by the engine's
    /// cycle pass; presentation code never needs this.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessRecord> {
        self.records.iter_mut()
    }

    /// Count how many processes are currently in each state.
    ///
    /// A full recompute over the collection — intentionally not maintained
    /// incrementally, so the result is correct by construction whenever it
    /// is taken.
    pub fn state_counts(&self) -> StateMap<u32> {
        let mut counts: StateMap<u32> = StateMap::default();
        for record in &self.records {
            counts[record.current_state()] += 1;
        }
        counts
    }

    /// `true` once every process has reached the absorbing state.
    pub fn all_terminated(&self) -> bool {
        self.records.iter().all(ProcessRecord::is_terminated)
    }

    /// Count of processes currently in `state`.
    pub fn count_in(&self, state: ProcessState) -> u32 {
        self.records
            .iter()
            .filter(|r| r.current_state() == state)
            .count() as u32
    }
}
