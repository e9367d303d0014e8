//! One simulated process: identity, static parameters, and history state.
//!
//! # Mutation discipline
//!
//! A record is mutated through exactly two methods — [`record_transition`]
//! and [`decrement_remaining`] — both called only by the lifecycle engine's
//! cycle pass.  Everything else is read-only, which is what lets the
//! presentation layer hold snapshots without ever observing a half-updated
//! record.
//!
//! [`record_transition`]: ProcessRecord::record_transition
//! [`decrement_remaining`]: ProcessRecord::decrement_remaining

use psim_core::{Priority, ProcessId, ProcessRng, ProcessState, StateMap};

use crate::builder::ProcessSpec;

// ── Creation-time sampling ranges ─────────────────────────────────────────────

/// Memory footprint in MB, fixed for the life of the process.
const MEMORY_RANGE_MB: std::ops::RangeInclusive<u32> = 100..=600;

/// Core the process is pinned to (display only).
const CORE_RANGE: std::ops::RangeInclusive<u8> = 0..=3;

/// Thread slot within the core (display only).
const THREAD_RANGE: std::ops::RangeInclusive<u8> = 0..=7;

/// CPU load recorded at creation, before the first cycle runs.
const CREATION_CPU_RANGE: std::ops::RangeInclusive<u8> = 10..=30;

// ── ProcessRecord ─────────────────────────────────────────────────────────────

/// Identity, static parameters, and runtime/history state of one process.
///
/// The immutable fields are `pub`; everything the engine mutates per cycle
/// is private behind read accessors.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    /// Stable identifier, doubles as the index into the store.
    pub id: ProcessId,

    /// Display-only priority class.  Does not affect the transition rules.
    pub priority: Priority,

    /// Execution time the process started with; never changes.  Together
    /// with the remaining time this drives the progress-ratio display.
    pub initial_execution_time: u32,

    /// Advisory cycle length carried for list views.  The transition rules
    /// never read it.
    pub execution_cycle_hint: u32,

    /// Memory footprint in MB, sampled once at creation.
    pub memory_usage_mb: u32,

    /// Core the process is pinned to (display only, no scheduling effect).
    pub core_affinity: u8,

    /// Thread slot within the core (display only, no scheduling effect).
    pub thread_affinity: u8,

    // ── Engine-mutated state ──────────────────────────────────────────────
    current_state:            ProcessState,
    remaining_execution_time: u32,
    state_history:            Vec<ProcessState>,
    time_in_state:            StateMap<u64>,
    cpu_usage_history:        Vec<u8>,
}

impl ProcessRecord {
    /// Create a record in the `New` state, sampling the creation-time
    /// resource figures from the process's own RNG stream.
    pub fn new(id: ProcessId, spec: &ProcessSpec, rng: &mut ProcessRng) -> Self {
        let mut time_in_state = StateMap::default();
        time_in_state[ProcessState::New] = 1; // creation counts as the first tick in New

        Self {
            id,
            priority:                 spec.priority,
            initial_execution_time:   spec.initial_execution_time,
            execution_cycle_hint:     spec.execution_cycle_hint,
            memory_usage_mb:          rng.gen_range(MEMORY_RANGE_MB),
            core_affinity:            rng.gen_range(CORE_RANGE),
            thread_affinity:          rng.gen_range(THREAD_RANGE),
            current_state:            ProcessState::New,
            remaining_execution_time: spec.initial_execution_time,
            state_history:            vec![ProcessState::New],
            time_in_state,
            cpu_usage_history:        vec![rng.gen_range(CREATION_CPU_RANGE)],
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn current_state(&self) -> ProcessState {
        self.current_state
    }

    #[inline]
    pub fn remaining_execution_time(&self) -> u32 {
        self.remaining_execution_time
    }

    /// Append-only state history; entry 0 is always `New`, entry `k` is the
    /// state after cycle `k`.
    #[inline]
    pub fn state_history(&self) -> &[ProcessState] {
        &self.state_history
    }

    /// Total cycles spent in each state, including the creation tick in `New`.
    #[inline]
    pub fn time_in_state(&self) -> &StateMap<u64> {
        &self.time_in_state
    }

    /// Append-only CPU load samples; entry 0 is the creation sample, entry
    /// `k` is the sample for cycle `k`.  Always the same length as
    /// [`state_history`](Self::state_history).
    #[inline]
    pub fn cpu_usage_history(&self) -> &[u8] {
        &self.cpu_usage_history
    }

    /// The most recent CPU sample.
    #[inline]
    pub fn last_cpu_sample(&self) -> u8 {
        *self.cpu_usage_history.last().expect("history is never empty")
    }

    /// Number of history entries recorded so far (`elapsed cycles + 1`).
    #[inline]
    pub fn cycles_recorded(&self) -> usize {
        self.state_history.len()
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.current_state.is_terminal()
    }

    /// Completed fraction of the initial execution time, in `[0.0, 1.0]`.
    /// Drives the per-process progress bar.  A zero-length process counts
    /// as already complete.
    pub fn progress_ratio(&self) -> f64 {
        if self.initial_execution_time == 0 {
            return 1.0;
        }
        let done = self.initial_execution_time - self.remaining_execution_time;
        f64::from(done) / f64::from(self.initial_execution_time)
    }

    // ── Engine-facing mutation ────────────────────────────────────────────

    /// Record the outcome of one cycle: enter `new_state` and append the
    /// cycle's bookkeeping in one step, so history length, per-state time,
    /// and CPU samples can never disagree.
    ///
    /// Called by the lifecycle engine exactly once per cycle per process.
    pub fn record_transition(&mut self, new_state: ProcessState, cpu_sample: u8) {
        self.current_state = new_state;
        self.state_history.push(new_state);
        self.time_in_state[new_state] += 1;
        self.cpu_usage_history.push(cpu_sample);
    }

    /// Consume one unit of execution time on the Waiting → Ready transition.
    ///
    /// Called by the lifecycle engine; never called once the remaining time
    /// has reached zero (the process terminates out of Running instead).
    pub fn decrement_remaining(&mut self) {
        debug_assert!(self.remaining_execution_time > 0);
        self.remaining_execution_time -= 1;
    }
}
