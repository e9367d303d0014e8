//! The `LifecycleEngine` struct and its cycle loop.

use std::fmt;
use std::thread;
use std::time::Duration;

use psim_core::{Cycle, ProcessState, StateMap};
use psim_process::{ProcessRngs, ProcessSetBuilder, ProcessSpec, ProcessStore};

use crate::error::{EngineError, EngineResult};
use crate::observer::CycleObserver;
use crate::snapshot::EngineSnapshot;
use crate::transition;

// ── CycleReport ───────────────────────────────────────────────────────────────

/// Summary of one completed cycle, returned by
/// [`LifecycleEngine::advance_cycle`] and passed to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// The cycle counter after this cycle (first advance reports `C1`).
    pub cycle: Cycle,
    /// Per-state population counts after this cycle.
    pub state_counts: StateMap<u32>,
    /// How many processes entered `Terminated` on this exact cycle.
    pub newly_terminated: u32,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.cycle)?;
        for (state, count) in self.state_counts.iter() {
            write!(f, "  {} {}", state.label(), count)?;
        }
        Ok(())
    }
}

// ── LifecycleEngine ───────────────────────────────────────────────────────────

/// Owns the process population and drives it through discrete cycles.
///
/// The engine is strictly single-threaded and synchronous: one
/// [`advance_cycle`](Self::advance_cycle) call mutates every record as one
/// unit, and `&mut self` guarantees no caller can observe a half-applied
/// cycle.  Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct LifecycleEngine {
    /// Global RNG seed; retained so reset replays the identical run.
    seed:  u64,
    /// The specs the population was built from; retained for reset.
    specs: Vec<ProcessSpec>,

    store: ProcessStore,
    rngs:  ProcessRngs,

    cycle_count:  Cycle,
    state_counts: StateMap<u32>,
}

impl LifecycleEngine {
    pub(crate) fn from_parts(
        seed:  u64,
        specs: Vec<ProcessSpec>,
        store: ProcessStore,
        rngs:  ProcessRngs,
    ) -> Self {
        let state_counts = store.state_counts();
        Self {
            seed,
            specs,
            store,
            rngs,
            cycle_count: Cycle::ZERO,
            state_counts,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance every process by one cycle.
    ///
    /// Applies the transition rules in collection order, bumps the cycle
    /// counter once, recomputes the per-state counts over the whole
    /// population, and verifies the history bookkeeping before returning.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoProcesses`] if the engine is empty;
    /// [`EngineError::HistoryDesync`] if any process's history length
    /// disagrees with the cycle counter afterwards (a bug, surfaced rather
    /// than silently handed to the presentation layer).
    pub fn advance_cycle(&mut self) -> EngineResult<CycleReport> {
        if self.store.is_empty() {
            return Err(EngineError::NoProcesses);
        }

        // ── Phase 1: per-process transitions, in collection order ─────────
        let mut newly_terminated = 0u32;
        for (record, rng) in self.store.iter_mut().zip(self.rngs.iter_mut()) {
            if transition::apply_cycle(record, rng) {
                newly_terminated += 1;
            }
        }

        // ── Phase 2: whole-pass bookkeeping ───────────────────────────────
        self.cycle_count = self.cycle_count.offset(1);
        self.state_counts = self.store.state_counts();

        self.check_history_sync()?;

        Ok(CycleReport {
            cycle:        self.cycle_count,
            state_counts: self.state_counts,
            newly_terminated,
        })
    }

    /// Advance `n` cycles sequentially with a pause between cycles, so an
    /// incremental presentation layer can redraw after each one.
    ///
    /// Equivalent to `n` [`advance_cycle`](Self::advance_cycle) calls — the
    /// pause never splits a cycle, so stopping the batch early (by not
    /// requesting further cycles) always leaves the engine fully consistent.
    ///
    /// Fires the per-cycle observer hooks but not
    /// [`on_run_end`](CycleObserver::on_run_end) — a batch is a slice of a
    /// run, not the whole run.  Use
    /// [`run_to_settlement`](Self::run_to_settlement) for a complete run.
    pub fn run_cycles<O: CycleObserver>(
        &mut self,
        n:                 u64,
        inter_cycle_delay: Duration,
        observer:          &mut O,
    ) -> EngineResult<()> {
        for i in 0..n {
            observer.on_cycle_start(self.cycle_count.offset(1));
            let report = self.advance_cycle()?;
            observer.on_cycle_end(report.cycle, &self.store, &report);

            if i + 1 < n && !inter_cycle_delay.is_zero() {
                thread::sleep(inter_cycle_delay);
            }
        }
        Ok(())
    }

    /// Advance until every process has terminated, then fire
    /// [`on_run_end`](CycleObserver::on_run_end).
    ///
    /// Always terminates: each process reaches the absorbing state after a
    /// number of cycles bounded by its initial execution time.  Returns the
    /// final cycle counter.
    pub fn run_to_settlement<O: CycleObserver>(
        &mut self,
        inter_cycle_delay: Duration,
        observer:          &mut O,
    ) -> EngineResult<Cycle> {
        while !self.is_settled() {
            observer.on_cycle_start(self.cycle_count.offset(1));
            let report = self.advance_cycle()?;
            observer.on_cycle_end(report.cycle, &self.store, &report);

            if !self.is_settled() && !inter_cycle_delay.is_zero() {
                thread::sleep(inter_cycle_delay);
            }
        }
        observer.on_run_end(self.cycle_count);
        Ok(self.cycle_count)
    }

    /// Discard the current population and rebuild it from the retained specs
    /// and seed, zeroing the cycle counter.
    ///
    /// Reset is wholesale: the store and every RNG stream are replaced
    /// together, so a reset engine replays the original run exactly.
    pub fn reset(&mut self) -> EngineResult<()> {
        let (store, rngs) = ProcessSetBuilder::new(self.seed)
            .specs(self.specs.clone())
            .build();

        self.store = store;
        self.rngs = rngs;
        self.cycle_count = Cycle::ZERO;
        self.state_counts = self.store.state_counts();

        self.check_history_sync()
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// The process population.  Read-only; all mutation goes through
    /// [`advance_cycle`](Self::advance_cycle).
    #[inline]
    pub fn processes(&self) -> &ProcessStore {
        &self.store
    }

    /// Cycles advanced since construction or the last reset.
    #[inline]
    pub fn cycle_count(&self) -> Cycle {
        self.cycle_count
    }

    /// Per-state population counts as of the last completed cycle.
    #[inline]
    pub fn state_counts(&self) -> &StateMap<u32> {
        &self.state_counts
    }

    /// `true` once every process has terminated — further cycles only
    /// append quiescent samples.
    pub fn is_settled(&self) -> bool {
        self.state_counts[ProcessState::Terminated] as usize == self.store.len()
    }

    /// Capture an owned snapshot of the full engine state for the
    /// presentation layer.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(self.cycle_count, &self.state_counts, &self.store)
    }

    // ── Invariant checking ────────────────────────────────────────────────

    /// Every process must have exactly `cycle_count + 1` history entries
    /// (one at creation, one per elapsed cycle).
    fn check_history_sync(&self) -> EngineResult<()> {
        let expected = self.cycle_count.history_index() + 1;
        for record in self.store.iter() {
            let got = record.cycles_recorded();
            if got != expected {
                return Err(EngineError::HistoryDesync {
                    process: record.id,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }
}
