//! Integration tests for psim-engine.

use std::time::Duration;

use psim_core::{Cycle, Priority, ProcessState};
use psim_process::ProcessSpec;

use crate::{CycleObserver, CycleReport, EngineBuilder, EngineError, LifecycleEngine, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn default_engine(seed: u64) -> LifecycleEngine {
    EngineBuilder::new(seed).build().unwrap()
}

fn single_process_engine(seed: u64, execution_time: u32) -> LifecycleEngine {
    EngineBuilder::new(seed)
        .specs(vec![ProcessSpec::new(Priority::High, execution_time, 1)])
        .build()
        .unwrap()
}

/// Cycle at which a process with the given execution time terminates:
/// two admission cycles, then one Running→Waiting→Ready loop per unit of
/// execution time, then the final Running→Terminated cycle.
fn termination_cycle(execution_time: u64) -> u64 {
    3 * execution_time + 3
}

/// Expected CPU sample bounds for the state a sample was drawn in.
fn cpu_bounds(state: ProcessState) -> (u8, u8) {
    match state {
        ProcessState::Running    => (70, 100),
        ProcessState::Waiting    => (20, 40),
        ProcessState::Ready      => (5, 15),
        ProcessState::Terminated => (0, 0),
        ProcessState::New        => (1, 10),
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_default_population() {
        let engine = default_engine(42);
        assert_eq!(engine.processes().len(), 3);
        assert_eq!(engine.cycle_count(), Cycle::ZERO);
        assert_eq!(engine.state_counts()[ProcessState::New], 3);
    }

    #[test]
    fn empty_spec_list_rejected() {
        let result = EngineBuilder::new(42).specs(vec![]).build();
        assert!(matches!(result, Err(EngineError::NoProcesses)));
    }

    #[test]
    fn spec_appends_to_population() {
        let engine = EngineBuilder::new(42)
            .spec(ProcessSpec::new(Priority::Low, 2, 1))
            .build()
            .unwrap();
        assert_eq!(engine.processes().len(), 4);
    }

    #[test]
    fn state_counts_consistent_before_first_advance() {
        let engine = default_engine(0);
        assert_eq!(engine.state_counts().total(), 3);
        assert_eq!(*engine.state_counts(), engine.processes().state_counts());
    }
}

// ── Transition rule table ─────────────────────────────────────────────────────

#[cfg(test)]
mod transition_rules {
    use super::*;
    use crate::transition::next_state;

    #[test]
    fn admission_path() {
        assert_eq!(next_state(ProcessState::New, 10), ProcessState::Ready);
        assert_eq!(next_state(ProcessState::Ready, 10), ProcessState::Running);
    }

    #[test]
    fn running_branches_on_remaining_time() {
        assert_eq!(next_state(ProcessState::Running, 1), ProcessState::Waiting);
        assert_eq!(next_state(ProcessState::Running, 0), ProcessState::Terminated);
    }

    #[test]
    fn waiting_returns_to_ready() {
        assert_eq!(next_state(ProcessState::Waiting, 5), ProcessState::Ready);
    }

    #[test]
    fn terminated_is_absorbing() {
        for remaining in [0, 1, 100] {
            assert_eq!(
                next_state(ProcessState::Terminated, remaining),
                ProcessState::Terminated
            );
        }
    }
}

// ── Documented scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Single process with one unit of execution time, followed cycle by
    /// cycle through its entire lifetime.
    #[test]
    fn single_short_process_trajectory() {
        let mut engine = single_process_engine(42, 1);

        let expected = [
            ProcessState::Ready,      // C1: New → Ready
            ProcessState::Running,    // C2: Ready → Running
            ProcessState::Waiting,    // C3: Running (remaining 1 > 0) → Waiting
            ProcessState::Ready,      // C4: Waiting → Ready, remaining 1 → 0
            ProcessState::Running,    // C5: Ready → Running
            ProcessState::Terminated, // C6: Running (remaining 0) → Terminated
        ];

        for (i, &want) in expected.iter().enumerate() {
            engine.advance_cycle().unwrap();
            let record = engine.processes().iter().next().unwrap();
            assert_eq!(
                record.current_state(),
                want,
                "wrong state after cycle {}",
                i + 1
            );
        }

        let record = engine.processes().iter().next().unwrap();
        assert_eq!(record.remaining_execution_time(), 0);

        // C7+: stays Terminated with quiescent samples.
        for _ in 0..4 {
            engine.advance_cycle().unwrap();
            let record = engine.processes().iter().next().unwrap();
            assert_eq!(record.current_state(), ProcessState::Terminated);
            assert_eq!(record.last_cpu_sample(), 0);
        }
    }

    #[test]
    fn remaining_time_decrements_only_on_waiting_to_ready() {
        let mut engine = single_process_engine(7, 2);
        let mut last_remaining = 2;

        for _ in 0..termination_cycle(2) {
            let before = engine.processes().iter().next().unwrap().current_state();
            engine.advance_cycle().unwrap();
            let record = engine.processes().iter().next().unwrap();

            if before == ProcessState::Waiting {
                assert_eq!(record.remaining_execution_time(), last_remaining - 1);
            } else {
                assert_eq!(record.remaining_execution_time(), last_remaining);
            }
            last_remaining = record.remaining_execution_time();
        }
        assert_eq!(last_remaining, 0);
    }

    #[test]
    fn reset_restores_initial_population() {
        let mut engine = default_engine(42);
        let initial = engine.snapshot();

        for _ in 0..17 {
            engine.advance_cycle().unwrap();
        }
        engine.reset().unwrap();

        assert_eq!(engine.cycle_count(), Cycle::ZERO);
        assert_eq!(engine.processes().len(), 3);
        for record in engine.processes().iter() {
            assert_eq!(record.state_history(), &[ProcessState::New]);
        }
        // Same seed → the rebuilt population is bit-identical, creation
        // samples included.
        assert_eq!(engine.snapshot(), initial);
    }

    #[test]
    fn batch_advance_equals_sequential_advances() {
        let mut stepped = default_engine(42);
        let mut batched = default_engine(42);

        for _ in 0..5 {
            stepped.advance_cycle().unwrap();
        }
        batched.run_cycles(5, Duration::ZERO, &mut NoopObserver).unwrap();

        assert_eq!(stepped.snapshot(), batched.snapshot());
    }

    #[test]
    fn default_population_settles_on_schedule() {
        // Longest default process has execution time 20.
        let mut engine = default_engine(42);
        let settle = termination_cycle(20);

        for _ in 0..settle - 1 {
            engine.advance_cycle().unwrap();
        }
        assert!(!engine.is_settled());

        engine.advance_cycle().unwrap();
        assert!(engine.is_settled());
        assert_eq!(engine.state_counts()[ProcessState::Terminated], 3);
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    #[test]
    fn history_lengths_track_cycle_count() {
        let mut engine = default_engine(9);
        for c in 0..80u64 {
            for record in engine.processes().iter() {
                assert_eq!(record.cycles_recorded() as u64, c + 1);
                assert_eq!(record.time_in_state().total(), c + 1);
                assert_eq!(
                    record.cpu_usage_history().len(),
                    record.state_history().len()
                );
            }
            engine.advance_cycle().unwrap();
        }
    }

    #[test]
    fn terminated_processes_never_resurrect() {
        let mut engine = default_engine(3);
        for _ in 0..90 {
            engine.advance_cycle().unwrap();
        }
        for record in engine.processes().iter() {
            let history = record.state_history();
            let first_terminated = history
                .iter()
                .position(|s| s.is_terminal())
                .expect("all default processes terminate within 90 cycles");
            assert!(
                history[first_terminated..].iter().all(|s| s.is_terminal()),
                "{} left Terminated after entering it",
                record.id
            );
        }
    }

    #[test]
    fn state_counts_match_population_each_cycle() {
        let mut engine = default_engine(11);
        for _ in 0..70 {
            let report = engine.advance_cycle().unwrap();
            assert_eq!(report.state_counts, engine.processes().state_counts());
            assert_eq!(report.state_counts.total(), 3);
            assert_eq!(*engine.state_counts(), report.state_counts);
        }
    }

    #[test]
    fn cpu_samples_fall_in_state_ranges() {
        let mut engine = default_engine(13);
        for _ in 0..70 {
            engine.advance_cycle().unwrap();
        }
        for record in engine.processes().iter() {
            // Entry 0 is the creation sample; every later entry was drawn
            // for the state entered on that cycle.
            for (k, (&state, &cpu)) in record
                .state_history()
                .iter()
                .zip(record.cpu_usage_history())
                .enumerate()
                .skip(1)
            {
                let (lo, hi) = cpu_bounds(state);
                assert!(
                    (lo..=hi).contains(&cpu),
                    "{} cycle {k}: {cpu} outside [{lo}, {hi}] for {state}",
                    record.id
                );
            }
        }
    }

    #[test]
    fn newly_terminated_counts_each_process_once() {
        let mut engine = default_engine(5);
        let mut total = 0u32;
        for _ in 0..termination_cycle(20) + 10 {
            total += engine.advance_cycle().unwrap().newly_terminated;
        }
        assert_eq!(total, 3);
    }

    #[test]
    fn read_accessors_are_idempotent() {
        let mut engine = default_engine(21);
        engine.advance_cycle().unwrap();

        let a = engine.snapshot();
        let b = engine.snapshot();
        assert_eq!(a, b);
        assert_eq!(engine.cycle_count(), engine.cycle_count());
        assert_eq!(*engine.state_counts(), *engine.state_counts());
    }

    #[test]
    fn same_seed_runs_are_identical() {
        let mut a = default_engine(1234);
        let mut b = default_engine(1234);
        for _ in 0..40 {
            a.advance_cycle().unwrap();
            b.advance_cycle().unwrap();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn different_seeds_diverge_in_samples() {
        let mut a = default_engine(1);
        let mut b = default_engine(2);
        for _ in 0..10 {
            a.advance_cycle().unwrap();
            b.advance_cycle().unwrap();
        }
        // Trajectories agree (rules are deterministic) but the sampled CPU
        // histories should not be identical across seeds.
        let cpu_a: Vec<_> = a.processes().iter().flat_map(|r| r.cpu_usage_history().to_vec()).collect();
        let cpu_b: Vec<_> = b.processes().iter().flat_map(|r| r.cpu_usage_history().to_vec()).collect();
        assert_ne!(cpu_a, cpu_b);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        started:  Vec<Cycle>,
        ended:    Vec<Cycle>,
        run_ends: usize,
    }

    impl CycleObserver for RecordingObserver {
        fn on_cycle_start(&mut self, cycle: Cycle) {
            self.started.push(cycle);
        }
        fn on_cycle_end(&mut self, cycle: Cycle, store: &psim_process::ProcessStore, report: &CycleReport) {
            assert_eq!(report.cycle, cycle);
            assert_eq!(report.state_counts.total() as usize, store.len());
            self.ended.push(cycle);
        }
        fn on_run_end(&mut self, _final_cycle: Cycle) {
            self.run_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_in_cycle_order() {
        let mut engine = default_engine(42);
        let mut obs = RecordingObserver::default();
        engine.run_cycles(4, Duration::ZERO, &mut obs).unwrap();

        let expected: Vec<_> = (1..=4).map(Cycle).collect();
        assert_eq!(obs.started, expected);
        assert_eq!(obs.ended, expected);
        // A batch is a slice of a run, not the whole run.
        assert_eq!(obs.run_ends, 0);
    }

    #[test]
    fn consecutive_batches_continue_the_count() {
        let mut engine = default_engine(42);
        let mut obs = RecordingObserver::default();
        engine.run_cycles(2, Duration::ZERO, &mut obs).unwrap();
        engine.run_cycles(2, Duration::ZERO, &mut obs).unwrap();
        assert_eq!(obs.ended, vec![Cycle(1), Cycle(2), Cycle(3), Cycle(4)]);
    }

    #[test]
    fn run_to_settlement_fires_run_end_once() {
        let mut engine = default_engine(42);
        let mut obs = RecordingObserver::default();
        let final_cycle = engine.run_to_settlement(Duration::ZERO, &mut obs).unwrap();

        assert!(engine.is_settled());
        assert_eq!(final_cycle, Cycle(termination_cycle(20)));
        assert_eq!(obs.run_ends, 1);
        assert_eq!(obs.ended.last(), Some(&final_cycle));

        // Already settled — a second call advances nothing.
        let again = engine.run_to_settlement(Duration::ZERO, &mut obs).unwrap();
        assert_eq!(again, final_cycle);
        assert_eq!(obs.ended.len() as u64, final_cycle.0);
    }

    #[test]
    fn report_display_lists_all_states() {
        let mut engine = default_engine(42);
        let report = engine.advance_cycle().unwrap();
        let line = report.to_string();
        assert!(line.starts_with("C1:"));
        for state in ProcessState::ALL {
            assert!(line.contains(state.label()), "missing {state} in {line:?}");
        }
    }
}
