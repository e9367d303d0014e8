//! The lifecycle transition rules and state-dependent CPU sampling.
//!
//! Pure rule table plus one `apply_cycle` helper that performs a single
//! process's full per-cycle step.  The engine loops these over the
//! population; nothing here touches engine-level counters.

use psim_core::{ProcessRng, ProcessState};
use psim_process::ProcessRecord;

// ── CPU sampling ranges per state ─────────────────────────────────────────────

const CPU_RUNNING: std::ops::RangeInclusive<u8> = 70..=100;
const CPU_WAITING: std::ops::RangeInclusive<u8> = 20..=40;
const CPU_READY:   std::ops::RangeInclusive<u8> = 5..=15;
const CPU_NEW:     std::ops::RangeInclusive<u8> = 1..=10;

/// Compute the state a process enters this cycle.
///
/// `remaining` is the execution time *before* any decrement: a Running
/// process with time left goes to Waiting without consuming any, and the
/// decrement happens on the Waiting → Ready edge instead.
pub(crate) fn next_state(current: ProcessState, remaining: u32) -> ProcessState {
    match current {
        ProcessState::New => ProcessState::Ready,
        ProcessState::Ready => ProcessState::Running,
        ProcessState::Running if remaining > 0 => ProcessState::Waiting,
        ProcessState::Running => ProcessState::Terminated,
        ProcessState::Waiting => ProcessState::Ready,
        // Absorbing: no resurrection, whatever the generic rules would say.
        ProcessState::Terminated => ProcessState::Terminated,
    }
}

/// Draw the synthetic CPU load for a process that just entered `state`.
///
/// Terminated processes sample exactly 0 — their history keeps growing so
/// every process's series stays one-entry-per-cycle, but the value is
/// always quiescent.  The `New` range is defined for completeness; no
/// process re-enters `New` after creation.
pub(crate) fn cpu_sample(state: ProcessState, rng: &mut ProcessRng) -> u8 {
    match state {
        ProcessState::Running    => rng.gen_range(CPU_RUNNING),
        ProcessState::Waiting    => rng.gen_range(CPU_WAITING),
        ProcessState::Ready      => rng.gen_range(CPU_READY),
        ProcessState::Terminated => 0,
        ProcessState::New        => rng.gen_range(CPU_NEW),
    }
}

/// Advance one process by one cycle: transition, execution-time accounting,
/// and history bookkeeping.  Returns `true` if the process terminated on
/// this exact cycle.
pub(crate) fn apply_cycle(record: &mut ProcessRecord, rng: &mut ProcessRng) -> bool {
    let before = record.current_state();
    let after = next_state(before, record.remaining_execution_time());

    // Execution time is consumed only on the Waiting → Ready edge.
    if before == ProcessState::Waiting {
        record.decrement_remaining();
    }

    let cpu = cpu_sample(after, rng);
    record.record_transition(after, cpu);

    !before.is_terminal() && after.is_terminal()
}
