use psim_core::ProcessId;
use thiserror::Error;

/// Invariant violations the engine refuses to run past.
///
/// The cycle loop itself is a total function — these only fire on misuse
/// (an empty engine) or on a bookkeeping bug, where failing fast beats
/// handing the presentation layer inconsistent history data.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine has no processes to advance")]
    NoProcesses,

    #[error("history for {process} has {got} entries, expected {expected} (cycle counter desync)")]
    HistoryDesync {
        process:  ProcessId,
        expected: usize,
        got:      usize,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
