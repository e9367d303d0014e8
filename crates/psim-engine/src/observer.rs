//! Cycle observer trait for progress reporting and data collection.

use psim_core::Cycle;
use psim_process::ProcessStore;

use crate::engine::CycleReport;

/// Callbacks invoked by the engine's run loops
/// ([`run_cycles`][crate::LifecycleEngine::run_cycles],
/// [`run_to_settlement`][crate::LifecycleEngine::run_to_settlement]) at each
/// cycle boundary.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Presentation layers implement this to
/// re-read engine state after every cycle instead of holding references into
/// engine-owned data.
///
/// # Example — distribution printer
///
/// ```rust,ignore
/// struct DistributionPrinter;
///
/// impl CycleObserver for DistributionPrinter {
///     fn on_cycle_end(&mut self, _cycle: Cycle, _store: &ProcessStore, report: &CycleReport) {
///         println!("{report}");
///     }
/// }
/// ```
pub trait CycleObserver {
    /// Called just before a cycle is computed.  `cycle` is the counter value
    /// the engine will reach when this cycle completes.
    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// Called after each cycle with read-only access to the full post-cycle
    /// process state and the cycle's summary report.
    fn on_cycle_end(&mut self, _cycle: Cycle, _processes: &ProcessStore, _report: &CycleReport) {}

    /// Called once when a full run completes (every process terminated).
    /// Batch advances do not fire this — only
    /// [`run_to_settlement`][crate::LifecycleEngine::run_to_settlement] does.
    fn on_run_end(&mut self, _final_cycle: Cycle) {}
}

/// A [`CycleObserver`] that does nothing.  Use when you need to call
/// `run_cycles` but don't want progress callbacks.
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}
