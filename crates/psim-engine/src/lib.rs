//! `psim-engine` — cycle loop orchestrator for the psim simulator.
//!
//! # One cycle
//!
//! ```text
//! advance_cycle():
//!   ① Transition — for each process, in collection order:
//!        New → Ready → Running → {Waiting | Terminated}; Waiting → Ready
//!        (Terminated is absorbing), then append the cycle's bookkeeping
//!        (state history, per-state time, synthetic CPU sample).
//!   ② Count     — cycle_count += 1, then recompute state_counts over the
//!                 whole population.
//!   ③ Check     — fail fast if any history length disagrees with the
//!                 cycle counter.
//! ```
//!
//! Processes never interact, so collection order has no cross-process
//! effect; it exists only to make runs reproducible.
//!
//! # Quick-start
//!
//! ```
//! use std::time::Duration;
//! use psim_engine::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(42).build().unwrap();
//! engine.run_cycles(5, Duration::ZERO, &mut NoopObserver).unwrap();
//! assert_eq!(engine.cycle_count().0, 5);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod snapshot;

mod transition;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::EngineBuilder;
pub use engine::{CycleReport, LifecycleEngine};
pub use error::{EngineError, EngineResult};
pub use observer::{CycleObserver, NoopObserver};
pub use snapshot::{EngineSnapshot, ProcessView};
