//! `psim-core` — foundational types for the `psim` process lifecycle simulator.
//!
//! This crate is a dependency of every other `psim-*` crate.  It intentionally
//! has no `psim-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `ProcessId`                                           |
//! | [`state`]    | `ProcessState`, `StateMap` (total per-state map)      |
//! | [`priority`] | `Priority` enum                                       |
//! | [`cycle`]    | `Cycle` simulation-step counter                       |
//! | [`rng`]      | `ProcessRng` (per-process deterministic RNG)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cycle;
pub mod ids;
pub mod priority;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cycle::Cycle;
pub use ids::ProcessId;
pub use priority::Priority;
pub use rng::ProcessRng;
pub use state::{ProcessState, StateMap};
