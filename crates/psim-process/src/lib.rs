//! `psim-process` — process records and storage for the `psim` simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`record`]  | `ProcessRecord` (identity, parameters, history state)   |
//! | [`store`]   | `ProcessStore` (record collection), `ProcessRngs`       |
//! | [`builder`] | `ProcessSpec`, `ProcessSetBuilder`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod builder;
pub mod record;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{ProcessSetBuilder, ProcessSpec};
pub use record::ProcessRecord;
pub use store::{ProcessRngs, ProcessStore};
