//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Cycle` counter — one cycle advances
//! every process by exactly one transition.  There is no wall-clock mapping:
//! the simulator is pedagogical, and the only real-time concept (the pause
//! between automatic cycles) is a presentation concern owned by the caller.
//!
//! Using an integer cycle as the canonical time unit means all history
//! arithmetic is exact and index-compatible: a process's state history has
//! exactly `cycle.0 + 1` entries after `cycle` has been reached (one entry at
//! creation plus one per elapsed cycle).

use std::fmt;

/// An absolute simulation cycle counter.
///
/// Stored as `u64` so overflow is unreachable for any interactive run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(pub u64);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    /// Return the cycle `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Cycle {
        Cycle(self.0 + n)
    }

    /// Cycles elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Cycle) -> u64 {
        self.0 - earlier.0
    }

    /// Index of this cycle's entry in a per-process history vector.
    ///
    /// Entry 0 is the creation record, so cycle `k` lands at index `k`.
    #[inline]
    pub fn history_index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u64> for Cycle {
    type Output = Cycle;
    #[inline]
    fn add(self, rhs: u64) -> Cycle {
        Cycle(self.0 + rhs)
    }
}

impl std::ops::Sub for Cycle {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Cycle) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}
