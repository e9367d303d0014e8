//! Strongly typed, zero-cost identifier wrapper for processes.
//!
//! The ID is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into the process store via `id.0 as usize`, but callers
//! should prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a process in the store.  Assigned at creation, never reused
/// within a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessId(pub u32);

impl ProcessId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: ProcessId = ProcessId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ProcessId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl From<ProcessId> for usize {
    #[inline(always)]
    fn from(id: ProcessId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ProcessId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ProcessId, Self::Error> {
        u32::try_from(n).map(ProcessId)
    }
}
