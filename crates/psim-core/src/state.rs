//! Process lifecycle states and the total per-state map.
//!
//! # Design
//!
//! The state set is closed: `New → Ready → Running → {Waiting | Terminated}`,
//! `Waiting → Ready`, and `Terminated` is absorbing.  The transition rules
//! themselves live in `psim-engine`; this module only defines the vocabulary
//! plus the display metadata (label, chart color) the presentation layer
//! needs, so the state machine stays decoupled from how states are drawn.
//!
//! [`StateMap`] is a total map from state to `T`, backed by a fixed array.
//! Per-state bookkeeping (time spent in each state, live state counts) always
//! has exactly one slot per state — there is no "missing key" case to handle.

use std::fmt;
use std::ops::{Index, IndexMut};

// ── ProcessState ──────────────────────────────────────────────────────────────

/// One of the five lifecycle states of a simulated process.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcessState {
    /// Just created; has not yet been admitted to the ready pool.
    #[default]
    New,
    /// Admitted and waiting to be dispatched.
    Ready,
    /// Currently executing.
    Running,
    /// Blocked; will re-enter the ready pool next cycle.
    Waiting,
    /// Finished.  Absorbing — a terminated process never changes state again.
    Terminated,
}

impl ProcessState {
    /// Number of states.  Equals `ProcessState::ALL.len()`.
    pub const COUNT: usize = 5;

    /// All states in canonical display order.
    pub const ALL: [ProcessState; Self::COUNT] = [
        ProcessState::New,
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Waiting,
        ProcessState::Terminated,
    ];

    /// Dense index in `[0, COUNT)`, used by [`StateMap`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the absorbing final state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ProcessState::Terminated)
    }

    /// Human-readable label, useful for CSV column values and list views.
    pub fn label(self) -> &'static str {
        match self {
            ProcessState::New        => "New",
            ProcessState::Ready      => "Ready",
            ProcessState::Running    => "Running",
            ProcessState::Waiting    => "Waiting",
            ProcessState::Terminated => "Terminated",
        }
    }

    /// Chart color for this state, as a `#RRGGBB` hex string.
    ///
    /// The palette is part of the simulator's canonical look: light blue for
    /// New, greens for Ready/Running, amber for Waiting, red for Terminated.
    pub fn color(self) -> &'static str {
        match self {
            ProcessState::New        => "#BBDEFB",
            ProcessState::Ready      => "#C8E6C9",
            ProcessState::Running    => "#4CAF50",
            ProcessState::Waiting    => "#FFECB3",
            ProcessState::Terminated => "#FFCDD2",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── StateMap ──────────────────────────────────────────────────────────────────

/// A total map from [`ProcessState`] to `T`, backed by a fixed array.
///
/// Indexing is infallible — every state always has a slot:
///
/// ```
/// use psim_core::{ProcessState, StateMap};
///
/// let mut counts: StateMap<u32> = StateMap::default();
/// counts[ProcessState::New] += 3;
/// assert_eq!(counts[ProcessState::New], 3);
/// assert_eq!(counts.total(), 3);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateMap<T>([T; ProcessState::COUNT]);

impl<T> StateMap<T> {
    /// Build a map by evaluating `f` once per state, in canonical order.
    pub fn from_fn(mut f: impl FnMut(ProcessState) -> T) -> Self {
        StateMap(ProcessState::ALL.map(&mut f))
    }

    /// Iterate `(state, &value)` pairs in canonical display order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessState, &T)> {
        ProcessState::ALL.iter().copied().zip(self.0.iter())
    }

    /// The raw values in canonical state order.
    #[inline]
    pub fn values(&self) -> &[T; ProcessState::COUNT] {
        &self.0
    }
}

impl<T: Copy + std::iter::Sum> StateMap<T> {
    /// Sum of all per-state values.
    ///
    /// For `time_in_state` maps this equals the number of history entries;
    /// for live state counts it equals the process count.
    #[inline]
    pub fn total(&self) -> T {
        self.0.iter().copied().sum()
    }
}

impl<T> Index<ProcessState> for StateMap<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, state: ProcessState) -> &T {
        &self.0[state.index()]
    }
}

impl<T> IndexMut<ProcessState> for StateMap<T> {
    #[inline(always)]
    fn index_mut(&mut self, state: ProcessState) -> &mut T {
        &mut self.0[state.index()]
    }
}
