//! Population specs and the fluent builder for `ProcessStore` + `ProcessRngs`.
//!
//! # Usage
//!
//! ```
//! use psim_process::ProcessSetBuilder;
//!
//! let (store, rngs) = ProcessSetBuilder::new(/*seed=*/ 42).build();
//!
//! assert_eq!(store.len(), 3);   // the reference default set
//! assert_eq!(rngs.len(),  3);
//! ```

use psim_core::{Priority, ProcessId};

use crate::record::ProcessRecord;
use crate::store::{ProcessRngs, ProcessStore};

// ── ProcessSpec ───────────────────────────────────────────────────────────────

/// Static parameters one process is created with.
///
/// Specs are the only configuration surface of the simulator: an engine
/// retains the specs it was built from so reset can reproduce the identical
/// initial population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessSpec {
    pub priority:               Priority,
    pub initial_execution_time: u32,
    /// Advisory cycle length shown in list views; not consumed by the
    /// transition rules.
    pub execution_cycle_hint:   u32,
}

impl ProcessSpec {
    pub fn new(priority: Priority, initial_execution_time: u32, execution_cycle_hint: u32) -> Self {
        Self {
            priority,
            initial_execution_time,
            execution_cycle_hint,
        }
    }

    /// The reference three-process population: high/medium/low priority with
    /// execution times 10/15/20 and cycle hints 5/7/10.  This exact set must
    /// stay stable — it is the interoperable test vector for the simulator.
    pub fn default_set() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(Priority::High,   10, 5),
            ProcessSpec::new(Priority::Medium, 15, 7),
            ProcessSpec::new(Priority::Low,    20, 10),
        ]
    }
}

// ── ProcessSetBuilder ─────────────────────────────────────────────────────────

/// Fluent builder for [`ProcessStore`] + [`ProcessRngs`].
///
/// IDs are assigned in spec order starting at 0, so the `ProcessId` value is
/// always the index into the store.  Creation-time resource figures (memory,
/// affinities, the seed CPU sample) are drawn from each process's own RNG
/// stream during [`build`](Self::build), which is what makes two builds with
/// the same seed bit-identical.
pub struct ProcessSetBuilder {
    seed:  u64,
    specs: Vec<ProcessSpec>,
}

impl ProcessSetBuilder {
    /// Create a builder seeded with `seed`, preloaded with the reference
    /// default population.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            specs: ProcessSpec::default_set(),
        }
    }

    /// Replace the population with `specs`.
    pub fn specs(mut self, specs: Vec<ProcessSpec>) -> Self {
        self.specs = specs;
        self
    }

    /// Append one spec to the population.
    pub fn spec(mut self, spec: ProcessSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Construct the store and the parallel RNG vector.
    pub fn build(self) -> (ProcessStore, ProcessRngs) {
        let mut rngs = ProcessRngs::new(self.specs.len(), self.seed);

        let records = self
            .specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let id = ProcessId(i as u32);
                ProcessRecord::new(id, spec, rngs.get_mut(id))
            })
            .collect();

        (ProcessStore::new(records), rngs)
    }
}
