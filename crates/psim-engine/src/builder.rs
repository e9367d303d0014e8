//! Fluent builder for constructing a [`LifecycleEngine`].

use psim_process::{ProcessSetBuilder, ProcessSpec};

use crate::engine::LifecycleEngine;
use crate::error::{EngineError, EngineResult};

/// Fluent builder for [`LifecycleEngine`].
///
/// The only required input is the RNG seed; the population defaults to the
/// reference three-process set
/// ([`ProcessSpec::default_set`][psim_process::ProcessSpec::default_set]).
///
/// # Example
///
/// ```
/// use psim_core::Priority;
/// use psim_engine::EngineBuilder;
/// use psim_process::ProcessSpec;
///
/// let mut engine = EngineBuilder::new(42)
///     .specs(vec![ProcessSpec::new(Priority::High, 1, 1)])
///     .build()
///     .unwrap();
/// engine.advance_cycle().unwrap();
/// ```
pub struct EngineBuilder {
    seed:  u64,
    specs: Vec<ProcessSpec>,
}

impl EngineBuilder {
    /// Create a builder seeded with `seed` and the default population.
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

    /// Validate the population and build a ready-to-advance engine.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoProcesses`] if the spec list is empty — an engine
    /// with nothing to advance is rejected at construction rather than on
    /// the first cycle.
    pub fn build(self) -> EngineResult<LifecycleEngine> {
        if self.specs.is_empty() {
            return Err(EngineError::NoProcesses);
        }

        let (store, rngs) = ProcessSetBuilder::new(self.seed)
            .specs(self.specs.clone())
            .build();

        Ok(LifecycleEngine::from_parts(self.seed, self.specs, store, rngs))
    }
}
