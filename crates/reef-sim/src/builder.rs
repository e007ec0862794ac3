//! Fluent builder for constructing a [`Sim`].

use reef_agent::{AgentRngs, AgentStore};
use reef_behavior::SteeringModel;
use reef_core::SimConfig;
use reef_motion::Integrator;
use reef_spatial::SpatialIndex;
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick rate, seed, cell size, …
/// - [`AgentStore`] + [`AgentRngs`], from [`reef_agent::AgentStoreBuilder`]
///   (or `reef_level::populate`)
/// - `S: SteeringModel`, the force model
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                      |
/// |--------------------|----------------------------------------------|
/// | `.integrator(i)`   | `Integrator::default()` (carryover 0.5, damping 0.99) |
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = reef_level::build_population(&level, config.seed);
/// let mut sim = SimBuilder::new(config, store, rngs, FlockingModel::default())
///     .integrator(Integrator::new(AccelCarryover::Reset, 0.99))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<S: SteeringModel> {
    config:     SimConfig,
    agents:     AgentStore,
    rngs:       AgentRngs,
    steering:   S,
    integrator: Integrator,
}

impl<S: SteeringModel> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs, steering: S) -> Self {
        Self {
            config,
            agents,
            rngs,
            steering,
            integrator: Integrator::default(),
        }
    }

    /// Replace the default integrator profile.
    pub fn integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        self.integrator.validate()?;
        self.steering.validate()?;

        let agent_count = self.agents.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }
        if self.agents.position.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.agents.position.len(),
                what:     "agent positions",
            });
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        debug!(
            agents = agent_count,
            tick_hz = self.config.tick_hz,
            cell_size = self.config.cell_size,
            "simulation built"
        );

        Ok(Sim {
            clock:      self.config.make_clock(),
            index:      SpatialIndex::new(self.config.cell_size),
            config:     self.config,
            agents:     self.agents,
            rngs:       self.rngs,
            steering:   self.steering,
            integrator: self.integrator,
            forces:     Vec::with_capacity(agent_count),
            #[cfg(not(feature = "parallel"))]
            hood:       reef_behavior::Neighborhood::new(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
