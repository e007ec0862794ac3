//! The `SteeringModel` trait and the reference flocking model.

use reef_core::{AgentId, AgentRng, Vec2};

use crate::error::{BehaviorError, BehaviorResult};
use crate::forces::{self, Containment, Wander};
use crate::{Neighborhood, SteerContext};

/// Pluggable per-agent force model.
///
/// Called once per agent per tick after neighbor classification.  The
/// returned vector is added into the agent's acceleration accumulator; the
/// integrator clamps it to `max_accel`.
///
/// # Thread safety
///
/// With the `parallel` feature reef-sim calls `steer` for many agents at
/// once, so implementations must be `Send + Sync`.  Per-agent variation
/// belongs in `AgentStore` (read through `ctx.agents`) or the agent's RNG.
pub trait SteeringModel: Send + Sync + 'static {
    fn steer(
        &self,
        agent: AgentId,
        ctx:   &SteerContext<'_>,
        hood:  &Neighborhood,
        rng:   &mut AgentRng,
    ) -> Vec2;

    /// Reject parameters the model cannot run with.  Called once by
    /// `SimBuilder::build`.
    fn validate(&self) -> BehaviorResult<()> {
        Ok(())
    }
}

// ── FlockingModel ─────────────────────────────────────────────────────────────

/// Model-wide parameters.  Force weights are per agent (`AgentStore::tuning`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlockingParams {
    pub wander:      Wander,
    pub containment: Containment,
}

impl FlockingParams {
    pub fn validate(&self) -> BehaviorResult<()> {
        let c = self.containment;
        if !(c.margin.is_finite() && c.margin >= 0.0) {
            return Err(BehaviorError::Config(format!(
                "containment margin must be finite and non-negative, got {}",
                c.margin
            )));
        }
        if !c.turn_force.is_finite() {
            return Err(BehaviorError::Config("containment turn force must be finite".into()));
        }
        let w = self.wander;
        if !(w.frequency.is_finite() && w.noise.is_finite() && w.noise >= 0.0) {
            return Err(BehaviorError::Config(format!(
                "wander frequency/noise must be finite with noise >= 0, got {}/{}",
                w.frequency, w.noise
            )));
        }
        Ok(())
    }
}

/// Boids steering: alignment, cohesion, separation, repulsion from other
/// species, idle wander, and boundary containment, all stacked.
#[derive(Clone, Debug, Default)]
pub struct FlockingModel {
    pub params: FlockingParams,
}

impl FlockingModel {
    pub fn new(params: FlockingParams) -> Self {
        Self { params }
    }
}

impl SteeringModel for FlockingModel {
    fn steer(
        &self,
        agent: AgentId,
        ctx:   &SteerContext<'_>,
        hood:  &Neighborhood,
        rng:   &mut AgentRng,
    ) -> Vec2 {
        let agents = ctx.agents;
        let i = agent.index();
        let pos = agents.position[i];
        let w = agents.tuning[i];

        let mut force = forces::alignment(agents, &hood.same_kind, w.alignment)
            + forces::cohesion(agents, pos, &hood.same_kind, w.cohesion)
            + forces::separation(agents, pos, &hood.touch, w.separation)
            + forces::repulsion(agents, pos, &hood.other_kind, w.repulsion);

        if hood.is_isolated() {
            force += forces::wander(ctx.elapsed_secs, self.params.wander, rng);
        }

        force + forces::containment(pos, agents.bounds[i], self.params.containment)
    }

    fn validate(&self) -> BehaviorResult<()> {
        self.params.validate()
    }
}
