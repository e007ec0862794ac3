//! A no-op steering model: agents coast on their current velocity.

use reef_core::{AgentId, AgentRng, Vec2};

use crate::{Neighborhood, SteerContext, SteeringModel};

/// A [`SteeringModel`] that never produces a force.
///
/// Useful in tests of the integrator and sync layers, where flocking
/// forces would only add noise.
pub struct NoopSteering;

impl SteeringModel for NoopSteering {
    fn steer(
        &self,
        _agent: AgentId,
        _ctx:   &SteerContext<'_>,
        _hood:  &Neighborhood,
        _rng:   &mut AgentRng,
    ) -> Vec2 {
        Vec2::ZERO
    }
}
