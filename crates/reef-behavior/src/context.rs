//! Read-only simulation state passed to every steering callback.

use reef_agent::AgentStore;
use reef_core::Tick;

/// A read-only snapshot of the simulation state passed to every
/// [`SteeringModel`][crate::SteeringModel] call.
///
/// Built once per tick by reef-sim and shared across all agents.  `agents`
/// is frozen at the start of the tick: nobody moves until every agent has
/// been steered.
pub struct SteerContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Simulated seconds since tick 0.  Drives the wander phase.
    pub elapsed_secs: f64,

    /// Read-only view of every agent's SoA state arrays.
    pub agents: &'a AgentStore,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(tick: Tick, elapsed_secs: f64, agents: &'a AgentStore) -> Self {
        Self { tick, elapsed_secs, agents }
    }
}
