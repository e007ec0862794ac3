//! The `Sim` struct and its tick loop.

use reef_agent::{AgentRngs, AgentStore};
use reef_behavior::{Neighborhood, SteerContext, SteeringModel};
use reef_core::{AgentId, SimClock, SimConfig, Tick, Vec2};
use reef_motion::Integrator;
use reef_spatial::SpatialIndex;
use tracing::trace;

use crate::{SimObserver, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` holds all simulation state and drives the fixed-step tick:
///
/// 1. **Rebuild**: clear the spatial index and insert every agent at its
///    current position.
/// 2. **Steer**: for every agent, classify its neighbors and ask the
///    [`SteeringModel`] for a force.  All agents read the start-of-tick
///    store, so the result does not depend on agent order.
/// 3. **Integrate**: in ascending `AgentId` order, add the force to the
///    accumulator and run the [`Integrator`].
///
/// With the `parallel` feature step 2 runs on Rayon; steps 1 and 3 stay
/// sequential.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: SteeringModel> {
    /// Global configuration (tick rate, seed, cell size, …).
    pub config: SimConfig,

    /// Current tick and elapsed seconds.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  Steering models read it through
    /// `SteerContext`; only the integrator writes kinematics.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Rebuilt from scratch at the start of every tick.
    pub index: SpatialIndex,

    /// The force model.  Called once per agent per tick.
    pub steering: S,

    pub integrator: Integrator,

    /// Per-agent `(force, isolated)` computed in the steer phase.
    pub(crate) forces: Vec<(Vec2, bool)>,

    /// Scratch buffers reused across agents in the sequential steer phase.
    #[cfg(not(feature = "parallel"))]
    pub(crate) hood: Neighborhood,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<S: SteeringModel> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for servers that pace ticks on a timer.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    /// Advance one tick without observers.
    pub fn step(&mut self) -> TickSummary {
        let now = self.clock.current_tick;
        let summary = self.process_tick(now);
        self.clock.advance();
        summary
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now);
        observer.on_tick_end(now, &summary);
        if self.config.snapshot_interval_ticks > 0
            && now.0 % self.config.snapshot_interval_ticks == 0
        {
            observer.on_snapshot(now, &self.agents);
        }
        self.clock.advance();
    }

    fn process_tick(&mut self, now: Tick) -> TickSummary {
        // ── Phase 1: rebuild the grid ─────────────────────────────────────
        //
        // Every insert happens before any query, so each agent sees all of
        // its neighbors regardless of id order.
        self.index.clear();
        for (i, &pos) in self.agents.position.iter().enumerate() {
            self.index.insert(AgentId(i as u32), pos);
        }

        // ── Phases 2 + 3: steer and integrate ─────────────────────────────
        let idle = self.steer_and_integrate(now);

        let summary = TickSummary {
            agents:         self.agents.count,
            occupied_cells: self.index.occupied_cells(),
            idle,
        };
        trace!(
            tick = now.0,
            agents = summary.agents,
            cells = summary.occupied_cells,
            idle = summary.idle,
            "tick"
        );
        summary
    }

    /// Steer every agent against the start-of-tick store, then integrate
    /// in ascending id order.  Returns the number of isolated agents.
    fn steer_and_integrate(&mut self, now: Tick) -> usize {
        self.steer_all(now);

        let mut idle = 0;
        for i in 0..self.forces.len() {
            let (force, isolated) = self.forces[i];
            if isolated {
                idle += 1;
            }
            self.apply(i, force);
        }
        idle
    }

    /// Sequential steer phase.  One `Neighborhood` is reused for all agents.
    #[cfg(not(feature = "parallel"))]
    fn steer_all(&mut self, now: Tick) {
        let ctx = SteerContext::new(now, self.clock.elapsed_secs(), &self.agents);

        self.forces.clear();
        for (i, rng) in self.rngs.inner.iter_mut().enumerate() {
            let agent = AgentId(i as u32);
            self.hood.classify(agent, ctx.agents, &self.index);
            let force = self.steering.steer(agent, &ctx, &self.hood, rng);
            self.forces.push((force, self.hood.is_isolated()));
        }
    }

    /// Parallel steer phase on Rayon, one `Neighborhood` per worker split.
    #[cfg(feature = "parallel")]
    fn steer_all(&mut self, now: Tick) {
        use rayon::prelude::*;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents   = &self.agents;
        let index    = &self.index;
        let steering = &self.steering;
        let rngs     = &mut self.rngs;
        let forces   = &mut self.forces;
        let ctx      = SteerContext::new(now, self.clock.elapsed_secs(), agents);

        let mut compute = || {
            forces.clear();
            forces.par_extend(
                rngs.inner
                    .par_iter_mut()
                    .enumerate()
                    .map_init(Neighborhood::new, |hood, (i, rng)| {
                        let agent = AgentId(i as u32);
                        hood.classify(agent, agents, index);
                        (steering.steer(agent, &ctx, hood, rng), hood.is_isolated())
                    }),
            );
        };
        match &self.pool {
            Some(pool) => pool.install(compute),
            None       => compute(),
        }
    }

    #[inline]
    fn apply(&mut self, i: usize, force: Vec2) {
        let a = &mut self.agents;
        a.acceleration[i] += force;
        let limits = a.limits[i];
        self.integrator.step(
            &mut a.position[i],
            &mut a.velocity[i],
            &mut a.acceleration[i],
            limits,
        );
    }
}
