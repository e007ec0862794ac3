//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The steering phase needs `&mut AgentRng` for the agent being updated
//! (wander noise) and `&AgentStore` for every neighbor's position and
//! velocity at the same time.  Keeping RNGs in a separate `AgentRngs` struct
//! lets the borrow checker see the two as disjoint:
//!
//! ```ignore
//! // reef-sim tick loop (simplified):
//! let store: &AgentStore = &sim.agents;
//! let forces: Vec<Vec2> = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| steering.steer(AgentId(i as u32), &ctx, &hood, rng))
//!     .collect();
//! ```

use reef_core::{
    AgentId, AgentRng, FlockTuning, Layer, MotionLimits, Rect, ReefError, ReefResult, Senses,
    SpeciesId, Vec2,
};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Fresh RNGs for `count` agents, seeded exactly as
    /// [`AgentStoreBuilder`][crate::AgentStoreBuilder] seeds them.  For a
    /// store that arrived without its RNGs (e.g. over the wire).
    pub fn seeded(seed: u64, count: usize) -> Self {
        Self {
            inner: (0..count).map(|i| AgentRng::new(seed, AgentId(i as u32))).collect(),
        }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Read-only snapshot of one agent, handed to rendering and audio adapters.
///
/// Adapters never receive `&mut` access to simulation state; the only
/// write-back capability they get is [`AgentStore::set_highlighted`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:          AgentId,
    pub position:    Vec2,
    pub velocity:    Vec2,
    pub species:     SpeciesId,
    pub layer:       Layer,
    pub highlighted: bool,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Array order is also the wire order of the sync protocol, so agents are
/// never reordered or removed after construction.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,

    /// Force accumulator.  Steering adds into it; the integrator clamps,
    /// applies, and then damps or resets it.
    pub acceleration: Vec<Vec2>,

    // ── Identity ──────────────────────────────────────────────────────────
    pub species: Vec<SpeciesId>,

    /// Fixed at creation.
    pub layer: Vec<Layer>,

    // ── Per-agent parameters ──────────────────────────────────────────────
    pub limits: Vec<MotionLimits>,
    pub senses: Vec<Senses>,

    /// Soft containment box of the agent's layer.
    pub bounds: Vec<Rect>,
    pub tuning: Vec<FlockTuning>,

    // ── Presentation ──────────────────────────────────────────────────────
    /// Set by collaborators (quiz highlight).  Never read by the simulation.
    pub highlighted: Vec<bool>,
}

impl AgentStore {
    /// An arena with no agents.
    pub fn empty() -> Self {
        Self {
            count:        0,
            position:     Vec::new(),
            velocity:     Vec::new(),
            acceleration: Vec::new(),
            species:      Vec::new(),
            layer:        Vec::new(),
            limits:       Vec::new(),
            senses:       Vec::new(),
            bounds:       Vec::new(),
            tuning:       Vec::new(),
            highlighted:  Vec::new(),
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` addresses a live slot.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// Snapshot of one agent.
    ///
    /// # Panics
    /// Panics if `agent` is out of range; use [`try_view`](Self::try_view)
    /// for untrusted handles.
    #[inline]
    pub fn view(&self, agent: AgentId) -> AgentView {
        let i = agent.index();
        AgentView {
            id:          agent,
            position:    self.position[i],
            velocity:    self.velocity[i],
            species:     self.species[i],
            layer:       self.layer[i],
            highlighted: self.highlighted[i],
        }
    }

    pub fn try_view(&self, agent: AgentId) -> ReefResult<AgentView> {
        if self.contains(agent) {
            Ok(self.view(agent))
        } else {
            Err(ReefError::AgentNotFound(agent))
        }
    }

    /// Views of every agent in array order.
    pub fn views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agent_ids().map(|a| self.view(a))
    }

    /// Agents of `species` whose position lies inside `area`.
    ///
    /// Used by selection collaborators (e.g. picking one on-screen fish of a
    /// given kind to highlight).
    pub fn matching(&self, species: SpeciesId, area: Rect) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids()
            .filter(move |a| self.species[a.index()] == species && area.contains(self.position[a.index()]))
    }

    // ── Presentation write-back ───────────────────────────────────────────

    /// Toggle the highlight flag.  Kinematics are not touched.
    pub fn set_highlighted(&mut self, agent: AgentId, on: bool) -> ReefResult<()> {
        if !self.contains(agent) {
            return Err(ReefError::AgentNotFound(agent));
        }
        self.highlighted[agent.index()] = on;
        Ok(())
    }
}
