//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use reef_agent::{AgentStoreBuilder, Spawn};
//! use reef_core::{SpeciesId, Vec2};
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .spawn(Spawn::interactive(Vec2::new(100.0, 100.0), SpeciesId(72)))
//!     .spawn(Spawn::background(Vec2::new(400.0, 300.0), SpeciesId(0)))
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(),  2);
//! ```
//!
//! Per-agent `max_speed`, `max_accel`, and (unless the spawn pins it) the
//! initial velocity are drawn from each agent's own [`AgentRng`] in a fixed
//! order, so the same seed always yields the same population.

use reef_core::{
    AgentId, AgentRng, FlockTuning, Layer, MotionLimits, Rect, Senses, SpeciesId, Vec2,
};

use crate::{AgentRngs, AgentStore};

// ── Spawn ─────────────────────────────────────────────────────────────────────

/// Initial placement of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawn {
    pub position: Vec2,
    pub species:  SpeciesId,
    pub layer:    Layer,
    /// Pinned initial velocity.  `None` draws a random one.
    pub velocity: Option<Vec2>,
}

impl Spawn {
    pub fn interactive(position: Vec2, species: SpeciesId) -> Self {
        Self { position, species, layer: Layer::Interactive, velocity: None }
    }

    pub fn background(position: Vec2, species: SpeciesId) -> Self {
        Self { position, species, layer: Layer::Background, velocity: None }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

// ── AgentDefaults ─────────────────────────────────────────────────────────────

/// Population-wide parameters applied to every spawned agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentDefaults {
    /// `max_speed` is drawn uniformly from `[lo, hi)`.
    pub speed_range: (f64, f64),
    /// `max_accel` is drawn uniformly from `[lo, hi)`.
    pub accel_range: (f64, f64),
    /// Random initial velocity components lie in `[-v, v)`.
    pub initial_velocity_half_span: f64,
    pub senses: Senses,
    pub tuning: FlockTuning,
    pub interactive_bounds: Rect,
    pub background_bounds:  Rect,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            speed_range:                (1.0, 2.0),
            accel_range:                (0.066, 0.132),
            initial_velocity_half_span: 0.5,
            senses:                     Senses::default(),
            tuning:                     FlockTuning::default(),
            interactive_bounds:         Rect::new(-50.0, -50.0, 3840.0, 780.0),
            background_bounds:          Rect::new(0.0, 0.0, 3840.0, 1080.0),
        }
    }
}

impl AgentDefaults {
    /// Containment box for agents in `layer`.
    #[inline]
    pub fn bounds_for(&self, layer: Layer) -> Rect {
        match layer {
            Layer::Interactive => self.interactive_bounds,
            Layer::Background  => self.background_bounds,
        }
    }
}

// ── AgentStoreBuilder ─────────────────────────────────────────────────────────

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents keep the order in which they were spawned; that order is the
/// `AgentId` assignment and the wire order of every snapshot.
pub struct AgentStoreBuilder {
    seed:     u64,
    defaults: AgentDefaults,
    spawns:   Vec<Spawn>,
}

impl AgentStoreBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            defaults: AgentDefaults::default(),
            spawns:   Vec::new(),
        }
    }

    /// Replace the population-wide parameters.
    pub fn defaults(mut self, defaults: AgentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Append one agent.
    pub fn spawn(mut self, spawn: Spawn) -> Self {
        self.spawns.push(spawn);
        self
    }

    /// Append every agent yielded by `spawns`, in order.
    pub fn spawn_all<I: IntoIterator<Item = Spawn>>(mut self, spawns: I) -> Self {
        self.spawns.extend(spawns);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let count = self.spawns.len();
        let d = self.defaults;

        let mut store = AgentStore::empty();
        store.position.reserve_exact(count);
        store.velocity.reserve_exact(count);
        store.limits.reserve_exact(count);

        let mut rngs = Vec::with_capacity(count);

        for (i, spawn) in self.spawns.into_iter().enumerate() {
            let mut rng = AgentRng::new(self.seed, AgentId(i as u32));

            // Draw order is part of the seed contract: velocity, speed, accel.
            let drawn_velocity = rng.jitter(d.initial_velocity_half_span);
            let limits = MotionLimits {
                max_speed: rng.span(d.speed_range.0, d.speed_range.1),
                max_accel: rng.span(d.accel_range.0, d.accel_range.1),
            };

            store.position.push(spawn.position);
            store.velocity.push(spawn.velocity.unwrap_or(drawn_velocity));
            store.acceleration.push(Vec2::ZERO);
            store.species.push(spawn.species);
            store.layer.push(spawn.layer);
            store.limits.push(limits);
            store.senses.push(d.senses);
            store.bounds.push(d.bounds_for(spawn.layer));
            store.tuning.push(d.tuning);
            store.highlighted.push(false);

            rngs.push(rng);
        }
        store.count = count;

        (store, AgentRngs { inner: rngs })
    }
}
