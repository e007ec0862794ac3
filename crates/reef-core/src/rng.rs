//! Seedable per-agent and simulation-level RNG wrappers.
//!
//! Every random draw in the simulation (spawn limits, initial velocity,
//! wander noise, random placements) goes through one of these wrappers so a
//! run is reproducible from a single `u64` seed.
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Appending agents does not disturb the draws of existing agents.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Stored in a parallel `Vec<AgentRng>` alongside the SoA arrays so the
/// steering phase can hold `&mut` to one agent's RNG while reading the
/// whole store.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Uniform `f64` in `[lo, hi)`; returns `lo` when the span is empty.
    ///
    /// Unlike `gen_range` this never panics on `lo == hi`, so configuration
    /// may pin a parameter by giving an empty span.
    #[inline]
    pub fn span(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo).max(0.0)
    }

    /// Vector with both components uniform in `[-half, half)`.
    #[inline]
    pub fn jitter(&mut self, half: f64) -> Vec2 {
        Vec2::new(self.span(-half, half), self.span(-half, half))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (random placements, species
/// draws).
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[lo, hi)`; returns `lo` when the span is empty.
    #[inline]
    pub fn span(&mut self, lo: f64, hi: f64) -> f64 {
        let u: f64 = self.0.r#gen();
        lo + u * (hi - lo).max(0.0)
    }

    /// Uniform point inside `[min, max)` on both axes.
    #[inline]
    pub fn point_in(&mut self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(self.span(min.x, max.x), self.span(min.y, max.y))
    }

    /// Choose a random element from a slice.  Returns `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
