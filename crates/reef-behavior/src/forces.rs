//! Individual steering forces.
//!
//! Every function is pure: it reads positions/velocities out of the store
//! and returns a force vector.  An empty neighbor slice yields
//! [`Vec2::ZERO`], and every normalization goes through
//! [`Vec2::normalize`], so degenerate inputs never produce `NaN`.

use reef_agent::AgentStore;
use reef_core::{AgentId, AgentRng, Rect, Vec2};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Idle drift applied to agents with nobody around.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wander {
    /// Angular rate applied to elapsed seconds inside `sin`/`cos`.
    pub frequency:  f64,
    /// Noise components are uniform in `[-noise, noise)`.
    pub noise:      f64,
}

impl Default for Wander {
    fn default() -> Self {
        Self { frequency: 0.001, noise: 0.005 }
    }
}

/// Soft walls around each agent's bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Containment {
    /// Distance inside the bounds at which the push starts.
    pub margin:     f64,
    /// Flat per-axis magnitude of the push.
    pub turn_force: f64,
}

impl Default for Containment {
    fn default() -> Self {
        Self { margin: 50.0, turn_force: 1.41 }
    }
}

// ── Flocking terms ────────────────────────────────────────────────────────────

fn centroid(agents: &AgentStore, neighbors: &[AgentId]) -> Option<Vec2> {
    if neighbors.is_empty() {
        return None;
    }
    let sum: Vec2 = neighbors.iter().map(|n| agents.position[n.index()]).sum();
    Some(sum.scale(1.0 / neighbors.len() as f64))
}

/// Steer toward the mean heading of `neighbors`.
pub fn alignment(agents: &AgentStore, neighbors: &[AgentId], weight: f64) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let sum: Vec2 = neighbors.iter().map(|n| agents.velocity[n.index()]).sum();
    sum.scale(1.0 / neighbors.len() as f64).normalize() * weight
}

/// Steer toward the centroid of `neighbors`.
pub fn cohesion(agents: &AgentStore, position: Vec2, neighbors: &[AgentId], weight: f64) -> Vec2 {
    match centroid(agents, neighbors) {
        Some(c) => (c - position).normalize() * weight,
        None    => Vec2::ZERO,
    }
}

/// Steer away from the centroid of `others`.
pub fn repulsion(agents: &AgentStore, position: Vec2, others: &[AgentId], weight: f64) -> Vec2 {
    -cohesion(agents, position, others, weight)
}

/// Push away from each neighbor in `touching`, closer ones harder.
///
/// Each neighbor contributes its offset divided by the squared distance
/// (unit direction over distance).  Coincident neighbors contribute nothing.
pub fn separation(agents: &AgentStore, position: Vec2, touching: &[AgentId], weight: f64) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut counted = 0usize;
    for n in touching {
        let away = position - agents.position[n.index()];
        let d_sq = away.magnitude_sq();
        if d_sq == 0.0 || !d_sq.is_finite() {
            continue;
        }
        sum += away.scale(1.0 / d_sq);
        counted += 1;
    }
    if counted == 0 {
        return Vec2::ZERO;
    }
    sum.scale(1.0 / counted as f64).normalize() * weight
}

// ── Ambient terms ─────────────────────────────────────────────────────────────

/// Smooth drift from elapsed time plus a little per-agent noise.
pub fn wander(elapsed_secs: f64, params: Wander, rng: &mut AgentRng) -> Vec2 {
    let phase = elapsed_secs * params.frequency;
    Vec2::new(phase.sin(), phase.cos()) + rng.jitter(params.noise)
}

/// Flat push back toward the interior when `position` is within the margin
/// of (or past) an edge of `bounds`.  Each axis is handled independently.
pub fn containment(position: Vec2, bounds: Rect, params: Containment) -> Vec2 {
    let axis = |p: f64, lo: f64, hi: f64| {
        if p < lo + params.margin {
            params.turn_force
        } else if p > hi - params.margin {
            -params.turn_force
        } else {
            0.0
        }
    };
    Vec2::new(
        axis(position.x, bounds.min.x, bounds.max.x),
        axis(position.y, bounds.min.y, bounds.max.y),
    )
}
