//! Per-agent neighbor classification.
//!
//! One grid query at the larger of the two sense radii gathers candidates;
//! each candidate is then post-filtered by true Euclidean distance into the
//! touch set and the sight set, and the sight set is split by kind.
//!
//! Layers never see each other: interactive agents ignore background agents
//! and vice versa.  Background agents flock as a single kind, so every
//! visible background neighbor is "same kind" and `other_kind` stays empty.

use reef_agent::AgentStore;
use reef_core::{AgentId, Layer};
use reef_spatial::SpatialIndex;

/// Classified neighbors of one agent for the current tick.
///
/// The buffers are reused across agents; [`classify`](Self::classify)
/// clears them before filling.
#[derive(Debug, Default, Clone)]
pub struct Neighborhood {
    /// Within personal-space radius.  Drives separation.
    pub touch:      Vec<AgentId>,
    /// Within perception radius, same species (or same background layer).
    pub same_kind:  Vec<AgentId>,
    /// Within perception radius, different species.  Drives repulsion.
    pub other_kind: Vec<AgentId>,
    candidates:     Vec<AgentId>,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.touch.clear();
        self.same_kind.clear();
        self.other_kind.clear();
        self.candidates.clear();
    }

    /// `true` when all three sets are empty; the only case in which idle
    /// wander applies.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.touch.is_empty() && self.same_kind.is_empty() && self.other_kind.is_empty()
    }

    /// Rebuild the sets for `agent` from the grid and the agents' current
    /// positions.
    pub fn classify(&mut self, agent: AgentId, agents: &AgentStore, index: &SpatialIndex) {
        self.clear();

        let i = agent.index();
        let pos = agents.position[i];
        let layer = agents.layer[i];
        let species = agents.species[i];
        let senses = agents.senses[i];

        let touch_sq = senses.personal_space_radius * senses.personal_space_radius;
        let sight_sq = senses.perception_radius * senses.perception_radius;
        let reach = senses.perception_radius.max(senses.personal_space_radius);

        index.query_into(pos.x, pos.y, reach, &mut self.candidates);

        for &other in &self.candidates {
            if other == agent {
                continue;
            }
            let j = other.index();
            if agents.layer[j] != layer {
                continue;
            }
            let d_sq = pos.distance_sq(agents.position[j]);
            if d_sq <= touch_sq {
                self.touch.push(other);
            }
            if d_sq <= sight_sq {
                let same = match layer {
                    Layer::Background  => true,
                    Layer::Interactive => agents.species[j] == species,
                };
                if same {
                    self.same_kind.push(other);
                } else {
                    self.other_kind.push(other);
                }
            }
        }
    }
}
