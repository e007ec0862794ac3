//! The level document: world size, population counts, flocking weights,
//! quiz questions, and explicit fish placements.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "worldWidth": 3840, "worldHeight": 1080,
//!   "numberOfFish": 130, "numberOfBgFish": 50, "numberOfPlants": 20,
//!   "cohesionFactor": 0.22, "alignmentFactor": 0.6,
//!   "separationFactor": 0.33, "escapeFromOtherFishFactor": 0.2,
//!   "questions": [{ "question": "…", "answer": "…", "fishToHighlight": "red" }],
//!   "fish": [{ "x": 100, "y": 200, "type": 72 }]
//! }
//! ```
//!
//! Every field is optional; missing ones take the values of
//! [`LevelDocument::default`].

use serde::{Deserialize, Serialize};

use reef_agent::AgentDefaults;
use reef_core::{FlockTuning, Rect, SpeciesId, Vec2};

use crate::{LevelError, LevelResult};

/// Species used by the interactive layer when the document names none.
pub const DEFAULT_SPECIES: [u32; 6] = [72, 74, 76, 78, 80, 100];

/// Interactive fish keep clear of the bottom strip of the world (the
/// seabed) by this many units.
pub const SEABED_CLEARANCE: f64 = 300.0;

/// Interactive fish may overshoot the top/left edges by this much.
pub const EDGE_OVERSHOOT: f64 = 50.0;

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelDocument {
    pub number_of_plants:              u32,
    pub world_width:                   f64,
    pub world_height:                  f64,
    /// Interactive population, including explicit placements.
    pub number_of_fish:                u32,
    pub number_of_bg_fish:             u32,
    pub questions:                     Vec<Question>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fish:                          Vec<Placement>,
    pub cohesion_factor:               f64,
    pub alignment_factor:              f64,
    pub separation_factor:             f64,
    pub escape_from_other_fish_factor: f64,
    /// Palette for randomly placed interactive fish.
    pub species:                       Vec<u32>,
    pub background_species:            u32,
}

impl Default for LevelDocument {
    fn default() -> Self {
        let tuning = FlockTuning::default();
        Self {
            number_of_plants:              20,
            world_width:                   3840.0,
            world_height:                  1080.0,
            number_of_fish:                130,
            number_of_bg_fish:             50,
            questions:                     Vec::new(),
            fish:                          Vec::new(),
            cohesion_factor:               tuning.cohesion,
            alignment_factor:              tuning.alignment,
            separation_factor:             tuning.separation,
            escape_from_other_fish_factor: tuning.repulsion,
            species:                       DEFAULT_SPECIES.to_vec(),
            background_species:            0,
        }
    }
}

/// One quiz question.  `fishToHighlight` names a colour (see
/// [`crate::quiz::species_for_color`]) or is empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub question:          String,
    pub answer:            String,
    pub fish_to_highlight: String,
}

/// An explicitly placed interactive fish.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub species: u32,
    /// Initial velocity; both components must be present to pin it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vy: Option<f64>,
}

impl Placement {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Option<Vec2> {
        Some(Vec2::new(self.vx?, self.vy?))
    }
}

// ── Derived parameters ────────────────────────────────────────────────────────

impl LevelDocument {
    /// Reject documents the simulation cannot run.
    pub fn validate(&self) -> LevelResult<()> {
        let dims_ok = |v: f64| v.is_finite() && v > 0.0;
        if !dims_ok(self.world_width) || !dims_ok(self.world_height) {
            return Err(LevelError::Invalid(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        let weights = [
            self.cohesion_factor,
            self.alignment_factor,
            self.separation_factor,
            self.escape_from_other_fish_factor,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(LevelError::Invalid("flocking factors must be finite".into()));
        }
        if self.species.is_empty() && (self.number_of_fish as usize) > self.fish.len() {
            return Err(LevelError::Invalid(
                "random interactive fish requested but the species palette is empty".into(),
            ));
        }
        if let Some(p) = self.fish.iter().find(|p| !p.position().is_finite()) {
            return Err(LevelError::Invalid(format!("non-finite placement ({}, {})", p.x, p.y)));
        }
        Ok(())
    }

    pub fn tuning(&self) -> FlockTuning {
        FlockTuning {
            cohesion:   self.cohesion_factor,
            alignment:  self.alignment_factor,
            separation: self.separation_factor,
            repulsion:  self.escape_from_other_fish_factor,
        }
    }

    /// Containment box of the interactive layer.
    pub fn interactive_bounds(&self) -> Rect {
        Rect::new(
            -EDGE_OVERSHOOT,
            -EDGE_OVERSHOOT,
            self.world_width,
            self.world_height - SEABED_CLEARANCE,
        )
    }

    /// Containment box of the background layer: the whole world.
    pub fn background_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.world_width, self.world_height)
    }

    /// Spawn parameters derived from this level.
    pub fn agent_defaults(&self) -> AgentDefaults {
        AgentDefaults {
            tuning:             self.tuning(),
            interactive_bounds: self.interactive_bounds(),
            background_bounds:  self.background_bounds(),
            ..AgentDefaults::default()
        }
    }

    pub fn palette(&self) -> Vec<SpeciesId> {
        self.species.iter().copied().map(SpeciesId).collect()
    }

    /// Total agents [`populate`](crate::populate) will create.
    pub fn population(&self) -> usize {
        (self.number_of_fish as usize).max(self.fish.len()) + self.number_of_bg_fish as usize
    }
}
