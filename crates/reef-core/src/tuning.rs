//! Per-agent tuning parameters.

/// Weights applied to each steering force before it is accumulated.
///
/// The reference values come from the level document defaults
/// (`cohesionFactor`, `alignmentFactor`, `separationFactor`,
/// `escapeFromOtherFishFactor`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockTuning {
    pub cohesion:   f64,
    pub alignment:  f64,
    pub separation: f64,
    /// Weight of the push away from the centroid of other species.
    pub repulsion:  f64,
}

impl Default for FlockTuning {
    fn default() -> Self {
        Self {
            cohesion:   0.22,
            alignment:  0.6,
            separation: 0.33,
            repulsion:  0.2,
        }
    }
}

/// Kinematic clamps applied by the integrator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionLimits {
    /// Upper bound on `|velocity|` after integration.
    pub max_speed: f64,
    /// Upper bound on the acceleration applied in one tick.
    pub max_accel: f64,
}

/// Neighbor-query radii.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Senses {
    /// Sight radius: alignment, cohesion, and repulsion neighbors.
    pub perception_radius:     f64,
    /// Touch radius: separation neighbors.
    pub personal_space_radius: f64,
}

impl Default for Senses {
    fn default() -> Self {
        Self {
            perception_radius:     266.0,
            personal_space_radius: 20.0,
        }
    }
}
