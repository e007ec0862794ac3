//! Per-agent kinematic update.

use reef_core::{MotionLimits, Vec2};

use crate::{MotionError, MotionResult};

/// What happens to the acceleration accumulator after it has been applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AccelCarryover {
    /// Keep `factor` of the applied acceleration for the next tick, which
    /// smooths turns.  The reference factor is 0.5.
    Damped(f64),
    /// Zero the accumulator every tick.
    Reset,
}

impl Default for AccelCarryover {
    fn default() -> Self {
        AccelCarryover::Damped(0.5)
    }
}

/// Clamped semi-implicit Euler step:
///
/// ```text
/// a  = clamp(a, max_accel)
/// v += a
/// a  = carryover(a)
/// v  = clamp(v, max_speed)
/// p += v
/// v *= velocity_damping
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Integrator {
    pub carryover:        AccelCarryover,
    /// Applied after the position update.  Reference value 0.99.
    pub velocity_damping: f64,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            carryover:        AccelCarryover::default(),
            velocity_damping: 0.99,
        }
    }
}

impl Integrator {
    pub fn new(carryover: AccelCarryover, velocity_damping: f64) -> Self {
        Self { carryover, velocity_damping }
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !(0.0..=1.0).contains(&self.velocity_damping) {
            return Err(MotionError::Config(format!(
                "velocity damping must lie in [0, 1], got {}",
                self.velocity_damping
            )));
        }
        if let AccelCarryover::Damped(f) = self.carryover {
            if !(0.0..=1.0).contains(&f) {
                return Err(MotionError::Config(format!(
                    "acceleration carryover must lie in [0, 1], got {f}"
                )));
            }
        }
        Ok(())
    }

    /// Advance one body by one tick.  Returns the acceleration actually
    /// applied to the velocity.
    #[inline]
    pub fn step(
        &self,
        position:     &mut Vec2,
        velocity:     &mut Vec2,
        acceleration: &mut Vec2,
        limits:       MotionLimits,
    ) -> Vec2 {
        let applied = acceleration.limit(limits.max_accel);
        *velocity += applied;
        *acceleration = match self.carryover {
            AccelCarryover::Damped(f) => applied * f,
            AccelCarryover::Reset     => Vec2::ZERO,
        };
        *velocity = velocity.limit(limits.max_speed);
        *position += *velocity;
        *velocity *= self.velocity_damping;
        applied
    }
}
