//! `reef-motion` — kinematic integration.
//!
//! | Module         | Contents                                      |
//! |----------------|-----------------------------------------------|
//! | [`integrator`] | `Integrator`, `AccelCarryover`                |
//! | [`error`]      | `MotionError`, `MotionResult<T>`              |
//!
//! The integrator is the only code that writes agent positions during a
//! simulated tick.  It never reads neighbors.

pub mod error;
pub mod integrator;

#[cfg(test)]
mod tests;

pub use error::{MotionError, MotionResult};
pub use integrator::{AccelCarryover, Integrator};
