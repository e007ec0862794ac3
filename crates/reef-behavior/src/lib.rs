//! `reef-behavior` — neighbor classification and steering forces.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`neighbors`] | `Neighborhood` (touch / same-kind / other-kind sets)       |
//! | [`forces`]    | pure force functions, `Wander`, `Containment`              |
//! | [`context`]   | `SteerContext<'a>`, read-only tick snapshot                |
//! | [`model`]     | `SteeringModel` trait, `FlockingModel`, `FlockingParams`   |
//! | [`noop`]      | `NoopSteering`, never produces a force                     |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Per-agent step
//!
//! For every agent reef-sim runs:
//!
//! 1. `Neighborhood::classify` against the tick's `SpatialIndex`.
//! 2. `SteeringModel::steer`, returning the summed force.
//! 3. The integrator in reef-motion clamps and applies it.
//!
//! Steps 1 and 2 only read shared state, so they can run in parallel over a
//! frozen store.

pub mod context;
pub mod error;
pub mod forces;
pub mod model;
pub mod neighbors;
pub mod noop;


pub use context::SteerContext;
pub use error::{BehaviorError, BehaviorResult};
pub use forces::{Containment, Wander};
pub use model::{FlockingModel, FlockingParams, SteeringModel};
pub use neighbors::Neighborhood;
pub use noop::NoopSteering;
