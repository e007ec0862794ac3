//! `reef-core` — foundational types for the `reef` flocking simulation.
//!
//! This crate is a dependency of every other `reef-*` crate.  It intentionally
//! has no `reef-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `SpeciesId`                                    |
//! | [`vec2`]    | `Vec2`, `Rect`                                            |
//! | [`layer`]   | `Layer` (interactive / background)                        |
//! | [`tuning`]  | `FlockTuning`, `MotionLimits`, `Senses`                   |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`error`]   | `ReefError`, `ReefResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod layer;
pub mod rng;
pub mod time;
pub mod tuning;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ReefError, ReefResult};
pub use ids::{AgentId, SpeciesId};
pub use layer::Layer;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
pub use tuning::{FlockTuning, MotionLimits, Senses};
pub use vec2::{Rect, Vec2};
