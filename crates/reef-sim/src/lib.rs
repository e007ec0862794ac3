//! `reef-sim` — fixed-step tick loop for the reef flocking simulation.
//!
//! # Tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ①  Rebuild   index.clear(); insert every agent at its position.
//!   ②  Steer     classify neighbors, SteeringModel::steer
//!                  (parallel with the `parallel` feature).
//!   ③  Integrate clamp accel, update velocity/position, damp.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the steer phase on Rayon's thread pool.              |
//! | `fx-hash`  | FxHash for the spatial grid's cell map.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use reef_behavior::FlockingModel;
//! use reef_core::SimConfig;
//! use reef_level::{build_population, LevelDocument};
//! use reef_sim::{NoopObserver, SimBuilder};
//!
//! let level = LevelDocument::default();
//! let (store, rngs) = build_population(&level, 42);
//! let mut sim = SimBuilder::new(SimConfig::default(), store, rngs, FlockingModel::default())
//!     .build()?;
//! sim.run_ticks(600, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
