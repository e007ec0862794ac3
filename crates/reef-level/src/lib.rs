//! `reef-level` — level documents and initial populations.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`document`] | `LevelDocument`, `Question`, `Placement`, derived bounds    |
//! | [`loader`]   | `load_level`, `load_level_reader`, `load_level_or_default`  |
//! | [`populate`] | `spawns`, `populate`, `build_population`                    |
//! | [`quiz`]     | `species_for_color`, `pick_highlight`, `highlight_for`      |
//! | [`error`]    | `LevelError`, `LevelResult<T>`                              |
//!
//! # World geometry
//!
//! ```text
//! (-50, -50) ┌──────────────────────────────┐
//!            │ interactive bounds           │
//!            │                              │
//!            └──────────────────────────────┘ (w, h - 300)
//! (0, 0)     ┌──────────────────────────────┐
//!            │ background bounds            │
//!            └──────────────────────────────┘ (w, h)
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod populate;
pub mod quiz;

#[cfg(test)]
mod tests;

pub use document::{LevelDocument, Placement, Question, DEFAULT_SPECIES};
pub use error::{LevelError, LevelResult};
pub use loader::{load_level, load_level_or_default, load_level_reader};
pub use populate::{build_population, populate, spawns};
pub use quiz::{highlight_for, pick_highlight, species_for_color};
