//! `reef-spatial` — uniform-grid spatial index.
//!
//! # Crate layout
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`grid`] | `SpatialIndex`, `CellKey`                 |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                            |
//! |-----------|---------------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` instead of `HashMap` for cells.  |

pub mod grid;


pub use grid::{CellKey, SpatialIndex};
