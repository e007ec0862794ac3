//! `reef-agent` — Structure-of-Arrays agent arena for the `reef` simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs`, `AgentView`        |
//! | [`builder`] | `AgentStoreBuilder`, `Spawn`, `AgentDefaults`              |
//!
//! Agents are addressed by [`AgentId`](reef_core::AgentId) handles.  Nothing
//! outside this crate holds a reference into the arrays across a tick; the
//! spatial index and the wire protocol both work in handles or array order.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Spawn`/`AgentView`. |

pub mod builder;
pub mod store;


pub use builder::{AgentDefaults, AgentStoreBuilder, Spawn};
pub use store::{AgentRngs, AgentStore, AgentView};
