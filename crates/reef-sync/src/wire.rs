//! JSON wire format between authority and mirrors.
//!
//! Two server → client messages exist:
//!
//! ```json
//! {"type":"fishPosition","fish":[{"x":1.0,"y":2.0,"vx":0.5,"vy":0.0,"type":72}, …]}
//! ```
//!
//! and, once per connection before any snapshot, the level document with the
//! current population in place of its placements:
//!
//! ```json
//! {"worldWidth":3840, …, "escapeFromOtherFishFactor":0.2, "fish":[…]}
//! ```
//!
//! Entries carry no id: array index is the agent correspondence key, and
//! both sides keep the order fixed for the life of the connection.

use serde::{Deserialize, Serialize};

use reef_agent::AgentStore;
use reef_level::LevelDocument;

use crate::{SyncError, SyncResult};

/// Value of the `type` field on snapshot messages.
pub const SNAPSHOT_TYPE: &str = "fishPosition";

// ── FishState ─────────────────────────────────────────────────────────────────

/// Kinematic state of one agent on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FishState {
    pub x:  f64,
    pub y:  f64,
    pub vx: f64,
    pub vy: f64,
    #[serde(rename = "type")]
    pub species: u32,
}

/// Wire entries for every agent in array order.
pub fn encode_fish(agents: &AgentStore) -> Vec<FishState> {
    agents
        .position
        .iter()
        .zip(&agents.velocity)
        .zip(&agents.species)
        .map(|((p, v), s)| FishState { x: p.x, y: p.y, vx: v.x, vy: v.y, species: s.0 })
        .collect()
}

// ── Messages ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotKind {
    #[default]
    #[serde(rename = "fishPosition")]
    FishPosition,
}

/// Full authoritative population, sent every tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMessage {
    #[serde(rename = "type")]
    pub kind: SnapshotKind,
    pub fish: Vec<FishState>,
}

impl SnapshotMessage {
    pub fn new(fish: Vec<FishState>) -> Self {
        Self { kind: SnapshotKind::FishPosition, fish }
    }

    pub fn from_store(agents: &AgentStore) -> Self {
        Self::new(encode_fish(agents))
    }
}

/// Sent once to each new connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(flatten)]
    pub level: LevelDocument,
    pub fish:  Vec<FishState>,
}

impl InitialState {
    /// The level's own placements are dropped; `fish` replaces them.
    pub fn new(level: &LevelDocument, fish: Vec<FishState>) -> Self {
        let mut level = level.clone();
        level.fish.clear();
        Self { level, fish }
    }
}

/// Anything the authority sends.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
    Snapshot(SnapshotMessage),
    Initial(InitialState),
}

impl ServerMessage {
    /// Decode one text frame.
    ///
    /// A `type` field selects the snapshot shape; its absence means the
    /// initial state.  Any other `type` is rejected.
    pub fn decode(text: &str) -> SyncResult<ServerMessage> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        match value.get("type") {
            None => Ok(ServerMessage::Initial(serde_json::from_value(value)?)),
            Some(serde_json::Value::String(t)) if t == SNAPSHOT_TYPE => {
                Ok(ServerMessage::Snapshot(serde_json::from_value(value)?))
            }
            Some(other) => Err(SyncError::UnknownMessage(other.to_string())),
        }
    }

    pub fn encode(&self) -> SyncResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
