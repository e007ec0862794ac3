//! Non-authoritative copy of the population, driven by snapshots.
//!
//! Correspondence is positional: entry `i` of a snapshot overwrites local
//! agent `i`.  Surplus entries are ignored, surplus local agents keep their
//! previous state until a longer snapshot arrives.  There is no
//! reconciliation beyond that; authority and mirror must agree on count and
//! order.

use reef_agent::{AgentStore, AgentStoreBuilder, Spawn};
use reef_core::{AgentId, SpeciesId, Vec2};
use reef_level::LevelDocument;
use tracing::debug;

use crate::wire::{FishState, InitialState, ServerMessage};

/// Outcome of one [`Mirror::apply_snapshot`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Local agents overwritten.
    pub applied:  usize,
    /// Snapshot entries with no local agent.
    pub ignored:  usize,
    /// Local agents with no snapshot entry.
    pub unsynced: usize,
}

pub struct Mirror {
    pub agents: AgentStore,
    pub level:  LevelDocument,

    /// State before the most recent snapshot, for visual smoothing.
    /// Only entries that the snapshot touched are refreshed.
    pub previous_position: Vec<Vec2>,
    pub previous_velocity: Vec<Vec2>,

    snapshots: u64,
}

impl Mirror {
    /// Wrap an existing population (e.g. one built from the same level and
    /// seed as the authority).
    pub fn new(agents: AgentStore, level: LevelDocument) -> Self {
        Self {
            previous_position: agents.position.clone(),
            previous_velocity: agents.velocity.clone(),
            agents,
            level,
            snapshots: 0,
        }
    }

    /// Build the local population from the authority's initial state.
    ///
    /// The last `numberOfBgFish` entries are background fish, matching the
    /// authority's spawn order; all others are interactive.
    pub fn from_initial(initial: &InitialState) -> Self {
        let level = &initial.level;
        let bg = (level.number_of_bg_fish as usize).min(initial.fish.len());
        let first_bg = initial.fish.len() - bg;

        let spawns = initial.fish.iter().enumerate().map(|(i, f)| {
            let pos = Vec2::new(f.x, f.y);
            let spawn = if i < first_bg {
                Spawn::interactive(pos, SpeciesId(f.species))
            } else {
                Spawn::background(pos, SpeciesId(f.species))
            };
            spawn.with_velocity(Vec2::new(f.vx, f.vy))
        });

        let (agents, _) = AgentStoreBuilder::new(0)
            .defaults(level.agent_defaults())
            .spawn_all(spawns)
            .build();
        Self::new(agents, level.clone())
    }

    /// Overwrite positions and velocities from `fish` by array index.
    pub fn apply_snapshot(&mut self, fish: &[FishState]) -> ApplyReport {
        let local = self.agents.count;
        let applied = local.min(fish.len());

        for (i, f) in fish.iter().take(applied).enumerate() {
            self.previous_position[i] = self.agents.position[i];
            self.previous_velocity[i] = self.agents.velocity[i];
            self.agents.position[i] = Vec2::new(f.x, f.y);
            self.agents.velocity[i] = Vec2::new(f.vx, f.vy);
        }

        let report = ApplyReport {
            applied,
            ignored:  fish.len() - applied,
            unsynced: local - applied,
        };
        if report.ignored > 0 || report.unsynced > 0 {
            debug!(
                local,
                received = fish.len(),
                ignored = report.ignored,
                unsynced = report.unsynced,
                "snapshot length differs from local population"
            );
        }
        self.snapshots += 1;
        report
    }

    /// Apply any server message.  An initial state replaces the whole
    /// population (the authority restarted or we reconnected).
    pub fn handle(&mut self, message: &ServerMessage) -> ApplyReport {
        match message {
            ServerMessage::Snapshot(s) => self.apply_snapshot(&s.fish),
            ServerMessage::Initial(init) => {
                *self = Mirror::from_initial(init);
                ApplyReport { applied: self.agents.count, ..ApplyReport::default() }
            }
        }
    }

    /// Linear blend between the previous and current position of `agent`.
    /// `alpha` 0 is the previous position, 1 the latest snapshot.
    pub fn interpolated_position(&self, agent: AgentId, alpha: f64) -> Option<Vec2> {
        let i = agent.index();
        let (from, to) = (*self.previous_position.get(i)?, *self.agents.position.get(i)?);
        let t = alpha.clamp(0.0, 1.0);
        Some(from + (to - from) * t)
    }

    /// Snapshots applied since construction.
    pub fn snapshots_applied(&self) -> u64 {
        self.snapshots
    }
}
