//! Mirror lifecycle.
//!
//! A mirror follows its authority for as long as the link lasts.  When the
//! link cannot be opened, or ends mid-session, that is reported once and the
//! mirror carries on with a local, unauthoritative simulation:
//!
//! ```text
//! try_connect ─ok─▶ follow ──link ends──┐
//!      │                                 ▼
//!      └────────failed──────────▶ into_local ─▶ run_paced
//! ```
//!
//! The local simulation continues from the last mirrored population when an
//! initial state was received, otherwise it is seeded from the fallback
//! level.  There is no reconnect.

use reef_agent::{AgentRngs, AgentStore};
use reef_behavior::{FlockingModel, SteeringModel};
use reef_core::{AgentId, SimConfig};
use reef_level::{LevelDocument, build_population, highlight_for};
use reef_sim::{Sim, SimBuilder, SimObserver};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::link::MirrorLink;
use crate::mirror::{ApplyReport, Mirror};
use crate::wire::ServerMessage;
use crate::SyncResult;

pub struct MirrorSession {
    /// Used for the local simulation; `seed` seeds its agent RNGs.
    config: SimConfig,
    /// Population source when no initial state ever arrived.
    level:  LevelDocument,
    mirror: Option<Mirror>,
}

impl MirrorSession {
    pub fn new(config: SimConfig, level: LevelDocument) -> Self {
        Self { config, level, mirror: None }
    }

    /// The mirrored population, once an initial state has arrived.
    pub fn mirror(&self) -> Option<&Mirror> {
        self.mirror.as_ref()
    }

    /// Apply one message.  An initial state rebuilds the population and
    /// highlights the answer to the level's first question.  Snapshots that
    /// arrive before any initial state are dropped and yield `None`.
    pub fn handle(&mut self, message: ServerMessage) -> Option<ApplyReport> {
        match message {
            ServerMessage::Initial(init) => {
                let mut mirror = Mirror::from_initial(&init);
                highlight_first_question(&mut mirror.agents, &mirror.level);
                info!(agents = mirror.agents.count, "initial state received");
                let applied = mirror.agents.count;
                self.mirror = Some(mirror);
                Some(ApplyReport { applied, ..ApplyReport::default() })
            }
            ServerMessage::Snapshot(snapshot) => match self.mirror.as_mut() {
                Some(mirror) => Some(mirror.apply_snapshot(&snapshot.fish)),
                None => {
                    warn!("snapshot before initial state, ignored");
                    None
                }
            },
        }
    }

    /// Apply messages from `link` until it ends, calling `on_update` after
    /// each one that changed the population.  The end of the link is
    /// reported here, once.
    pub async fn follow<F: FnMut(&Mirror)>(&mut self, link: &mut MirrorLink, mut on_update: F) {
        while let Some(message) = link.recv().await {
            if self.handle(message).is_some() {
                if let Some(mirror) = &self.mirror {
                    on_update(mirror);
                }
            }
        }
        match &self.mirror {
            Some(m) => warn!(
                snapshots = m.snapshots_applied(),
                "authority connection lost, continuing locally"
            ),
            None => warn!("authority connection ended before the initial state, running locally"),
        }
    }

    /// Build the local simulation that takes over from the authority.
    pub fn into_local(self) -> SyncResult<Sim<FlockingModel>> {
        let seed = self.config.seed;
        let (agents, rngs, source) = match self.mirror {
            Some(mirror) => {
                let rngs = AgentRngs::seeded(seed, mirror.agents.count);
                (mirror.agents, rngs, "mirror")
            }
            None => {
                let (mut agents, rngs) = build_population(&self.level, seed);
                highlight_first_question(&mut agents, &self.level);
                (agents, rngs, "level")
            }
        };

        let sim = SimBuilder::new(self.config, agents, rngs, FlockingModel::default()).build()?;
        info!(
            agents = sim.agents.count,
            tick_hz = sim.config.tick_hz,
            seed,
            source,
            "running unauthoritative simulation"
        );
        Ok(sim)
    }
}

/// Tick `sim` at its own rate.  With `ticks: None` this only returns when
/// the future is dropped.
pub async fn run_paced<S, O>(sim: &mut Sim<S>, observer: &mut O, ticks: Option<u64>)
where
    S: SteeringModel,
    O: SimObserver,
{
    let mut interval = tokio::time::interval(sim.clock.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut done = 0u64;
    while ticks.is_none_or(|n| done < n) {
        interval.tick().await;
        sim.run_ticks(1, observer);
        done += 1;
    }
}

/// Highlight one fish answering the level's first question, if it has one.
pub fn highlight_first_question(agents: &mut AgentStore, level: &LevelDocument) -> Option<AgentId> {
    let question = level.questions.first()?;
    let picked = highlight_for(agents, question, level.world_width);
    match picked {
        Some(AgentId(id)) => info!(agent = id, colour = %question.fish_to_highlight, "highlighted"),
        None => info!(colour = %question.fish_to_highlight, "nothing to highlight"),
    }
    picked
}
