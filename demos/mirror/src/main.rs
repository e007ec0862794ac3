//! reef-mirror: a headless, non-authoritative copy of the flock.
//!
//! Connects once to `--url`.  While connected, every snapshot overwrites
//! the local population by array index.  If the authority cannot be
//! reached, or the connection drops, the mirror says so once and keeps
//! simulating on its own: from the last mirrored state if it has one,
//! otherwise from the level.  It never retries.
//!
//! Both modes log a short status line every `--report-secs`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use reef_agent::AgentStore;
use reef_core::{SimConfig, Tick};
use reef_level::load_level_or_default;
use reef_sim::{SimObserver, TickSummary};
use reef_sync::{Mirror, MirrorLink, MirrorSession, run_paced};
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Authority WebSocket URL
    #[arg(long, default_value = "ws://127.0.0.1:3000/ws")]
    url: String,

    /// Level document for the local fallback
    #[arg(long)]
    level: Option<PathBuf>,

    /// Seed for the local fallback population and its RNGs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tick rate of the local fallback
    #[arg(long, default_value_t = 60)]
    tick_hz: u32,

    /// Give up connecting after this many milliseconds
    #[arg(long, default_value_t = 2_000)]
    connect_timeout_ms: u64,

    /// Seconds between status lines
    #[arg(long, default_value_t = 5)]
    report_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = SimConfig { tick_hz: args.tick_hz, seed: args.seed, ..SimConfig::default() };
    let session = MirrorSession::new(config, load_level_or_default(args.level.as_deref()));

    tokio::select! {
        res = run(session, &args) => res?,
        res = tokio::signal::ctrl_c() => res?,
    }
    info!("mirror stopped");
    Ok(())
}

/// Follow the authority while it lasts, then simulate locally until
/// cancelled.
async fn run(mut session: MirrorSession, args: &Args) -> Result<()> {
    let report_every = Duration::from_secs(args.report_secs.max(1));
    let timeout = Duration::from_millis(args.connect_timeout_ms);

    if let Some(mut link) = MirrorLink::try_connect(&args.url, timeout).await {
        let mut next_report = Instant::now() + report_every;
        session
            .follow(&mut link, |mirror| {
                if Instant::now() >= next_report {
                    next_report += report_every;
                    report_mirror(mirror);
                }
            })
            .await;
    }

    let mut sim = session.into_local()?;
    let mut reporter = Reporter { every: args.report_secs * u64::from(args.tick_hz) };
    run_paced(&mut sim, &mut reporter, None).await;
    Ok(())
}

// ── Status lines ──────────────────────────────────────────────────────────────

fn report_mirror(mirror: &Mirror) {
    info!(
        snapshots = mirror.snapshots_applied(),
        agents = mirror.agents.count,
        mean_speed = mean_speed(&mirror.agents),
        "mirroring"
    );
}

/// Logs a tick summary every `every` ticks of the local simulation.
struct Reporter {
    every: u64,
}

impl SimObserver for Reporter {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        if self.every > 0 && tick.0 % self.every == 0 {
            info!(
                tick = tick.0,
                agents = summary.agents,
                idle = summary.idle,
                cells = summary.occupied_cells,
                "simulating locally"
            );
        }
    }
}

fn mean_speed(agents: &AgentStore) -> f64 {
    if agents.is_empty() {
        return 0.0;
    }
    agents.velocity.iter().map(|v| v.magnitude()).sum::<f64>() / agents.count as f64
}
