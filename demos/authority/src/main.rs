//! reef-authority: the authoritative copy of the flock.
//!
//! Loads a level (or the built-in defaults), seeds the population, and
//! serves WebSocket mirrors on `--bind` until Ctrl-C.  Every tick is
//! broadcast as a full `fishPosition` snapshot.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reef_behavior::FlockingModel;
use reef_core::SimConfig;
use reef_level::{build_population, load_level_or_default};
use reef_sim::SimBuilder;
use reef_sync::{AuthorityHandle, DEFAULT_CHANNEL_CAPACITY};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address mirrors connect to
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Level document (JSON); built-in defaults when absent or unreadable
    #[arg(long)]
    level: Option<PathBuf>,

    /// Seed for spawn positions and per-agent parameters
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulation and broadcast rate
    #[arg(long, default_value_t = 60)]
    tick_hz: u32,

    /// Snapshots a slow mirror may fall behind before it loses frames
    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    backlog: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = SimConfig { tick_hz: args.tick_hz, seed: args.seed, ..SimConfig::default() };
    let level = load_level_or_default(args.level.as_deref());
    let (store, rngs) = build_population(&level, config.seed);
    info!(
        fish = level.number_of_fish,
        background = level.number_of_bg_fish,
        agents = store.count,
        seed = config.seed,
        world = %format!("{}x{}", level.world_width, level.world_height),
        "population seeded"
    );

    let sim = SimBuilder::new(config, store, rngs, FlockingModel::default()).build()?;

    let listener = TcpListener::bind(args.bind).await?;
    let authority = AuthorityHandle::spawn(listener, sim, level, args.backlog)?;
    info!(url = %authority.url(), "mirrors may connect");

    tokio::signal::ctrl_c().await?;
    info!(clients = authority.state.clients(), "shutting down");
    authority.shutdown();
    Ok(())
}
