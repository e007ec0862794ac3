//! Authoritative WebSocket server.
//!
//! One task paces the simulation on a `tokio::time::interval` and publishes
//! every tick through a [`ChannelSink`].  The axum server accepts mirrors on
//! `/` and `/ws`; each connection is sent the initial state and then relays
//! the broadcast channel until the peer goes away.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
    routing::get,
};
use futures::{sink::SinkExt, stream::StreamExt};
use reef_behavior::SteeringModel;
use reef_level::LevelDocument;
use reef_sim::Sim;
use tokio::net::TcpListener;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::observer::BroadcastObserver;
use crate::sink::{ChannelSink, SnapshotFeed};
use crate::wire::{InitialState, encode_fish};
use crate::SyncResult;

/// Snapshots buffered per client before a slow one starts losing frames.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Shared by every connection handler.
pub struct AuthorityState {
    pub level: LevelDocument,
    feed:      SnapshotFeed,
    clients:   AtomicUsize,
}

impl AuthorityState {
    pub fn new(level: LevelDocument, feed: SnapshotFeed) -> Self {
        Self { level, feed, clients: AtomicUsize::new(0) }
    }

    /// Currently connected mirrors.
    pub fn clients(&self) -> usize {
        self.clients.load(Ordering::Relaxed)
    }

    fn initial_frame(&self) -> SyncResult<String> {
        let initial = InitialState::new(&self.level, self.feed.latest()?);
        Ok(serde_json::to_string(&initial)?)
    }
}

/// Routes `/` and `/ws` to the mirror handler.
pub fn router(state: Arc<AuthorityState>) -> Router {
    Router::new()
        .route("/", get(websocket_handler))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AuthorityState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| websocket(socket, state))
}

async fn websocket(stream: WebSocket, state: Arc<AuthorityState>) {
    let (mut sender, mut receiver) = stream.split();
    let clients = state.clients.fetch_add(1, Ordering::Relaxed) + 1;
    info!(clients, "mirror connected");

    // Subscribe before reading `latest` so no tick falls in between.
    let mut rx = state.feed.subscribe();

    let initial_sent = match state.initial_frame() {
        Ok(text) => sender.send(Message::Text(text)).await.is_ok(),
        Err(e) => {
            warn!(error = %e, "could not encode initial state");
            false
        }
    };

    if initial_sent {
        let mut send_task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(text) => {
                        if sender.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => debug!(skipped, "mirror lagging"),
                    Err(RecvError::Closed) => break,
                }
            }
        });

        // Mirrors have nothing to say; drain until close.
        let mut recv_task = tokio::spawn(async move {
            while let Some(Ok(msg)) = receiver.next().await {
                if let Message::Close(_) = msg {
                    break;
                }
            }
        });

        // Whichever side ends first takes the other down with it.
        tokio::select! {
            _ = &mut send_task => recv_task.abort(),
            _ = &mut recv_task => send_task.abort(),
        }
    }

    let clients = state.clients.fetch_sub(1, Ordering::Relaxed).saturating_sub(1);
    info!(clients, "mirror disconnected");
}

// ── Tick task ─────────────────────────────────────────────────────────────────

async fn tick_loop<S: SteeringModel>(mut sim: Sim<S>, mut observer: BroadcastObserver<ChannelSink>) {
    let mut interval = tokio::time::interval(sim.clock.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        sim.run_ticks(1, &mut observer);
        if let Some(e) = observer.take_error() {
            warn!(tick = sim.clock.current_tick.0, error = %e, "snapshot publish failed");
        }
    }
}

// ── AuthorityHandle ───────────────────────────────────────────────────────────

/// A running authority.  Dropping the handle stops both tasks; open
/// connections end once the tick task's sink is gone.
pub struct AuthorityHandle {
    pub local_addr: SocketAddr,
    pub state:      Arc<AuthorityState>,
    server:         JoinHandle<()>,
    ticker:         JoinHandle<()>,
}

impl AuthorityHandle {
    /// Start serving on `listener` and ticking `sim` at its configured rate.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<S: SteeringModel>(
        listener: TcpListener,
        sim: Sim<S>,
        level: LevelDocument,
        capacity: usize,
    ) -> SyncResult<Self> {
        let local_addr = listener.local_addr()?;
        let (sink, feed) = ChannelSink::new(capacity, encode_fish(&sim.agents));
        let state = Arc::new(AuthorityState::new(level, feed));

        info!(
            addr = %local_addr,
            agents = sim.agents.count,
            tick_hz = sim.config.tick_hz,
            "authority listening"
        );

        let app = router(state.clone());
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!(error = %e, "authority server stopped");
            }
        });
        let ticker = tokio::spawn(tick_loop(sim, BroadcastObserver::new(sink)));

        Ok(Self { local_addr, state, server, ticker })
    }

    /// `ws://` URL mirrors can connect to.
    pub fn url(&self) -> String {
        format!("ws://{}/ws", self.local_addr)
    }

    pub fn is_running(&self) -> bool {
        !self.server.is_finished() && !self.ticker.is_finished()
    }

    /// Stop the server and the tick task.
    pub fn shutdown(&self) {
        self.server.abort();
        self.ticker.abort();
    }
}

impl Drop for AuthorityHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
