//! `reef-sync` — authority/mirror snapshot sync for the reef simulation.
//!
//! The authority runs the real [`Sim`][reef_sim::Sim] and broadcasts the full
//! population every tick.  Mirrors overwrite their local copy by array
//! index.  There are no ids, deltas, acks, or retransmissions.
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | `wire`      | `FishState`, `SnapshotMessage`, `InitialState`, `ServerMessage` |
//! | `mirror`    | `Mirror`, `ApplyReport`                                       |
//! | `sink`      | `SnapshotSink` trait, `ChannelSink`                           |
//! | `observer`  | `BroadcastObserver`, the `SimObserver` → sink bridge          |
//! | `authority` | axum WebSocket server and the paced tick task                 |
//! | `link`      | `MirrorLink`, the tokio-tungstenite client                    |
//! | `session`   | `MirrorSession`: follow, then fall back to a local sim        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use reef_sync::{AuthorityHandle, Mirror, MirrorLink, ServerMessage};
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
//! let authority = AuthorityHandle::spawn(listener, sim, level, 16)?;
//!
//! let mut link = MirrorLink::connect(&authority.url(), Duration::from_secs(2)).await?;
//! let Some(ServerMessage::Initial(init)) = link.recv().await else { return Ok(()) };
//! let mut mirror = Mirror::from_initial(&init);
//! while let Some(msg) = link.recv().await {
//!     mirror.handle(&msg);
//! }
//! ```

pub mod authority;
pub mod error;
pub mod link;
pub mod mirror;
pub mod observer;
pub mod session;
pub mod sink;
pub mod wire;


pub use authority::{AuthorityHandle, AuthorityState, DEFAULT_CHANNEL_CAPACITY, router};
pub use error::{SyncError, SyncResult};
pub use link::{LINK_QUEUE_CAPACITY, MirrorLink};
pub use mirror::{ApplyReport, Mirror};
pub use observer::BroadcastObserver;
pub use session::{MirrorSession, highlight_first_question, run_paced};
pub use sink::{ChannelSink, SnapshotFeed, SnapshotSink};
pub use wire::{FishState, InitialState, SNAPSHOT_TYPE, ServerMessage, SnapshotKind, SnapshotMessage, encode_fish};
