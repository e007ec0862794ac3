//! Destinations for encoded snapshots.

use std::sync::{Arc, Mutex};

use reef_core::Tick;
use tokio::sync::broadcast;

use crate::wire::{FishState, SnapshotMessage};
use crate::{SyncError, SyncResult};

/// Something that accepts one snapshot per published tick.
///
/// Errors are collected by [`BroadcastObserver`][crate::BroadcastObserver]
/// because `SimObserver` hooks cannot fail.
pub trait SnapshotSink {
    fn publish(&mut self, tick: Tick, snapshot: &SnapshotMessage) -> SyncResult<()>;

    /// Called once when the run ends.
    fn finish(&mut self) -> SyncResult<()> {
        Ok(())
    }
}

/// Collects snapshots in memory.
impl SnapshotSink for Vec<SnapshotMessage> {
    fn publish(&mut self, _tick: Tick, snapshot: &SnapshotMessage) -> SyncResult<()> {
        self.push(snapshot.clone());
        Ok(())
    }
}

// ── ChannelSink ───────────────────────────────────────────────────────────────

/// Fans each snapshot out to every connected client through a
/// `tokio::sync::broadcast` channel and remembers the latest population for
/// clients that connect later.
///
/// `broadcast::Sender::send` never blocks.  Clients that fall behind lose
/// the oldest messages; with no clients at all the message is dropped.
/// The sink owns the only `Sender`, so dropping it closes every
/// subscription made through the paired [`SnapshotFeed`].
pub struct ChannelSink {
    tx:     broadcast::Sender<String>,
    latest: Arc<Mutex<Vec<FishState>>>,
}

/// Read side of a [`ChannelSink`], shared by connection handlers.
pub struct SnapshotFeed {
    template: broadcast::Receiver<String>,
    latest:   Arc<Mutex<Vec<FishState>>>,
}

impl ChannelSink {
    /// `capacity` is the number of snapshots a subscriber may fall behind
    /// before it starts losing them.
    pub fn new(capacity: usize, initial: Vec<FishState>) -> (Self, SnapshotFeed) {
        let (tx, template) = broadcast::channel(capacity.max(1));
        let latest = Arc::new(Mutex::new(initial));
        let feed = SnapshotFeed { template, latest: latest.clone() };
        (Self { tx, latest }, feed)
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl SnapshotFeed {
    /// A receiver that sees every snapshot published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.template.resubscribe()
    }

    /// Population as of the last published snapshot.
    pub fn latest(&self) -> SyncResult<Vec<FishState>> {
        self.latest.lock().map(|f| f.clone()).map_err(|_| SyncError::Poisoned)
    }
}

impl SnapshotSink for ChannelSink {
    fn publish(&mut self, _tick: Tick, snapshot: &SnapshotMessage) -> SyncResult<()> {
        let text = serde_json::to_string(snapshot)?;
        {
            let mut latest = self.latest.lock().map_err(|_| SyncError::Poisoned)?;
            latest.clone_from(&snapshot.fish);
        }
        // Err only means nobody is listening right now.
        let _ = self.tx.send(text);
        Ok(())
    }
}
