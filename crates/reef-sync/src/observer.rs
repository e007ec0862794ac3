//! `BroadcastObserver<S>` bridges `SimObserver` to a `SnapshotSink`.

use reef_agent::AgentStore;
use reef_core::Tick;
use reef_sim::SimObserver;

use crate::sink::SnapshotSink;
use crate::wire::SnapshotMessage;
use crate::SyncError;

/// A [`SimObserver`] that encodes every `on_snapshot` into a
/// [`SnapshotMessage`] and publishes it to a [`SnapshotSink`].
///
/// Errors from the sink are stored internally because `SimObserver` methods
/// have no return value.  Check for them with
/// [`take_error`][Self::take_error]; the tick loop is never interrupted.
pub struct BroadcastObserver<S: SnapshotSink> {
    sink:       S,
    published:  u64,
    last_error: Option<SyncError>,
}

impl<S: SnapshotSink> BroadcastObserver<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, published: 0, last_error: None }
    }

    /// Take the stored sink error (if any).
    ///
    /// Returns `None` if all publishes succeeded since the last call.
    pub fn take_error(&mut self) -> Option<SyncError> {
        self.last_error.take()
    }

    /// Snapshots handed to the sink successfully.
    pub fn published(&self) -> u64 {
        self.published
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwrap the inner sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn store_err(&mut self, result: crate::SyncResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<S: SnapshotSink> SimObserver for BroadcastObserver<S> {
    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let snapshot = SnapshotMessage::from_store(agents);
        let result = self.sink.publish(tick, &snapshot);
        if result.is_ok() {
            self.published += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.sink.finish();
        self.store_err(result);
    }
}
