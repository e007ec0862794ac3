//! Client side of the authority connection.

use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, info, warn};

use crate::wire::ServerMessage;
use crate::{SyncError, SyncResult};

/// Decoded messages held for a consumer that has fallen behind.  Once
/// full, newer frames are dropped until the consumer catches up.
pub const LINK_QUEUE_CAPACITY: usize = 64;

/// An open connection to an authority.
///
/// A background task reads frames, decodes them, and queues the resulting
/// [`ServerMessage`]s in a bounded queue.  Malformed frames are logged and
/// skipped.  The task ends when the peer closes or the socket errors; there
/// is no reconnect.
pub struct MirrorLink {
    rx:     mpsc::Receiver<ServerMessage>,
    reader: JoinHandle<()>,
}

impl MirrorLink {
    /// Connect to `url`, failing with [`SyncError::Timeout`] after `timeout`.
    pub async fn connect(url: &str, timeout: Duration) -> SyncResult<Self> {
        let (stream, _) = tokio::time::timeout(timeout, connect_async(url))
            .await
            .map_err(|_| SyncError::Timeout(timeout))??;
        info!(url, "connected to authority");

        let (tx, rx) = mpsc::channel(LINK_QUEUE_CAPACITY);
        let reader = tokio::spawn(read_frames(stream, tx));
        Ok(Self { rx, reader })
    }

    /// Connect once; on failure log a single warning and return `None` so
    /// the caller can fall back to a local simulation.
    pub async fn try_connect(url: &str, timeout: Duration) -> Option<Self> {
        match Self::connect(url, timeout).await {
            Ok(link) => Some(link),
            Err(e) => {
                warn!(url, error = %e, "authority unreachable, running locally");
                None
            }
        }
    }

    /// Next message, or `None` once the connection is gone and the queue
    /// is empty.
    pub async fn recv(&mut self) -> Option<ServerMessage> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<ServerMessage> {
        self.rx.try_recv().ok()
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&mut self) -> Vec<ServerMessage> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    pub fn is_connected(&self) -> bool {
        !self.reader.is_finished()
    }
}

impl Drop for MirrorLink {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

/// Decode frames from `stream` into `tx` until the peer goes away.
///
/// Never waits on `tx`: each snapshot is a full state, so when the queue is
/// full the incoming one is dropped.
pub(crate) async fn read_frames<St>(mut stream: St, tx: mpsc::Sender<ServerMessage>)
where
    St: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    let mut dropped = 0u64;
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => match ServerMessage::decode(&text) {
                Ok(msg) => match tx.try_send(msg) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        dropped += 1;
                        debug!(dropped, "mirror queue full, frame dropped");
                    }
                    Err(TrySendError::Closed(_)) => break,
                },
                Err(e) => debug!(error = %e, "skipping malformed frame"),
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "authority connection lost");
                break;
            }
        }
    }
    info!("authority connection closed");
}
