//! Error types for reef-sync.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while encoding, serving, or receiving snapshots.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("timed out after {0:?} connecting to the authority")]
    Timeout(Duration),

    #[error("unknown message type {0:?}")]
    UnknownMessage(String),

    #[error("local simulation error: {0}")]
    Sim(#[from] reef_sim::SimError),

    #[error("shared snapshot state poisoned")]
    Poisoned,
}

/// Alias for `Result<T, SyncError>`.
pub type SyncResult<T> = Result<T, SyncError>;
