//! Persistence errors.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or storing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed.
    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// Snapshot decoded but violates a game invariant.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}

impl SnapshotError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::Corrupt(reason.into())
    }
}
