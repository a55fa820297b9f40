//! Boundary Errors
//!
//! None of these escape to the page: LocalCache and the startup flow
//! log them and degrade.

use thiserror::Error;

/// A stored or fetched document is not a valid item list
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid item list JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writing to the key-value store failed
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// The startup fetch did not produce a list
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
