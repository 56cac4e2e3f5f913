//! Error handling.

use std::path::PathBuf;

/// Errors raised by the persistence helpers (preferences, session, config).
///
/// UI-facing code never surfaces these: callers log them and fall back to
/// in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not resolve data directory: {0}")]
    DataDir(String),
    #[error("invalid file {path}: {reason}")]
    InvalidFile { path: PathBuf, reason: String },
    #[error("invalid username: {0}")]
    InvalidUsername(String),
}

pub type Result<T> = std::result::Result<T, Error>;
