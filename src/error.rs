//! Error types raised by the engine and its ports.

use thiserror::Error;

/// Errors surfaced by `GameEngine` commands.
///
/// Every variant is recoverable: the worst outcome of a failed command is
/// that it was rejected and the series state is unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid move: {0:?} (expected rock, paper or scissors)")]
    InvalidMove(String),

    #[error("invalid difficulty: {0:?} (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors surfaced by `KeyValueStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

/// Errors reported by an `AudioPort`. The engine logs and discards them.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound asset unavailable: {0}")]
    Unavailable(String),

    #[error("playback blocked: {0}")]
    Blocked(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
