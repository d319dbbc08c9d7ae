//! Error types.
//!
//! None of these reach the visitor: each routine turns them into a display
//! state or a fallback at its own boundary.

use thiserror::Error;

/// Failure while fetching or decoding remote profile stats.
///
/// Every variant collapses to the same "unavailable" rendering; the distinction
/// only exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("API returned status {status}: {comment}")]
    Api { status: String, comment: String },
}

/// Failure while reading the embedded page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
