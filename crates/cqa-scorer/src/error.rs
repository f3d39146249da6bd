//! Error types for scoring operations.

use thiserror::Error;

/// Result type for scorer operations.
pub type ScorerResult<T> = Result<T, ScorerError>;

/// Errors raised while configuring the scorer.
///
/// Scoring itself never fails: malformed content is scored as opaque bytes
/// and degenerate vectors resolve to a similarity of zero.
#[derive(Debug, Error, PartialEq)]
pub enum ScorerError {
    #[error("Invalid scorer config: {0}")]
    InvalidConfig(String),
}

impl ScorerError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// A frame could not be read from its source.
///
/// Carries the 0-based position of the frame that failed; nothing is scored
/// when this is returned.
#[derive(Debug, Error)]
#[error("Failed to read frame {index}: {source}")]
pub struct FrameReadError<E> {
    pub index: usize,
    #[source]
    pub source: E,
}
