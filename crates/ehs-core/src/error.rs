//! Error types for `ehs-core`.

use thiserror::Error;

/// Rejection of a client-supplied value.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid timestamp: {0:?}")]
  InvalidTimestamp(String),

  #[error("score must be between 0 and 100, got {0}")]
  ScoreOutOfRange(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
