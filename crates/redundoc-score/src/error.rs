//! Error types for scoring configuration.

use thiserror::Error;

/// Errors raised while building scoring configuration.
///
/// Scoring itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Threshold outside `[0, 1]` or not a number.
    #[error("similarity threshold must be between 0 and 1, got {value}")]
    InvalidThreshold { value: f64 },
}

pub type Result<T> = std::result::Result<T, ScoreError>;
