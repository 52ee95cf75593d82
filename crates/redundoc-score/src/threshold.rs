//! Decision threshold for "too similar".

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::similarity::Similarity;

/// Ratio at or above which two strings count as too similar.
///
/// Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SimilarityThreshold(f64);

impl SimilarityThreshold {
    /// Flags anything at least half similar.
    pub const LENIENT: Self = Self(0.5);
    /// Flags only near-identical text.
    pub const STRICT: Self = Self(0.8);

    /// Creates a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidThreshold`] when `value` is outside
    /// `[0, 1]` or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreError::InvalidThreshold { value })
        }
    }

    /// The ratio at or above which text is flagged.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true when `similarity` reaches the threshold.
    pub fn is_too_similar(self, similarity: &Similarity) -> bool {
        similarity.ratio() >= self.0
    }
}

impl Default for SimilarityThreshold {
    fn default() -> Self {
        Self::LENIENT
    }
}

impl TryFrom<f64> for SimilarityThreshold {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SimilarityThreshold> for f64 {
    fn from(threshold: SimilarityThreshold) -> Self {
        threshold.0
    }
}
