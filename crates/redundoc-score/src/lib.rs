//! Similarity scoring for normalized strings.
//!
//! Scores are based on Levenshtein edit distance relative to the longer of
//! the two operands, so `1.0` means identical and `0.0` means nothing in
//! common. Two empty strings are identical by convention.

#![deny(unsafe_code)]

mod error;
mod similarity;
mod threshold;

pub use error::{Result, ScoreError};
pub use similarity::{Similarity, compare};
pub use threshold::SimilarityThreshold;
