//! Edit-distance similarity between two normalized strings.

use std::fmt;

use rapidfuzz::distance::levenshtein;
use serde::{Deserialize, Serialize};

/// Result of comparing two normalized strings.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Similarity {
    left: String,
    right: String,
    distance: usize,
}

/// Compares two already-normalized strings.
///
/// The distance is the classic Levenshtein distance with unit cost for
/// insertions, deletions and substitutions.
pub fn compare(left: &str, right: &str) -> Similarity {
    let distance = levenshtein::distance(left.chars(), right.chars());
    Similarity {
        left: left.to_string(),
        right: right.to_string(),
        distance,
    }
}

impl Similarity {
    /// The first operand, as compared.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The second operand, as compared.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Minimum number of single-character edits between the operands.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Character length of the longer operand.
    pub fn longest(&self) -> usize {
        self.left.chars().count().max(self.right.chars().count())
    }

    /// Characters of the longer operand that survive the edit script.
    pub fn shared(&self) -> usize {
        self.longest().saturating_sub(self.distance)
    }

    /// Similarity ratio in `[0, 1]`, where `1.0` means identical.
    ///
    /// Two empty strings have ratio `1.0`.
    pub fn ratio(&self) -> f64 {
        let longest = self.longest();
        if longest == 0 {
            return 1.0;
        }
        self.shared() as f64 / longest as f64
    }

    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        format!(
            "'{}' vs '{}': {} edit(s), {:.0}% similar",
            self.left,
            self.right,
            self.distance,
            self.ratio() * 100.0
        )
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\"-\"{}\": {}/{}",
            self.left,
            self.right,
            self.shared(),
            self.longest()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        let similarity = compare("name", "name");
        assert_eq!(similarity.distance(), 0);
        assert_eq!(similarity.ratio(), 1.0);
    }

    #[test]
    fn test_empty_strings_are_identical() {
        let similarity = compare("", "");
        assert_eq!(similarity.longest(), 0);
        assert_eq!(similarity.ratio(), 1.0);
    }

    #[test]
    fn test_one_empty_operand_scores_zero() {
        let similarity = compare("", "name");
        assert_eq!(similarity.distance(), 4);
        assert_eq!(similarity.ratio(), 0.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let similarity = compare("värde", "varde");
        assert_eq!(similarity.distance(), 1);
        assert_eq!(similarity.longest(), 5);
        assert!((similarity.ratio() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classic_distance() {
        assert_eq!(compare("kitten", "sitting").distance(), 3);
        assert_eq!(compare("flaw", "lawn").distance(), 2);
    }

    #[test]
    fn test_display_shows_shared_over_longest() {
        assert_eq!(compare("name", "names").to_string(), "\"name\"-\"names\": 4/5");
    }

    #[test]
    fn test_explain_mentions_percentage() {
        let explanation = compare("name", "names").explain();
        assert!(explanation.contains("80%"), "got {explanation}");
    }
}
