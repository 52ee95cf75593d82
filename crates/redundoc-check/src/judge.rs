//! Decision policy: normalize, score, compare against the threshold.

use redundoc_normalization::Normalizer;
use redundoc_score::{Similarity, SimilarityThreshold, compare};
use serde::Serialize;

/// What a piece of documentation is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A declared name: the documented entity, a parameter, ...
    Name(&'a str),
    /// A type name.
    Type(&'a str),
}

impl<'a> Target<'a> {
    pub fn text(self) -> &'a str {
        match self {
            Self::Name(text) | Self::Type(text) => text,
        }
    }
}

/// Outcome of judging one piece of documentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", content = "similarity", rename_all = "kebab-case")]
pub enum Verdict {
    /// The text normalizes to the empty string.
    EmptyContent,
    TooSimilarToName(Similarity),
    TooSimilarToType(Similarity),
    Acceptable,
}

impl Verdict {
    /// Returns true for [`Verdict::Acceptable`].
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Self::Acceptable)
    }

    /// The comparison behind a too-similar verdict.
    pub fn similarity(&self) -> Option<&Similarity> {
        match self {
            Self::TooSimilarToName(similarity) | Self::TooSimilarToType(similarity) => {
                Some(similarity)
            }
            Self::EmptyContent | Self::Acceptable => None,
        }
    }
}

/// Normalizer plus threshold.
///
/// Immutable and cheap to share; every method is a pure function of its
/// arguments.
#[derive(Debug, Clone, Default)]
pub struct Judge {
    normalizer: Normalizer,
    threshold: SimilarityThreshold,
}

impl Judge {
    /// Creates a judge comparing normalized text against `threshold`.
    pub fn new(normalizer: Normalizer, threshold: SimilarityThreshold) -> Self {
        Self {
            normalizer,
            threshold,
        }
    }

    /// The normalizer applied to both sides of every comparison.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The ratio at or above which text counts as restating its target.
    pub fn threshold(&self) -> SimilarityThreshold {
        self.threshold
    }

    /// Normalizes both operands and scores them.
    pub fn similarity(&self, left: &str, right: &str) -> Similarity {
        compare(
            &self.normalizer.normalize(left),
            &self.normalizer.normalize(right),
        )
    }

    /// Returns the similarity when `text` is too similar to `target`.
    pub fn too_similar(&self, text: &str, target: Target<'_>) -> Option<Similarity> {
        let similarity = self.similarity(text, target.text());
        tracing::trace!(
            left = similarity.left(),
            right = similarity.right(),
            ratio = similarity.ratio(),
            "compared"
        );
        self.threshold
            .is_too_similar(&similarity)
            .then_some(similarity)
    }

    /// Judges `text` against `targets` in order.
    ///
    /// Empty normalized text wins over any similarity; otherwise the first
    /// target that reaches the threshold decides.
    pub fn verdict(&self, text: &str, targets: &[Target<'_>]) -> Verdict {
        if self.normalizer.is_blank(text) {
            return Verdict::EmptyContent;
        }
        for &target in targets {
            if let Some(similarity) = self.too_similar(text, target) {
                return match target {
                    Target::Name(_) => Verdict::TooSimilarToName(similarity),
                    Target::Type(_) => Verdict::TooSimilarToType(similarity),
                };
            }
        }
        Verdict::Acceptable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redundoc_normalization::NormalizationConfig;

    fn judge(threshold: SimilarityThreshold) -> Judge {
        Judge::new(
            Normalizer::new(NormalizationConfig::new(["returns", "set"])),
            threshold,
        )
    }

    #[test]
    fn test_getter_comment_is_too_similar() {
        let judge = judge(SimilarityThreshold::LENIENT);
        let similarity = judge.similarity("getName", "name");
        assert!(similarity.ratio() >= 0.5);
        assert_eq!(
            judge.verdict("Returns the name", &[Target::Name("getName")]),
            Verdict::TooSimilarToName(similarity)
        );
    }

    #[test]
    fn test_empty_content_wins_over_similarity() {
        let judge = judge(SimilarityThreshold::LENIENT);
        assert_eq!(
            judge.verdict("returns the", &[Target::Name("set")]),
            Verdict::EmptyContent
        );
    }

    #[test]
    fn test_first_matching_target_decides() {
        let judge = judge(SimilarityThreshold::LENIENT);
        let verdict = judge.verdict(
            "the customer",
            &[Target::Name("orderId"), Target::Type("Customer")],
        );
        assert!(matches!(verdict, Verdict::TooSimilarToType(_)));
        assert_eq!(verdict.similarity().map(Similarity::ratio), Some(1.0));
    }

    #[test]
    fn test_informative_text_is_acceptable() {
        let judge = judge(SimilarityThreshold::STRICT);
        let verdict = judge.verdict(
            "Postal code used for shipping estimates",
            &[Target::Name("getPostnummer"), Target::Type("String")],
        );
        assert!(verdict.is_acceptable());
        assert_eq!(verdict.similarity(), None);
    }

    #[test]
    fn test_strict_threshold_accepts_partial_overlap() {
        let text = "customer name";
        let target = Target::Name("customerId");
        assert!(judge(SimilarityThreshold::LENIENT).too_similar(text, target).is_some());
        assert!(judge(SimilarityThreshold::STRICT).too_similar(text, target).is_none());
    }
}
