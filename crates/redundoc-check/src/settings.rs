//! Inspection settings.

use redundoc_normalization::{
    DEFAULT_SHORT_TOKEN_LEN, DEFAULT_STOP_WORDS, InitialismPolicy, NormalizationConfig,
    Normalizer, SeparatorStyle,
};
use redundoc_score::SimilarityThreshold;
use serde::{Deserialize, Serialize};

use crate::judge::Judge;

/// User-facing settings, as read from `redundoc.toml`.
///
/// Every field is optional in the file; missing fields take the lenient
/// defaults with the built-in stop word list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Similarity ratio at or above which text counts as restating.
    pub threshold: SimilarityThreshold,
    /// Words removed before comparing; replaces the built-in list.
    pub stop_words: Vec<String>,
    /// Words of up to this many letters are dropped. Zero keeps them.
    pub short_token_len: usize,
    pub initialisms: InitialismPolicy,
    /// Also drop a stop word followed by one more lower-case letter.
    pub inflection: bool,
    pub separator: SeparatorStyle,
    /// Compare the whole comment text including block tags with the owner.
    pub compare_with_tags: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: SimilarityThreshold::default(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            short_token_len: DEFAULT_SHORT_TOKEN_LEN,
            initialisms: InitialismPolicy::default(),
            inflection: true,
            separator: SeparatorStyle::default(),
            compare_with_tags: true,
        }
    }
}

impl Settings {
    /// Settings that only flag near-identical text.
    pub fn strict() -> Self {
        Self {
            threshold: SimilarityThreshold::STRICT,
            ..Self::default()
        }
    }

    /// Normalization knobs described by these settings.
    pub fn normalization_config(&self) -> NormalizationConfig {
        NormalizationConfig::new(&self.stop_words)
            .with_short_token_len(self.short_token_len)
            .with_initialisms(self.initialisms)
            .with_inflection(self.inflection)
            .with_separator(self.separator)
    }

    /// A judge with these settings' normalizer and threshold.
    pub fn judge(&self) -> Judge {
        Judge::new(
            Normalizer::new(self.normalization_config()),
            self.threshold,
        )
    }
}
