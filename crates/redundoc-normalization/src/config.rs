//! Normalization configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Words that carry no information in a doc comment.
///
/// Covers common verb prefixes and container words in English and Swedish.
/// Only used to build [`NormalizationConfig::default`].
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "array",
    "create",
    "fetch",
    "find",
    "init",
    "instance",
    "java",
    "list",
    "properties",
    "property",
    "read",
    "return",
    "should",
    "skall",
    "skapa",
    "spara",
    "till",
    "value",
    "värde",
];

/// Words made of at most this many letters are dropped.
pub const DEFAULT_SHORT_TOKEN_LEN: usize = 3;

/// How all-uppercase short words (initialisms such as `XML`) are treated
/// by short-token removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialismPolicy {
    /// Short initialisms are removed like any other short word.
    ///
    /// Normalized output is lower-cased, so this is the only policy under
    /// which normalizing twice gives the same result as normalizing once.
    #[default]
    Drop,
    /// Initialisms of any length survive short-token removal.
    ///
    /// Not idempotent: a kept `XML` comes out as `xml`, which a second
    /// normalization drops as a short word.
    Keep,
}

/// Replacement for runs of characters that are neither letters nor digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// Each run becomes a single space, keeping words apart.
    #[default]
    Space,
    /// Runs are removed, gluing neighbouring words together.
    Remove,
}

/// Immutable settings for a [`Normalizer`](crate::Normalizer).
///
/// Stop words are stored lower-cased, trimmed and de-duplicated in sorted
/// order; blank entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationConfig {
    stop_words: BTreeSet<String>,
    short_token_len: usize,
    initialisms: InitialismPolicy,
    inflection: bool,
    separator: SeparatorStyle,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

impl NormalizationConfig {
    /// Creates a configuration with the given stop words and default knobs.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: canonical_stop_words(stop_words),
            short_token_len: DEFAULT_SHORT_TOKEN_LEN,
            initialisms: InitialismPolicy::default(),
            inflection: true,
            separator: SeparatorStyle::default(),
        }
    }

    /// Creates a configuration without stop words.
    #[must_use]
    pub fn without_stop_words() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    /// Sets the short-token length. Zero disables short-token removal.
    #[must_use]
    pub fn with_short_token_len(mut self, len: usize) -> Self {
        self.short_token_len = len;
        self
    }

    /// Sets how short initialisms are treated.
    #[must_use]
    pub fn with_initialisms(mut self, policy: InitialismPolicy) -> Self {
        self.initialisms = policy;
        self
    }

    /// Enables or disables matching a stop word followed by one extra
    /// lower-case letter (`return` also removes `returns`).
    #[must_use]
    pub fn with_inflection(mut self, enable: bool) -> Self {
        self.inflection = enable;
        self
    }

    /// Sets the separator replacement.
    #[must_use]
    pub fn with_separator(mut self, separator: SeparatorStyle) -> Self {
        self.separator = separator;
        self
    }

    /// Adds more stop words to the set.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(canonical_stop_words(words));
        self
    }

    /// Stop words in sorted order.
    pub fn stop_words(&self) -> impl Iterator<Item = &str> {
        self.stop_words.iter().map(String::as_str)
    }

    /// Returns true when `word` is exactly one of the (lower-cased) stop words.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Maximum length of a dropped short word; zero disables the step.
    pub fn short_token_len(&self) -> usize {
        self.short_token_len
    }

    /// How short initialisms are treated.
    pub fn initialisms(&self) -> InitialismPolicy {
        self.initialisms
    }

    /// Whether a stop word followed by one lower-case letter is removed too.
    pub fn inflection(&self) -> bool {
        self.inflection
    }

    /// How separator runs are replaced.
    pub fn separator(&self) -> SeparatorStyle {
        self.separator
    }
}

fn canonical_stop_words<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_canonical() {
        let config = NormalizationConfig::new(["  Return ", "VALUE", "value", ""]);
        let words: Vec<&str> = config.stop_words().collect();
        assert_eq!(words, vec!["return", "value"]);
        assert!(config.is_stop_word("return"));
        assert!(!config.is_stop_word("Return"));
    }

    #[test]
    fn test_default_uses_builtin_stop_words() {
        let config = NormalizationConfig::default();
        assert_eq!(config.stop_words().count(), DEFAULT_STOP_WORDS.len());
        assert_eq!(config.short_token_len(), 3);
        assert_eq!(config.initialisms(), InitialismPolicy::Drop);
        assert_eq!(config.separator(), SeparatorStyle::Space);
        assert!(config.inflection());
    }

    #[test]
    fn test_extra_stop_words_extend_the_set() {
        let config = NormalizationConfig::without_stop_words().with_extra_stop_words(["Get"]);
        assert!(config.is_stop_word("get"));
        assert_eq!(config.stop_words().count(), 1);
    }
}
