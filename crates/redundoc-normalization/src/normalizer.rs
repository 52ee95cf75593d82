//! The normalization pipeline.

use crate::camel::un_camel_case;
use crate::config::{InitialismPolicy, NormalizationConfig, SeparatorStyle};

/// Maps raw text to a canonical form for similarity comparison.
///
/// The normalizer is immutable once built and can be shared freely between
/// threads. Normalization is total: every input, including the empty string,
/// produces a (possibly empty) output.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizationConfig,
}

impl Normalizer {
    /// Creates a normalizer from `config`.
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this normalizer was built with.
    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Normalizes `input`.
    ///
    /// Steps run in a fixed order: camel-case splitting, short-token
    /// removal, lower-casing, stop-word removal, separator collapse, trim.
    /// Short-token and stop-word removal work on whole words, which only
    /// exist once camel-case boundaries have been split.
    ///
    /// Lower-casing can create new words (`İ` becomes `i` plus a combining
    /// mark) and separator removal can glue two words into a stop word, so
    /// the pipeline is repeated until its output no longer changes. The
    /// result is a fixed point: `normalize(normalize(x)) == normalize(x)`.
    ///
    /// Under [`InitialismPolicy::Keep`] a single pass is made. A kept
    /// initialism comes out lower-cased and would be dropped as an ordinary
    /// short word by a second pass, so that policy is not idempotent.
    pub fn normalize(&self, input: &str) -> String {
        let mut current = self.normalize_once(input);
        if self.config.initialisms() == InitialismPolicy::Keep {
            return current;
        }
        // After the first pass lower-casing is a no-op, so each further pass
        // either removes a word or inserts a separator; both are bounded.
        loop {
            let next = self.normalize_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Returns true when `input` normalizes to the empty string, i.e. it
    /// consists only of stop words, short words and punctuation.
    pub fn is_blank(&self, input: &str) -> bool {
        self.normalize(input).is_empty()
    }

    fn normalize_once(&self, input: &str) -> String {
        let split = un_camel_case(input);
        let without_short = retain_words(&split, |word| !self.is_short_token(word));
        let lowered = without_short.to_lowercase();
        let without_stop = retain_words(&lowered, |word| !self.is_stop_word(word));
        collapse_separators(&without_stop, self.config.separator())
            .trim()
            .to_string()
    }

    /// A word is short when it is made of letters only, is at most
    /// `short_token_len` long, and is either lower-case after its first
    /// letter or an initialism under [`InitialismPolicy::Drop`].
    fn is_short_token(&self, word: &str) -> bool {
        let max_len = self.config.short_token_len();
        if max_len == 0 {
            return false;
        }

        let mut len = 0;
        let mut tail_lower = true;
        for (idx, ch) in word.chars().enumerate() {
            len += 1;
            if len > max_len || !ch.is_alphabetic() {
                return false;
            }
            if idx > 0 && !ch.is_lowercase() {
                tail_lower = false;
            }
        }

        len > 0
            && match self.config.initialisms() {
                InitialismPolicy::Drop => true,
                InitialismPolicy::Keep => tail_lower,
            }
    }

    /// Stop words match whole words, optionally with one trailing lower-case
    /// letter when inflection is enabled.
    fn is_stop_word(&self, word: &str) -> bool {
        if self.config.is_stop_word(word) {
            return true;
        }
        if !self.config.inflection() {
            return false;
        }
        match word.chars().next_back() {
            Some(last) if last.is_lowercase() => {
                let stem = &word[..word.len() - last.len_utf8()];
                !stem.is_empty() && self.config.is_stop_word(stem)
            }
            _ => false,
        }
    }
}

/// Rebuilds `input`, keeping separators and only the words accepted by
/// `keep`. A word is a maximal run of letters and digits.
fn retain_words<F>(input: &str, mut keep: F) -> String
where
    F: FnMut(&str) -> bool,
{
    let mut out = String::with_capacity(input.len());
    let mut word_start: Option<usize> = None;

    for (idx, ch) in input.char_indices() {
        if ch.is_alphanumeric() {
            word_start.get_or_insert(idx);
            continue;
        }
        if let Some(start) = word_start.take() {
            let word = &input[start..idx];
            if keep(word) {
                out.push_str(word);
            }
        }
        out.push(ch);
    }

    if let Some(start) = word_start {
        let word = &input[start..];
        if keep(word) {
            out.push_str(word);
        }
    }

    out
}

fn collapse_separators(input: &str, style: SeparatorStyle) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_separator = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
            in_separator = false;
        } else if !in_separator {
            in_separator = true;
            if style == SeparatorStyle::Space {
                out.push(' ');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(NormalizationConfig::new([
            "set",
            "returns",
            "property",
            "properties",
        ]))
    }

    #[test]
    fn test_retain_words_keeps_separators() {
        let out = retain_words("a-bb cc.d", |word| word.len() > 1);
        assert_eq!(out, "-bb cc.");
    }

    #[test]
    fn test_collapse_separators_by_style() {
        assert_eq!(
            collapse_separators("--foo,, bar!", SeparatorStyle::Space),
            " foo bar "
        );
        assert_eq!(
            collapse_separators("--foo,, bar!", SeparatorStyle::Remove),
            "foobar"
        );
    }

    #[test]
    fn test_short_words_are_dropped() {
        let n = normalizer();
        assert_eq!(n.normalize("a to the Name"), "name");
        assert_eq!(n.normalize("abcd"), "abcd");
        assert_eq!(n.normalize("ab1"), "ab1");
    }

    #[test]
    fn test_initialism_policy_controls_short_acronyms() {
        let drop = normalizer();
        assert_eq!(drop.normalize("XML parser"), "parser");

        let keep = Normalizer::new(
            NormalizationConfig::without_stop_words().with_initialisms(InitialismPolicy::Keep),
        );
        assert_eq!(keep.normalize("XML parser"), "xml parser");
        assert_eq!(keep.normalize("Xml parser"), "parser");
    }

    #[test]
    fn test_zero_short_token_len_keeps_everything() {
        let n = Normalizer::new(NormalizationConfig::without_stop_words().with_short_token_len(0));
        assert_eq!(n.normalize("a bc"), "a bc");
    }

    #[test]
    fn test_stop_words_match_whole_words_only() {
        let n = normalizer();
        assert_eq!(n.normalize("settings property"), "settings");
        assert_eq!(n.normalize("propertyName"), "name");
        assert_eq!(n.normalize("properties"), "");
    }

    #[test]
    fn test_inflection_strips_one_trailing_letter() {
        let n = Normalizer::new(NormalizationConfig::new(["return"]));
        assert_eq!(n.normalize("returns value"), "value");
        assert_eq!(n.normalize("returned value"), "returned value");

        let strict = Normalizer::new(NormalizationConfig::new(["return"]).with_inflection(false));
        assert_eq!(strict.normalize("returns value"), "returns value");
    }

    #[test]
    fn test_separator_style_remove_glues_words() {
        let n = Normalizer::new(
            NormalizationConfig::without_stop_words().with_separator(SeparatorStyle::Remove),
        );
        assert_eq!(n.normalize("userName, address"), "usernameaddress");
    }

    #[test]
    fn test_lower_casing_that_creates_words_is_renormalized() {
        let n = Normalizer::default();
        let once = n.normalize("İstanbul");
        assert_eq!(once, "stanbul");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn test_letters_without_lower_case_reach_a_fixed_point() {
        let n = Normalizer::default();
        let once = n.normalize("0\u{10350}\u{1D53B}A");
        assert_eq!(once, "0\u{10350}");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn test_glued_stop_word_is_removed() {
        let n = Normalizer::new(
            NormalizationConfig::new(["properties"]).with_separator(SeparatorStyle::Remove),
        );
        assert_eq!(n.normalize("prope rties"), "");
        assert_eq!(n.normalize("prope, rties!"), "");
    }

    #[test]
    fn test_kept_initialisms_make_a_single_pass() {
        let keep = Normalizer::new(
            NormalizationConfig::without_stop_words().with_initialisms(InitialismPolicy::Keep),
        );
        let once = keep.normalize("XML parser");
        assert_eq!(once, "xml parser");
        assert_eq!(keep.normalize(&once), "parser");
    }

    #[test]
    fn test_blank_inputs() {
        let n = normalizer();
        assert!(n.is_blank(""));
        assert!(n.is_blank("  ...!? "));
        assert!(n.is_blank("returns the property"));
        assert!(!n.is_blank("returns the postnummer"));
    }
}
