//! Text normalization for doc comment comparison.
//!
//! Identifiers (`getXMLProdukt`), type names and free-form comment text are
//! mapped into one canonical, lower-cased form so that differences in case,
//! word-boundary style or filler vocabulary do not count as dissimilarity.
//!
//! # Pipeline
//!
//! 1. Word-boundary insertion ([`un_camel_case`])
//! 2. Short-token removal
//! 3. Case folding
//! 4. Stop-word removal
//! 5. Separator collapse
//! 6. Trim
//!
//! # Example
//!
//! ```
//! use redundoc_normalization::{NormalizationConfig, Normalizer};
//!
//! let normalizer = Normalizer::new(NormalizationConfig::new(["returns", "property"]));
//! assert_eq!(normalizer.normalize("returns property postnummer"), "postnummer");
//! assert_eq!(normalizer.normalize("setPostnummer"), "postnummer");
//! ```

#![deny(unsafe_code)]

mod camel;
mod config;
mod normalizer;

pub use camel::un_camel_case;
pub use config::{
    DEFAULT_SHORT_TOKEN_LEN, DEFAULT_STOP_WORDS, InitialismPolicy, NormalizationConfig,
    SeparatorStyle,
};
pub use normalizer::Normalizer;
