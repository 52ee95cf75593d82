//! Useless doc comment detection.
//!
//! Flags doc comments that only restate the documented declaration's name or
//! type, block tags without content, and offers a fix that deletes them.
//!
//! # Verdicts
//!
//! Every comparison ends in one [`Verdict`]:
//!
//! - [`Verdict::EmptyContent`]: the text normalizes to nothing
//! - [`Verdict::TooSimilarToName`] / [`Verdict::TooSimilarToType`]: the
//!   similarity ratio reaches the threshold
//! - [`Verdict::Acceptable`]: none of the above
//!
//! # Example
//!
//! ```
//! use redundoc_check::{Judge, Target, Verdict};
//!
//! let judge = Judge::default();
//! let verdict = judge.verdict("Returns the name.", &[Target::Name("getName")]);
//! assert!(matches!(verdict, Verdict::TooSimilarToName(_)));
//! ```

#![deny(unsafe_code)]

mod error;
mod fix;
mod inspector;
mod judge;
mod problem;
mod settings;
mod tree;

// === Error Types ===
pub use error::{CheckError, Result};

// === Decision Policy ===
pub use judge::{Judge, Target, Verdict};

// === Inspection ===
pub use inspector::Inspector;
pub use problem::{Problem, ProblemKind, ProblemTarget};
pub use settings::Settings;
pub use tree::{DocNode, walk};

// === Fixes ===
pub use fix::{DeleteFix, TextEdit, apply_edits};
