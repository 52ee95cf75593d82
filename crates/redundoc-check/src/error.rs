//! Error types for fixes.

use redundoc_model::{ModelError, Span};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// An edit does not fit the text it is applied to.
    #[error("invalid edit: {0}")]
    Edit(#[from] ModelError),

    /// Two edits touch the same text with different replacements.
    #[error("conflicting edits at bytes {}..{} and {}..{}", first.start, first.end, second.start, second.end)]
    ConflictingEdits { first: Span, second: Span },

    /// A problem does not lie inside any comment of the source.
    #[error("no doc comment at line {}", span.line)]
    DetachedProblem { span: Span },
}

pub type Result<T> = std::result::Result<T, CheckError>;
