//! Problems reported by the inspector.

use std::fmt;

use redundoc_model::Span;
use redundoc_score::Similarity;
use serde::Serialize;

/// Kind of problem found in a doc comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    EmptyComment,
    UninformativeComment,
    CommentMatchesName,
    CommentMatchesType,
    MissingParamName,
    MissingParamDescription,
    ParamMatchesParamName,
    ParamMatchesOwnerName,
    MissingReturnDescription,
    ReturnMatchesType,
    ReturnMatchesOwnerName,
}

impl ProblemKind {
    /// Stable kebab-case identifier, as used in JSON output.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyComment => "empty-comment",
            Self::UninformativeComment => "uninformative-comment",
            Self::CommentMatchesName => "comment-matches-name",
            Self::CommentMatchesType => "comment-matches-type",
            Self::MissingParamName => "missing-param-name",
            Self::MissingParamDescription => "missing-param-description",
            Self::ParamMatchesParamName => "param-matches-param-name",
            Self::ParamMatchesOwnerName => "param-matches-owner-name",
            Self::MissingReturnDescription => "missing-return-description",
            Self::ReturnMatchesType => "return-matches-type",
            Self::ReturnMatchesOwnerName => "return-matches-owner-name",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyComment => "Empty doc comment.",
            Self::UninformativeComment => "Comment has no content beyond stop words.",
            Self::CommentMatchesName => "Comment matches name.",
            Self::CommentMatchesType => "Comment matches type.",
            Self::MissingParamName => "Missing @param name.",
            Self::MissingParamDescription => "Missing @param description.",
            Self::ParamMatchesParamName => "@param description matches @param name.",
            Self::ParamMatchesOwnerName => "@param description matches method name.",
            Self::MissingReturnDescription => "Missing @return description.",
            Self::ReturnMatchesType => "@return description matches return type.",
            Self::ReturnMatchesOwnerName => "@return description matches method name.",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The part of a comment a problem is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum ProblemTarget {
    /// The comment as a whole.
    Comment,
    /// The block tag at this position in [`DocComment::tags`].
    ///
    /// [`DocComment::tags`]: redundoc_model::DocComment::tags
    Tag(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    pub kind: ProblemKind,
    pub target: ProblemTarget,
    /// Extent to highlight: the comment or the tag.
    pub span: Span,
    /// Human-readable description, with the comparison appended when there is one.
    pub message: String,
    /// The comparison that triggered the problem, for similarity problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<Similarity>,
}

impl Problem {
    pub(crate) fn new(kind: ProblemKind, target: ProblemTarget, span: Span) -> Self {
        Self {
            kind,
            target,
            span,
            message: kind.message().to_string(),
            similarity: None,
        }
    }

    /// Attaches the triggering comparison and appends it to the message.
    pub(crate) fn with_similarity(mut self, similarity: Similarity) -> Self {
        self.message = format!("{} {similarity}", self.kind.message());
        self.similarity = Some(similarity);
        self
    }
}
