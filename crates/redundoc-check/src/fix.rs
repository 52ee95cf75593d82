//! Deletion fixes for reported problems.

use std::collections::BTreeMap;

use redundoc_model::{DocComment, SourceFile, Span};
use serde::Serialize;

use crate::error::{CheckError, Result};
use crate::problem::{Problem, ProblemTarget};

/// Replacement of a byte range of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    /// Byte range replaced in the source text.
    pub span: Span,
    pub replacement: String,
}

impl TextEdit {
    /// An edit removing `span`.
    pub fn delete(span: Span) -> Self {
        Self {
            span,
            replacement: String::new(),
        }
    }

    fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }
}

/// Deletes the flagged tag or comment.
///
/// A comment is deleted as a whole when the problem concerns the whole
/// comment, or when nothing would remain of it once the flagged tags are
/// gone. A comment alone on its lines takes those lines with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteFix;

impl DeleteFix {
    pub const NAME: &'static str = "Delete";

    /// Edits fixing a single problem.
    pub fn plan(source: &SourceFile, problem: &Problem) -> Result<Vec<TextEdit>> {
        Self::plan_all(source, std::slice::from_ref(problem))
    }

    /// Edits fixing all `problems` at once, sorted by position.
    pub fn plan_all(source: &SourceFile, problems: &[Problem]) -> Result<Vec<TextEdit>> {
        let mut per_comment: BTreeMap<usize, (bool, Vec<usize>)> = BTreeMap::new();
        for problem in problems {
            let idx = source
                .comments
                .iter()
                .position(|comment| comment.span.contains(&problem.span))
                .ok_or(CheckError::DetachedProblem { span: problem.span })?;
            let (whole, tags) = per_comment.entry(idx).or_default();
            match problem.target {
                ProblemTarget::Comment => *whole = true,
                ProblemTarget::Tag(tag) if !tags.contains(&tag) => tags.push(tag),
                ProblemTarget::Tag(_) => {}
            }
        }

        let mut edits = Vec::new();
        for (idx, (whole, mut tags)) in per_comment {
            let comment = &source.comments[idx];
            if whole || comment.text_without_tags(&tags).is_empty() {
                tracing::debug!(line = comment.span.line, "deleting comment");
                edits.push(TextEdit::delete(comment_extent(&source.text, comment)));
                continue;
            }
            tags.sort_unstable();
            edits.extend(
                tags.iter()
                    .filter_map(|&tag| comment.tags.get(tag))
                    .map(|tag| TextEdit::delete(tag.span)),
            );
        }
        edits.sort_by_key(|edit| (edit.span.start, edit.span.end));
        Ok(edits)
    }
}

/// The comment's span, widened to whole lines when nothing else shares them.
fn comment_extent(text: &str, comment: &DocComment) -> Span {
    let span = comment.span;
    let (Some(before), Some(after)) = (text.get(..span.start), text.get(span.end..)) else {
        return span;
    };

    let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
    if !before[line_start..].trim().is_empty() {
        return span;
    }
    let rest_of_line = after.find('\n').map_or(after.len(), |nl| nl + 1);
    if !after[..rest_of_line].trim().is_empty() {
        return span;
    }

    Span {
        start: line_start,
        end: span.end + rest_of_line,
        line: span.line,
    }
}

/// Applies `edits` to `text`.
///
/// Edits may come in any order. Overlapping deletions are merged and
/// duplicate edits collapse; any other overlap is a conflict.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> Result<String> {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|edit| (edit.span.start, edit.span.end));

    let mut merged: Vec<TextEdit> = Vec::with_capacity(sorted.len());
    for edit in sorted {
        edit.span.slice(text)?;
        match merged.last_mut() {
            Some(last) if *last == *edit => {}
            Some(last) if last.span.overlaps(&edit.span) => {
                if !(last.is_deletion() && edit.is_deletion()) {
                    return Err(CheckError::ConflictingEdits {
                        first: last.span,
                        second: edit.span,
                    });
                }
                last.span = last.span.merge(&edit.span);
            }
            _ => merged.push(edit.clone()),
        }
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in &merged {
        output.push_str(&text[cursor..edit.span.start]);
        output.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    output.push_str(&text[cursor..]);
    Ok(output)
}
