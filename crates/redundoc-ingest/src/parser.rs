//! Doc comment extraction.

use std::path::{Path, PathBuf};

use redundoc_model::{DocComment, DocTag, SourceFile, Span};

use crate::declaration::parse_declaration;
use crate::error::{IngestError, Result};
use crate::lines::LineIndex;
use crate::scanner::{RawComment, doc_comments};

/// Reads and parses a source file.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_source(path, text))
}

/// Extracts every doc comment in `text`, with its block tags and the
/// declaration it documents.
pub fn parse_source(path: impl Into<PathBuf>, text: impl Into<String>) -> SourceFile {
    let mut source = SourceFile::new(path, text);
    let index = LineIndex::new(&source.text);

    source.comments = doc_comments(&source.text)
        .into_iter()
        .map(|raw| build_comment(&source.text, &index, raw))
        .collect();

    tracing::debug!(
        path = %source.path.display(),
        comments = source.comments.len(),
        "parsed source"
    );
    source
}

/// One line of comment text with absolute byte positions.
#[derive(Debug, Clone, Copy)]
struct CommentLine {
    /// Start of the source line (after the previous newline).
    start: usize,
    content_start: usize,
    content_end: usize,
    /// One past the line's newline, or the end of the comment text.
    end: usize,
    first: bool,
    last: bool,
}

impl CommentLine {
    fn content<'a>(&self, text: &'a str) -> &'a str {
        &text[self.content_start..self.content_end]
    }
}

fn comment_lines(text: &str, raw: RawComment) -> Vec<CommentLine> {
    let inner = &text[raw.inner_start..raw.inner_end];
    let count = inner.split('\n').count();
    let mut offset = raw.inner_start;

    inner
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            let first = idx == 0;
            let last = idx + 1 == count;
            let start = offset;
            let end = if last {
                raw.inner_end
            } else {
                offset + line.len() + 1
            };
            offset = end;

            let leading = line.len() - line.trim_start().len();
            let after_ws = &line[leading..];
            let after_stars = after_ws.trim_start_matches('*');
            let body = after_stars.trim_start();
            let content_start = start + (line.len() - body.len());
            let trimmed = if last {
                body.trim_end().trim_end_matches('*').trim_end()
            } else {
                body.trim_end()
            };
            CommentLine {
                start,
                content_start,
                content_end: content_start + trimmed.len(),
                end,
                first,
                last,
            }
        })
        .collect()
}

fn starts_block_tag(content: &str) -> bool {
    content
        .strip_prefix('@')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_alphabetic)
}

fn build_comment(text: &str, index: &LineIndex, raw: RawComment) -> DocComment {
    let lines = comment_lines(text, raw);
    let first_tag = lines
        .iter()
        .position(|line| starts_block_tag(line.content(text)))
        .unwrap_or(lines.len());

    let body = lines[..first_tag]
        .iter()
        .map(|line| line.content(text))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    let mut tags = Vec::new();
    let mut group: Vec<CommentLine> = Vec::new();
    for line in &lines[first_tag..] {
        if starts_block_tag(line.content(text)) && !group.is_empty() {
            tags.push(build_tag(text, index, &group));
            group.clear();
        }
        group.push(*line);
    }
    if !group.is_empty() {
        tags.push(build_tag(text, index, &group));
    }

    DocComment {
        span: Span {
            start: raw.start,
            end: raw.end,
            line: index.line(raw.start),
        },
        body,
        tags,
        owner: parse_declaration(&text[raw.end..]),
    }
}

/// Builds a tag from its first line and continuation lines.
fn build_tag(text: &str, index: &LineIndex, group: &[CommentLine]) -> DocTag {
    let head = group[0];
    let head_content = head.content(text);
    let after_at = &head_content[1..];
    let name_len = after_at
        .find(char::is_whitespace)
        .unwrap_or(after_at.len());
    let name = after_at[..name_len].to_string();

    let data = std::iter::once(after_at[name_len..].trim())
        .chain(group[1..].iter().map(|line| line.content(text)))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let (value, rest) = match data.split_once(char::is_whitespace) {
        Some((value, rest)) => (Some(value.to_string()), rest.trim().to_string()),
        None if data.is_empty() => (None, String::new()),
        None => (Some(data.clone()), String::new()),
    };

    // Last line that holds part of this tag; trailing blank lines stay put.
    let tail = group
        .iter()
        .rev()
        .find(|line| line.content_end > line.content_start)
        .copied()
        .unwrap_or(head);

    let owns_lines = !head.first && !tail.last;
    let (start, end) = if owns_lines {
        (head.start, tail.end)
    } else {
        (head.content_start, tail.content_end)
    };

    DocTag {
        name,
        value,
        text: rest,
        span: Span {
            start,
            end,
            line: index.line(start),
        },
    }
}
