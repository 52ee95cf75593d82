//! Byte ranges into source text.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Half-open byte range `start..end` into a source text, with the 1-based
/// line number of `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Span {
    /// Creates a span, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSpan`] for a reversed range.
    pub fn new(start: usize, end: usize, line: usize) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidSpan { start, end });
        }
        Ok(Self { start, end, line })
    }

    /// Returns true when `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true when the two spans share at least one byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Smallest span covering both. Keeps the line of the earlier start.
    #[must_use]
    pub fn merge(&self, other: &Span) -> Span {
        let line = if self.start <= other.start {
            self.line
        } else {
            other.line
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line,
        }
    }

    /// Returns the covered slice of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Result<&'a str> {
        if self.end > text.len() {
            return Err(ModelError::SpanOutOfBounds {
                start: self.start,
                end: self.end,
                len: text.len(),
            });
        }
        text.get(self.start..self.end)
            .ok_or(ModelError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}
