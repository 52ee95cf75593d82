//! Lexical scan for `/** ... */` comments.
//!
//! Skips line comments, plain block comments, string and character literals
//! and text blocks so that comment markers inside them are not picked up.

/// Byte positions of a doc comment: `start` is the `/` of `/**`, `end` is
/// one past the `/` of `*/`, and `inner_start..inner_end` is the text
/// between the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawComment {
    pub start: usize,
    pub inner_start: usize,
    pub inner_end: usize,
    pub end: usize,
}

pub(crate) fn doc_comments(text: &str) -> Vec<RawComment> {
    let bytes = text.as_bytes();
    let mut comments = Vec::new();
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'/' if bytes.get(idx + 1) == Some(&b'/') => {
                idx = find(bytes, idx + 2, b"\n").map_or(bytes.len(), |nl| nl + 1);
            }
            b'/' if bytes.get(idx + 1) == Some(&b'*') => {
                let Some(close) = find(bytes, idx + 2, b"*/") else {
                    break;
                };
                // `/**/` is an empty plain comment, not a doc comment.
                if bytes.get(idx + 2) == Some(&b'*') && close > idx + 2 {
                    comments.push(RawComment {
                        start: idx,
                        inner_start: idx + 3,
                        inner_end: close,
                        end: close + 2,
                    });
                }
                idx = close + 2;
            }
            b'"' if bytes[idx..].starts_with(b"\"\"\"") => {
                idx = find(bytes, idx + 3, b"\"\"\"").map_or(bytes.len(), |end| end + 3);
            }
            quote @ (b'"' | b'\'') => idx = skip_literal(bytes, idx + 1, quote),
            _ => idx += 1,
        }
    }

    comments
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

/// Returns the index after the closing quote. Literals do not span lines,
/// so an unterminated one ends at the newline.
fn skip_literal(bytes: &[u8], mut idx: usize, quote: u8) -> usize {
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'\n' => return idx,
            byte if byte == quote => return idx + 1,
            _ => idx += 1,
        }
    }
    bytes.len()
}
