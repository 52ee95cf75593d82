//! Doc comments and their block tags.

use serde::{Deserialize, Serialize};

use crate::owner::DocOwner;
use crate::span::Span;

/// A block tag such as `@param name description` or `@return description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    /// Tag name without the `@`.
    pub name: String,
    /// First word after the tag name (the parameter name for `@param`).
    pub value: Option<String>,
    /// Everything after `value`, with decoration stripped.
    pub text: String,
    /// Extent removed when the tag is deleted. Covers whole lines when the
    /// tag owns its lines.
    pub span: Span,
}

impl DocTag {
    /// The tag's data: `value` and `text` joined by a space.
    pub fn data(&self) -> String {
        match &self.value {
            Some(value) if self.text.is_empty() => value.clone(),
            Some(value) => format!("{value} {}", self.text),
            None => self.text.clone(),
        }
    }

    /// The tag as written, e.g. `@param id the identifier`.
    pub fn render(&self) -> String {
        let data = self.data();
        if data.is_empty() {
            format!("@{}", self.name)
        } else {
            format!("@{} {data}", self.name)
        }
    }
}

/// A documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Extent of the comment including its delimiters.
    pub span: Span,
    /// Free text before the first block tag, lines joined with `\n`.
    pub body: String,
    pub tags: Vec<DocTag>,
    /// The documented declaration, when one follows the comment.
    pub owner: Option<DocOwner>,
}

impl DocComment {
    /// Comment text with decoration stripped, optionally including the
    /// rendered block tags.
    pub fn text(&self, include_tags: bool) -> String {
        self.render_text(&[], include_tags)
    }

    /// Comment text (tags included) as it would read with the tags at the
    /// given positions removed.
    pub fn text_without_tags(&self, removed: &[usize]) -> String {
        self.render_text(removed, true)
    }

    fn render_text(&self, skipped: &[usize], include_tags: bool) -> String {
        let mut parts = Vec::with_capacity(self.tags.len() + 1);
        let body = self.body.trim();
        if !body.is_empty() {
            parts.push(body.to_string());
        }
        if include_tags {
            parts.extend(
                self.tags
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| !skipped.contains(idx))
                    .map(|(_, tag)| tag.render()),
            );
        }
        parts.join("\n")
    }

    /// All tags with the given name, with their positions.
    pub fn find_tags<'a>(&'a self, name: &str) -> impl Iterator<Item = (usize, &'a DocTag)> {
        self.tags
            .iter()
            .enumerate()
            .filter(move |(_, tag)| tag.name == name)
    }

    /// Returns true when the comment has neither body text nor tags.
    pub fn is_empty(&self) -> bool {
        self.text(true).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span::new(start, end, 1).unwrap()
    }

    fn tag(name: &str, value: Option<&str>, text: &str) -> DocTag {
        DocTag {
            name: name.to_string(),
            value: value.map(String::from),
            text: text.to_string(),
            span: span(0, 0),
        }
    }

    fn comment(body: &str, tags: Vec<DocTag>) -> DocComment {
        DocComment {
            span: span(0, 0),
            body: body.to_string(),
            tags,
            owner: None,
        }
    }

    #[test]
    fn test_tag_data_joins_value_and_text() {
        assert_eq!(tag("param", Some("id"), "the id").data(), "id the id");
        assert_eq!(tag("param", Some("id"), "").data(), "id");
        assert_eq!(tag("deprecated", None, "").render(), "@deprecated");
        assert_eq!(tag("return", Some("the"), "name").render(), "@return the name");
    }

    #[test]
    fn test_text_with_and_without_tags() {
        let doc = comment(
            "  Returns the name. ",
            vec![
                tag("param", Some("id"), "the id"),
                tag("return", Some("the"), "name"),
            ],
        );
        assert_eq!(doc.text(false), "Returns the name.");
        assert_eq!(
            doc.text(true),
            "Returns the name.\n@param id the id\n@return the name"
        );
        assert_eq!(doc.text_without_tags(&[0]), "Returns the name.\n@return the name");
    }

    #[test]
    fn test_emptiness_counts_tags() {
        assert!(comment(" \n ", vec![]).is_empty());
        let tagged = comment("", vec![tag("deprecated", None, "")]);
        assert!(!tagged.is_empty());
        assert_eq!(tagged.text_without_tags(&[0]), "");
    }

    #[test]
    fn test_finds_tags_by_name() {
        let doc = comment(
            "",
            vec![
                tag("param", Some("a"), "first"),
                tag("return", None, "sum"),
                tag("param", Some("b"), "second"),
            ],
        );
        let params: Vec<usize> = doc.find_tags("param").map(|(idx, _)| idx).collect();
        assert_eq!(params, vec![0, 2]);
        assert_eq!(doc.find_tags("return").map(|(idx, _)| idx).next(), Some(1));
        assert!(doc.find_tags("throws").next().is_none());
    }
}
