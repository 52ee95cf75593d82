//! Resolution of the declaration that follows a doc comment.

use std::sync::LazyLock;

use redundoc_model::{DocOwner, OwnerKind};
use regex::Regex;

static TYPE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(?:class|interface|enum|record|@interface)\s+([\p{L}_$][\p{L}\p{N}_$]*)")
        .expect("Invalid type declaration regex")
});

static LEADING_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@[\p{L}_$][\p{L}\p{N}_$.]*").expect("Invalid annotation regex")
});

static INLINE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[\p{L}_$][\p{L}\p{N}_$.]*\s*").expect("Invalid annotation regex")
});

static TRAILING_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\p{L}_$][\p{L}\p{N}_$]*)\s*$").expect("Invalid identifier regex")
});

static PACKAGE_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[a-z_][\w$]*\.)+").expect("Invalid qualifier regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

const MODIFIERS: &[&str] = &[
    "abstract",
    "default",
    "final",
    "native",
    "non-sealed",
    "private",
    "protected",
    "public",
    "sealed",
    "static",
    "strictfp",
    "synchronized",
    "transient",
    "volatile",
];

/// Resolves the declaration at the start of `following`, the source text
/// right after a doc comment.
///
/// Leading whitespace, plain comments and annotations are skipped. Returns
/// `None` when another doc comment or no recognizable declaration follows.
pub fn parse_declaration(following: &str) -> Option<DocOwner> {
    let rest = skip_preamble(following)?;
    let (header, stop) = declaration_header(rest)?;

    if let Some(caps) = TYPE_DECLARATION.captures(header) {
        return Some(DocOwner::new(OwnerKind::Type, &caps[1]));
    }

    let header = INLINE_ANNOTATION.replace_all(header, "");
    let caps = TRAILING_IDENTIFIER.captures(&header)?;
    let name_match = caps.get(1)?;
    let declared_type = declared_type(&header[..name_match.start()]);

    let kind = match (stop, &declared_type) {
        ('(', None) => OwnerKind::Constructor,
        ('(', Some(_)) => OwnerKind::Method,
        (';' | '=' | ',', _) => OwnerKind::Field,
        _ => return None,
    };

    Some(DocOwner {
        kind,
        name: name_match.as_str().to_string(),
        declared_type,
    })
}

fn skip_preamble(text: &str) -> Option<&str> {
    let mut rest = text;
    loop {
        rest = rest.trim_start();
        if rest.starts_with("/**") && !rest.starts_with("/**/") {
            return None;
        }
        if let Some(after) = rest.strip_prefix("//") {
            rest = after.split_once('\n').map_or("", |(_, tail)| tail);
        } else if let Some(after) = rest.strip_prefix("/*") {
            rest = after.split_once("*/").map_or("", |(_, tail)| tail);
        } else if rest.starts_with('@') && !rest.starts_with("@interface") {
            let annotation = LEADING_ANNOTATION.find(rest)?;
            rest = rest[annotation.end()..].trim_start();
            if rest.starts_with('(') {
                rest = skip_balanced(rest, '(', ')');
            }
        } else {
            return Some(rest);
        }
    }
}

/// Text up to the first `(`, `{`, `;`, `=` or `,` outside generic brackets,
/// and that character.
fn declaration_header(text: &str) -> Option<(&str, char)> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '(' | '{' | ';' | '=' | ',' if depth == 0 => return Some((&text[..idx], ch)),
            '}' => return None,
            _ => {}
        }
    }
    None
}

/// Strips modifiers and type parameters from the text before a member name
/// and returns what is left as the presentable type.
fn declared_type(prefix: &str) -> Option<String> {
    let mut rest = prefix.trim();
    loop {
        if rest.starts_with('<') {
            rest = skip_balanced(rest, '<', '>').trim_start();
            continue;
        }
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if word_end > 0 && MODIFIERS.contains(&&rest[..word_end]) {
            rest = rest[word_end..].trim_start();
            continue;
        }
        break;
    }

    let collapsed = WHITESPACE.replace_all(rest.trim(), " ");
    let unqualified = PACKAGE_QUALIFIER.replace_all(&collapsed, "");
    (!unqualified.is_empty()).then(|| unqualified.into_owned())
}

/// Skips a bracketed group at the start of `text`, returning the remainder.
/// An unbalanced group consumes everything.
fn skip_balanced(text: &str, open: char, close: char) -> &str {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return &text[idx + ch.len_utf8()..];
            }
        }
    }
    ""
}
