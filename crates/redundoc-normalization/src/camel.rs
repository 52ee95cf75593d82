//! Word-boundary insertion for camelCase and PascalCase identifiers.

/// Inserts a space at every camel-case word boundary.
///
/// A boundary sits between a lower-case letter and a following upper-case
/// letter, and between any letter and an upper-case letter that is itself
/// followed by a lower-case letter. The second rule keeps acronyms together:
///
/// - `"setProperty"` -> `"set Property"`
/// - `"URLEncoder"` -> `"URL Encoder"`
/// - `"getXMLProdukt"` -> `"get XML Produkt"`
///
/// Characters that are not letters are copied unchanged.
pub fn un_camel_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + chars.len() / 4);

    for (idx, &ch) in chars.iter().enumerate() {
        if idx > 0 && ch.is_uppercase() {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase() || (prev.is_alphabetic() && next_is_lower) {
                out.push(' ');
            }
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_lower_to_upper() {
        assert_eq!(un_camel_case("setProperty"), "set Property");
        assert_eq!(un_camel_case("aBcD"), "a Bc D");
    }

    #[test]
    fn test_keeps_acronyms_together() {
        assert_eq!(un_camel_case("URLEncoder"), "URL Encoder");
        assert_eq!(un_camel_case("getXMLProdukt"), "get XML Produkt");
        assert_eq!(un_camel_case("HTTP"), "HTTP");
    }

    #[test]
    fn test_leaves_non_letters_alone() {
        assert_eq!(un_camel_case("get_value2Bytes"), "get_value2Bytes");
        assert_eq!(un_camel_case("  "), "  ");
        assert_eq!(un_camel_case(""), "");
    }

    #[test]
    fn test_handles_non_ascii_letters() {
        assert_eq!(un_camel_case("skapaVärde"), "skapa Värde");
        assert_eq!(un_camel_case("ärÖppen"), "är Öppen");
    }
}
