//! Value extraction.
//!
//! Turns the raw text after `=` into the stored option value:
//!
//! - A value wrapped in double quotes keeps everything between the quotes
//!   verbatim, including `;`, `#` and surrounding spaces. Only whitespace or a
//!   comment may follow the closing quote.
//! - Any other value is cut at the first `;` or `#` and trimmed.
//!
//! ```rust
//! use iniparser::value::extract;
//!
//! assert_eq!(extract(r#""value; #4#" ; comment4"#), "value; #4#");
//! assert_eq!(extract("value2 ; comment2 ; ;comment2"), "value2");
//! assert_eq!(extract(r#""param3         ""#), "param3         ");
//! ```

use crate::line::{is_blank, is_comment_marker};

/// Extracts the option value from the raw text that follows `=`.
///
/// Never fails; a value that is empty after comment stripping yields `""`.
#[must_use]
pub fn extract(raw: &str) -> &str {
    quoted(raw).unwrap_or_else(|| unquoted(raw))
}

/// Returns the text between the quotes when `raw` is a well-formed quoted value.
fn quoted(raw: &str) -> Option<&str> {
    let body = raw.trim_start_matches(is_blank).strip_prefix('"')?;
    let close = body.find('"')?;
    let tail = body[close + 1..].trim_start_matches(is_blank);
    if tail.is_empty() || tail.starts_with(is_comment_marker) {
        Some(&body[..close])
    } else {
        None
    }
}

fn unquoted(raw: &str) -> &str {
    let end = raw.find(is_comment_marker).unwrap_or(raw.len());
    raw[..end].trim_matches(is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_values_are_trimmed() {
        assert_eq!(extract("value1  "), "value1");
        assert_eq!(
            extract("value \t1 value     1 value 1 value 1         "),
            "value \t1 value     1 value 1 value 1"
        );
        assert_eq!(extract("value2      \t\t\t dfdfdf     "), "value2      \t\t\t dfdfdf");
    }

    #[test]
    fn test_unquoted_comment_stripping() {
        assert_eq!(extract("value2      ; trailing comment"), "value2");
        assert_eq!(extract("; comment1    "), "");
        assert_eq!(extract("# comment5\t\t\t"), "");
        assert_eq!(extract("a#b;c"), "a");
    }

    #[test]
    fn test_quoted_values_are_verbatim() {
        assert_eq!(extract(r#""  raw text; with # marks  ""#), "  raw text; with # marks  ");
        assert_eq!(extract(r#""value; #4#" ; comment4"#), "value; #4#");
        assert_eq!(extract(r#""x"   # note"#), "x");
        assert_eq!(extract(r#""x"  "#), "x");
        assert_eq!(extract(r#""""#), "");
    }

    #[test]
    fn test_malformed_quotes_take_the_unquoted_path() {
        // Unterminated quote
        assert_eq!(extract(r#""abc"#), r#""abc"#);
        // Text after the closing quote that is not a comment
        assert_eq!(extract(r#""a" b"#), r#""a" b"#);
        assert_eq!(extract(r#""a" b ; c"#), r#""a" b"#);
        // Quote that does not open the value
        assert_eq!(extract(r#"0.0000343 444""#), r#"0.0000343 444""#);
    }

    #[test]
    fn test_non_ascii_spaces_are_kept() {
        assert_eq!(extract("v\u{a0}"), "v\u{a0}");
        assert_eq!(extract("\u{3000}v ; c"), "\u{3000}v");
        assert_eq!(extract("\"x\"\u{a0}"), "\"x\"\u{a0}");
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(extract(""), "");
        assert_eq!(extract("   \t"), "");
    }
}
