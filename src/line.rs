//! Line classification.
//!
//! Each input line is one of four kinds, tested in priority order with the
//! first match winning:
//!
//! 1. a comment (`;` or `#` after optional leading whitespace),
//! 2. a section header (`[name]`, anything after the first `]` is ignored),
//! 3. an option (`key = value`, the key being a run of non-space, non-`=` characters),
//! 4. anything else, which is ignored.
//!
//! ```rust
//! use iniparser::line::{classify, Line};
//!
//! assert_eq!(classify("  # note"), Line::Comment);
//! assert_eq!(classify("[ Server ] trailing"), Line::Section(" Server "));
//! assert_eq!(
//!     classify("port = 8080 ; http"),
//!     Line::Option { key: "port", value: "8080 ; http" }
//! );
//! assert_eq!(classify("not an option"), Line::Ignorable);
//! ```

/// The kind of a single INI line, borrowing its captures from the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Comment,
    /// Raw text between `[` and the first `]`; trimming and case-folding
    /// happen when the section is installed.
    Section(&'a str),
    /// `value` is everything after `=` and the whitespace following it.
    Option { key: &'a str, value: &'a str },
    Ignorable,
}

/// Classifies one line of text (without its line terminator).
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let rest = line.trim_start_matches(is_blank);

    if rest.starts_with(is_comment_marker) {
        return Line::Comment;
    }
    if let Some(name) = section_name(rest) {
        return Line::Section(name);
    }
    if let Some((key, value)) = option(rest) {
        return Line::Option { key, value };
    }
    Line::Ignorable
}

pub(crate) fn is_comment_marker(c: char) -> bool {
    c == ';' || c == '#'
}

/// Whitespace as the C locale's `isspace` sees it. Non-ASCII spaces such as
/// U+00A0 are ordinary characters in keys, values and section names.
pub(crate) fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}

fn section_name(rest: &str) -> Option<&str> {
    let inner = rest.strip_prefix('[')?;
    let end = inner.find(']')?;
    // `[]` has nothing to capture and is not a header.
    if end == 0 {
        return None;
    }
    Some(&inner[..end])
}

fn option(rest: &str) -> Option<(&str, &str)> {
    let key_end = rest
        .find(|c: char| is_blank(c) || c == '=')
        .unwrap_or(rest.len());
    if key_end == 0 {
        return None;
    }
    let (key, after_key) = rest.split_at(key_end);
    let value = after_key.trim_start_matches(is_blank).strip_prefix('=')?;
    Some((key, value.trim_start_matches(is_blank)))
}
