//! Configuration options for INI parsing.
//!
//! [`IniOptions`] controls the two policies that are not part of the line
//! grammar itself: the name of the section options belong to before any
//! header, and the set of strings that read as `true`.
//!
//! ## Examples
//!
//! ```rust
//! use iniparser::{Ini, IniOptions};
//!
//! let options = IniOptions::new()
//!     .with_default_section("general")
//!     .with_true_values(["yes", "y"]);
//!
//! let ini = Ini::parse_with_options("verbose = YES", options);
//! assert!(ini.get_bool("general", "verbose"));
//! ```

use crate::line::is_blank;

/// Section that options belong to before the first `[header]` line.
pub const DEFAULT_SECTION: &str = "default";

/// Strings (compared ignoring ASCII case) that [`Ini::get_bool`](crate::Ini::get_bool)
/// reads as `true`.
pub const TRUE_VALUES: [&str; 4] = ["on", "true", "1", "enable"];

/// Configuration options for INI parsing and boolean conversion.
///
/// Both fields are compared ignoring ASCII case, so they may be set through
/// the builders or a struct literal alike.
///
/// # Examples
///
/// ```rust
/// use iniparser::IniOptions;
///
/// let options = IniOptions::new();
/// assert_eq!(options.default_section, "default");
/// assert!(options.is_true("Enable"));
/// assert!(!options.is_true("yes"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniOptions {
    pub default_section: String,
    pub true_values: Vec<String>,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            default_section: DEFAULT_SECTION.to_string(),
            true_values: TRUE_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IniOptions {
    /// Creates default options (`default` section, `on`/`true`/`1`/`enable` as truthy).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section name used for options that precede any header.
    ///
    /// The name is trimmed and lower-cased, the same way a `[header]` would be.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniparser::IniOptions;
    ///
    /// let options = IniOptions::new().with_default_section(" Global ");
    /// assert_eq!(options.default_section, "global");
    /// ```
    #[must_use]
    pub fn with_default_section(mut self, name: &str) -> Self {
        self.default_section = name.trim_matches(is_blank).to_ascii_lowercase();
        self
    }

    /// Replaces the set of strings that read as `true`.
    #[must_use]
    pub fn with_true_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.true_values = values
            .into_iter()
            .map(|s| s.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    /// Returns `true` if `value` is one of the truthy strings, ignoring ASCII case.
    #[must_use]
    pub fn is_true(&self, value: &str) -> bool {
        self.true_values.iter().any(|t| t.eq_ignore_ascii_case(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_truthy_set() {
        let options = IniOptions::default();
        for value in ["on", "TRUE", "1", "Enable"] {
            assert!(options.is_true(value), "{value} should be truthy");
        }
        for value in ["off", "false", "0", "disable", "yes", " true", ""] {
            assert!(!options.is_true(value), "{value} should not be truthy");
        }
    }

    #[test]
    fn test_struct_literal_true_values_ignore_case() {
        let options = IniOptions {
            true_values: vec!["YES".to_string()],
            ..IniOptions::default()
        };
        assert!(options.is_true("YES"));
        assert!(options.is_true("yes"));
        assert!(!options.is_true("true"));
    }

    #[test]
    fn test_custom_true_values_are_folded() {
        let options = IniOptions::new().with_true_values(["YES", "Y"]);
        assert!(options.is_true("yes"));
        assert!(options.is_true("y"));
        assert!(!options.is_true("true"));
    }
}
