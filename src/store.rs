//! Ordered, case-insensitive section store.
//!
//! This module provides [`Ini`], the parsed contents of an INI file, and
//! [`Section`], the options of one `[header]`. Both are thin wrappers around
//! [`IndexMap`] so that enumeration follows the order in which sections and
//! options first appeared in the file.
//!
//! ## Case-insensitive keys
//!
//! Section and option names are ASCII lower-cased when they are inserted, and
//! every lookup key is lower-cased the same way before comparison. Values are
//! never folded.
//!
//! ## Examples
//!
//! ```rust
//! use iniparser::Ini;
//!
//! let ini = Ini::parse("[Server]\nHost = Example.org\nport = 8080x");
//!
//! assert_eq!(ini.sections().collect::<Vec<_>>(), vec!["server"]);
//! assert_eq!(ini.get("SERVER", "host"), Some("Example.org"));
//! assert_eq!(ini.get_int("server", "port"), 8080);
//! assert_eq!(ini.get_or("server", "user", "root"), "root");
//! ```

use crate::line::is_blank;
use crate::number::{parse_float, parse_int};
use crate::options::IniOptions;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The options of a single section, in first-insertion order.
///
/// Option names are stored lower-cased; values keep their original case.
///
/// # Examples
///
/// ```rust
/// use iniparser::Ini;
///
/// let ini = Ini::parse("[db]\nUser = admin\nPASS = secret");
/// let section = ini.section("DB").unwrap();
///
/// let keys: Vec<_> = section.keys().collect();
/// assert_eq!(keys, vec!["user", "pass"]);
/// assert_eq!(section.get("Pass"), Some("secret"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section(IndexMap<String, String>);

impl Section {
    #[must_use]
    pub(crate) fn new() -> Self {
        Section(IndexMap::new())
    }

    /// Stores `value` under the lower-cased `option`, overwriting any previous value.
    ///
    /// Returns the previous value if there was one.
    pub(crate) fn insert(&mut self, option: &str, value: String) -> Option<String> {
        self.0.insert(option.to_ascii_lowercase(), value)
    }

    /// Returns the value of `option`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.0.get(&option.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns `true` if the section holds `option`.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.contains_key(&option.to_ascii_lowercase())
    }

    /// Returns the number of options in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the lower-cased option names, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over `(option, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn entries(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (option, value) in &self.0 {
            map.serialize_entry(option, value)?;
        }
        map.end()
    }
}

/// A parsed INI file: sections in first-creation order, each holding its options.
///
/// An `Ini` is built once by [`Ini::parse`] (or one of the loading functions)
/// and is read-only afterwards, so it can be shared between threads freely.
///
/// The typed accessors never fail. A missing or empty option yields the
/// default; a value that cannot be converted is handled per accessor:
///
/// | Accessor | Empty / missing | Not convertible |
/// |----------|-----------------|-----------------|
/// | [`get_bool_or`](Ini::get_bool_or) | default | `false` |
/// | [`get_int_or`](Ini::get_int_or) | default | default |
/// | [`get_double_or`](Ini::get_double_or) | default | default |
#[derive(Debug, Clone, PartialEq)]
pub struct Ini {
    sections: IndexMap<String, Section>,
    config: IniOptions,
}

impl Default for Ini {
    fn default() -> Self {
        Self::new(IniOptions::default())
    }
}

impl Ini {
    /// Creates an empty `Ini` that converts booleans according to `options`.
    #[must_use]
    pub(crate) fn new(options: IniOptions) -> Self {
        Ini {
            sections: IndexMap::new(),
            config: options,
        }
    }

    /// Installs a fresh, empty section under the trimmed, lower-cased `name`.
    ///
    /// A section that already exists is emptied but keeps its original position.
    /// Returns the stored name.
    pub(crate) fn begin_section(&mut self, name: &str) -> String {
        let name = name.trim_matches(is_blank).to_ascii_lowercase();
        self.sections.insert(name.clone(), Section::new());
        name
    }

    /// Stores `value` under `option` in `section`, creating the section if needed.
    pub(crate) fn set(&mut self, section: &str, option: &str, value: String) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(option, value);
    }

    /// The options this `Ini` was parsed with.
    #[must_use]
    pub fn parse_options(&self) -> &IniOptions {
        &self.config
    }

    /// Returns the section names, each exactly once, in the order they were first created.
    pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.keys().map(String::as_str)
    }

    /// Returns the option names of `section` in insertion order.
    ///
    /// The iterator is empty if the section does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniparser::Ini;
    ///
    /// let ini = Ini::parse("[a]\nx = 1\ny = 2");
    /// assert_eq!(ini.options("A").collect::<Vec<_>>(), vec!["x", "y"]);
    /// assert_eq!(ini.options("nosuch").count(), 0);
    /// ```
    pub fn options<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.section(section).into_iter().flat_map(Section::keys)
    }

    /// Returns the section named `name`, compared case-insensitively.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&name.to_ascii_lowercase())
    }

    /// Returns `true` if a section named `name` exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(&name.to_ascii_lowercase())
    }

    /// Returns `true` if `section` exists and holds `option`.
    #[must_use]
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.section(section).is_some_and(|s| s.contains(option))
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if no section exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns an iterator over `(name, section)` pairs, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> + '_ {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the raw value of `option` in `section`, both compared case-insensitively.
    #[must_use]
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.section(section)?.get(option)
    }

    /// Returns the raw value of `option` in `section`, or `default` if it is missing.
    #[must_use]
    pub fn get_or<'a>(&'a self, section: &str, option: &str, default: &'a str) -> &'a str {
        self.get(section, option).unwrap_or(default)
    }

    /// Same as [`get_bool_or`](Ini::get_bool_or) with a default of `false`.
    #[must_use]
    pub fn get_bool(&self, section: &str, option: &str) -> bool {
        self.get_bool_or(section, option, false)
    }

    /// Reads `option` as a boolean.
    ///
    /// A missing or empty value yields `default`. Any other value is `true`
    /// only if it is one of the truthy strings (`on`, `true`, `1`, `enable`
    /// by default, compared case-insensitively), and `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniparser::Ini;
    ///
    /// let ini = Ini::parse("a = Enable\nb = maybe\nc =");
    /// assert!(ini.get_bool_or("default", "a", false));
    /// assert!(!ini.get_bool_or("default", "b", true));
    /// assert!(ini.get_bool_or("default", "c", true));
    /// ```
    #[must_use]
    pub fn get_bool_or(&self, section: &str, option: &str, default: bool) -> bool {
        match self.non_empty(section, option) {
            Some(value) => self.config.is_true(value),
            None => default,
        }
    }

    /// Same as [`get_int_or`](Ini::get_int_or) with a default of `0`.
    #[must_use]
    pub fn get_int(&self, section: &str, option: &str) -> i32 {
        self.get_int_or(section, option, 0)
    }

    /// Reads the leading integer of `option`, ignoring any trailing text.
    ///
    /// Yields `default` if the value is missing, empty, has no leading
    /// integer, or does not fit in an `i32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniparser::Ini;
    ///
    /// let ini = Ini::parse("a = -38384 849\nb = true");
    /// assert_eq!(ini.get_int_or("default", "a", 5), -38384);
    /// assert_eq!(ini.get_int_or("default", "b", 23), 23);
    /// ```
    #[must_use]
    pub fn get_int_or(&self, section: &str, option: &str, default: i32) -> i32 {
        self.non_empty(section, option)
            .and_then(parse_int)
            .unwrap_or(default)
    }

    /// Same as [`get_double_or`](Ini::get_double_or) with a default of `0.0`.
    #[must_use]
    pub fn get_double(&self, section: &str, option: &str) -> f64 {
        self.get_double_or(section, option, 0.0)
    }

    /// Reads the leading floating-point number of `option`, ignoring any trailing text.
    ///
    /// Yields `default` if the value is missing, empty, has no leading number,
    /// or overflows.
    #[must_use]
    pub fn get_double_or(&self, section: &str, option: &str, default: f64) -> f64 {
        self.non_empty(section, option)
            .and_then(parse_float)
            .unwrap_or(default)
    }

    fn non_empty(&self, section: &str, option: &str) -> Option<&str> {
        self.get(section, option).filter(|v| !v.is_empty())
    }
}

impl Serialize for Ini {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Ini {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
