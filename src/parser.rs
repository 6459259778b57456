//! Whole-text INI parsing and the reloadable [`IniParser`].
//!
//! Parsing is a single pass over the lines of the input. Each line is
//! [classified](crate::line::classify); headers switch the current section and
//! options are stored in it after [value extraction](crate::value::extract).
//! Content never makes parsing fail, only an unreadable input does.
//!
//! ## Usage
//!
//! ```rust
//! use iniparser::IniParser;
//!
//! let mut parser = IniParser::new();
//! assert!(!parser.load("no_such_file.ini"));
//! assert!(parser.is_empty());
//!
//! parser.load_str("[bool]\nparam1 = true");
//! assert!(parser.get_bool("bool", "param1"));
//! ```

use crate::line::{classify, is_blank, Line};
use crate::options::IniOptions;
use crate::store::Ini;
use crate::value::extract;
use crate::{Error, Result};
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::Path;
use tracing::{debug, trace, warn};

impl Ini {
    /// Parses INI text with the default options.
    ///
    /// Never fails: lines that are neither comments, headers nor options are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniparser::Ini;
    ///
    /// let ini = Ini::parse("top = 1\n[Section]\nkey = \"  padded  \" ; note\nbroken line");
    /// assert_eq!(ini.sections().collect::<Vec<_>>(), vec!["default", "section"]);
    /// assert_eq!(ini.get("section", "key"), Some("  padded  "));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Ini {
        Self::parse_with_options(text, IniOptions::default())
    }

    /// Parses INI text with custom options.
    #[must_use]
    pub fn parse_with_options(text: &str, options: IniOptions) -> Ini {
        let mut current = options
            .default_section
            .trim_matches(is_blank)
            .to_ascii_lowercase();
        let mut ini = Ini::new(options);

        for (index, line) in text.lines().enumerate() {
            match classify(line) {
                Line::Comment => {}
                Line::Section(name) => current = ini.begin_section(name),
                Line::Option { key, value } => {
                    ini.set(&current, key, extract(value).to_string());
                }
                Line::Ignorable => {
                    if !line.trim_matches(is_blank).is_empty() {
                        trace!(line = index + 1, text = line, "skipping unrecognized line");
                    }
                }
            }
        }

        ini
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read. Invalid
    /// UTF-8 is replaced rather than reported.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Ini> {
        Self::from_path_with_options(path, IniOptions::default())
    }

    /// Reads and parses the file at `path` with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read.
    pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: IniOptions) -> Result<Ini> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading INI file");
        let bytes = fs::read(path)
            .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        let ini = Self::parse_with_options(&String::from_utf8_lossy(&bytes), options);
        debug!(path = %path.display(), sections = ini.len(), "loaded INI file");
        Ok(ini)
    }

    /// Reads all of `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Ini> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(&e.to_string()))?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }
}

/// A reusable parser that owns the most recently loaded [`Ini`].
///
/// Every load replaces the previous contents entirely. The parser dereferences
/// to [`Ini`], so all queries can be called on it directly.
///
/// # Examples
///
/// ```rust
/// use iniparser::{IniOptions, IniParser};
///
/// let mut parser = IniParser::with_options(IniOptions::new().with_default_section("main"));
/// parser.load_str("name = demo");
/// assert_eq!(parser.get("main", "name"), Some("demo"));
///
/// parser.load_str("[other]");
/// assert_eq!(parser.sections().collect::<Vec<_>>(), vec!["other"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser {
    ini: Ini,
    options: IniOptions,
}

impl IniParser {
    /// Creates a parser with default options and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that parses with `options`.
    #[must_use]
    pub fn with_options(options: IniOptions) -> Self {
        IniParser {
            ini: Ini::new(options.clone()),
            options,
        }
    }

    /// Loads the file at `path`, replacing the current contents.
    ///
    /// The store is cleared before the file is opened, so after a failed load
    /// it is empty. Returns `false` only if the file cannot be read.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.ini = Ini::new(self.options.clone());
        match Ini::from_path_with_options(path, self.options.clone()) {
            Ok(ini) => {
                self.ini = ini;
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to load INI file");
                false
            }
        }
    }

    /// Parses `text`, replacing the current contents.
    pub fn load_str(&mut self, text: &str) {
        self.ini = Ini::parse_with_options(text, self.options.clone());
    }

    /// Returns the loaded contents.
    #[must_use]
    pub fn ini(&self) -> &Ini {
        &self.ini
    }

    /// Consumes the parser, returning the loaded contents.
    #[must_use]
    pub fn into_inner(self) -> Ini {
        self.ini
    }
}

impl Deref for IniParser {
    type Target = Ini;

    fn deref(&self) -> &Ini {
        &self.ini
    }
}
