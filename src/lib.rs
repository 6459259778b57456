//! # iniparser
//!
//! A small library for reading INI configuration files into an ordered,
//! case-insensitive key/value store with typed accessors.
//!
//! ## Key Features
//!
//! - **Forgiving**: malformed lines are skipped, unconvertible values fall back to a default
//! - **Ordered**: sections and options enumerate in the order they appear in the file
//! - **Case-Insensitive**: section and option names are compared ignoring ASCII case
//! - **Quoted Values**: `"..."` preserves whitespace and `;`/`#` inside values
//! - **Lenient Numbers**: `getInt`-style accessors read the leading number, so `8080 ; http` is `8080`
//! - **Serde Support**: deserialize a whole file into your own types
//!
//! ## Quick Start
//!
//! ```rust
//! use iniparser::Ini;
//!
//! let text = r#"
//! ; global settings
//! name = demo
//!
//! [Server]
//! Host    = example.org
//! port    = 8080        ; http
//! motd    = "  Welcome; enjoy #1  "
//! verbose = on
//! "#;
//!
//! let ini = Ini::parse(text);
//!
//! assert_eq!(ini.sections().collect::<Vec<_>>(), vec!["default", "server"]);
//! assert_eq!(ini.get("default", "name"), Some("demo"));
//! assert_eq!(ini.get("SERVER", "host"), Some("example.org"));
//! assert_eq!(ini.get_int("server", "port"), 8080);
//! assert_eq!(ini.get("server", "motd"), Some("  Welcome; enjoy #1  "));
//! assert!(ini.get_bool("server", "verbose"));
//! assert_eq!(ini.get_double_or("server", "ratio", 0.5), 0.5);
//! ```
//!
//! ### Loading Files
//!
//! [`IniParser::load`] reports only whether the file could be read. Use
//! [`Ini::from_path`] to get the underlying error instead.
//!
//! ```rust
//! use iniparser::IniParser;
//!
//! let mut parser = IniParser::new();
//! if !parser.load("settings.ini") {
//!     // The store is empty after a failed load.
//!     assert!(parser.is_empty());
//! }
//! ```
//!
//! ### Typed Deserialization
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Limits { retries: u32, timeout: f64 }
//!
//! #[derive(Deserialize)]
//! struct Config { limits: Limits }
//!
//! let config: Config = iniparser::from_str("[limits]\nretries = 3\ntimeout = 2.5s").unwrap();
//! assert_eq!(config.limits.retries, 3);
//! assert_eq!(config.limits.timeout, 2.5);
//! ```
//!
//! ## Format Specification
//!
//! See the [`format`] module for the accepted grammar and conversion rules.

pub mod de;
pub mod error;
pub mod format;
pub mod line;
pub mod number;
pub mod options;
pub mod parser;
pub mod store;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use options::IniOptions;
pub use parser::IniParser;
pub use store::{Ini, Section};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// Deserialize an instance of type `T` from an already parsed [`Ini`].
///
/// String fields may borrow from `ini`.
///
/// # Examples
///
/// ```rust
/// use iniparser::{from_ini, Ini};
/// use std::collections::BTreeMap;
///
/// let ini = Ini::parse("[a]\nx = 1");
/// let map: BTreeMap<&str, BTreeMap<&str, &str>> = from_ini(&ini).unwrap();
/// assert_eq!(map["a"]["x"], "1");
/// ```
///
/// # Errors
///
/// Returns an error if a value cannot be converted to the type of its field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_ini<'a, T>(ini: &'a Ini) -> Result<T>
where
    T: Deserialize<'a>,
{
    T::deserialize(Deserializer::new(ini))
}

/// Deserialize an instance of type `T` from a string of INI text.
///
/// # Examples
///
/// ```rust
/// use iniparser::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Shape { origin: Point }
///
/// let shape: Shape = from_str("[origin]\nx = 1\ny = -2").unwrap();
/// assert_eq!(shape.origin, Point { x: 1, y: -2 });
/// ```
///
/// # Errors
///
/// Returns an error if a value cannot be converted to the type of its field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_ini(&Ini::parse(s))
}

/// Deserialize an instance of type `T` from an I/O stream of INI text.
///
/// # Errors
///
/// Returns an error if reading from the reader fails or a value cannot be
/// converted to the type of its field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_ini(&Ini::from_reader(reader)?)
}

/// Deserialize an instance of type `T` from the INI file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a value cannot be
/// converted to the type of its field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path<P, T>(path: P) -> Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    from_ini(&Ini::from_path(path)?)
}
