//! Error types for loading and decoding INI data.
//!
//! Parsing itself never fails: malformed lines are skipped and the typed
//! accessors on [`Ini`](crate::Ini) fall back to a caller-supplied default.
//! Errors only surface at the two edges of the library:
//!
//! - **I/O Errors**: the input file or reader could not be read
//! - **Type Mismatches**: serde decoding asked for a number or boolean that
//!   the stored string cannot provide, and there is no default to fall back on
//!
//! ## Examples
//!
//! ```rust
//! use iniparser::{Error, Ini};
//!
//! let result = Ini::from_path("no_such_file.ini");
//! assert!(matches!(result, Err(Error::Io(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while loading or decoding INI data.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading
    #[error("IO error: {0}")]
    Io(String),

    /// A stored value could not be converted to the requested type
    #[error("Type mismatch in [{section}] {option}: expected {expected}, found {found:?}")]
    TypeMismatch {
        section: String,
        option: String,
        expected: String,
        found: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error for the option `option` of `section`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iniparser::Error;
    ///
    /// let err = Error::type_mismatch("int", "param5", "integer", "true");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(section: &str, option: &str, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            section: section.to_string(),
            option: option.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = Error::type_mismatch("double", "param7", "float", "true");
        assert_eq!(
            err.to_string(),
            "Type mismatch in [double] param7: expected float, found \"true\""
        );
    }

    #[test]
    fn test_io_display() {
        let err = Error::io("No such file or directory");
        assert_eq!(err.to_string(), "IO error: No such file or directory");
    }
}
