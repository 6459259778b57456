//! INI Format Reference
//!
//! This module documents the INI dialect accepted by this library.
//!
//! # Overview
//!
//! An INI file is a sequence of lines. Every line is read on its own; there
//! are no multi-line values, no escapes and no nesting. Lines that do not fit
//! any rule below are skipped without error, so a file never fails to parse
//! because of its content.
//!
//! # Lines
//!
//! Each line is tested against the following rules in order, and the first
//! rule that matches decides what the line is:
//!
//! | Kind | Shape | Effect |
//! |------|-------|--------|
//! | Comment | `ws* (';' \| '#') any*` | Ignored |
//! | Section | `ws* '[' name ']' any*` | Starts section `name` |
//! | Option | `ws* key ws* '=' ws* value` | Stores `value` under `key` |
//! | Other | anything else | Ignored |
//!
//! ```text
//! ; comment
//!   # also a comment
//! [Server]            ; text after ']' is ignored
//! host = example.org
//! port=8080
//! ```
//!
//! ## Section headers
//!
//! - The name is the text between `[` and the **first** `]`, trimmed and
//!   ASCII lower-cased: `[  Server  ]` names the section `server`.
//! - `[]` is not a header.
//! - Declaring a section that already exists empties it. Its position in
//!   [`Ini::sections`](crate::Ini::sections) stays where it was first declared.
//!
//! ## Options
//!
//! - The key is one or more characters that are neither whitespace nor `=`,
//!   ASCII lower-cased. A key can therefore never contain `=`, and a line like
//!   `two words = x` is not an option.
//! - Everything after the first `=` (minus the whitespace right after it) is
//!   the raw value, so values may contain `=`.
//! - Setting a key twice keeps the last value.
//! - Options before the first header belong to the section `default`. That
//!   section only exists if at least one option is assigned to it.
//!
//! # Values
//!
//! ## Unquoted
//!
//! Everything from the first `;` or `#` onwards is a comment. What remains is
//! trimmed:
//!
//! ```text
//! param2 = value2 ; comment      -> "value2"
//! param1 = ; comment             -> ""
//! param5 =# comment              -> ""
//! ```
//!
//! ## Quoted
//!
//! A value that starts with `"` and whose closing `"` is followed only by
//! whitespace or a comment keeps the quoted text exactly, including
//! whitespace and comment markers:
//!
//! ```text
//! param4 = "value; #4#" ; comment  -> "value; #4#"
//! param3 = "param3      "          -> "param3      "
//! ```
//!
//! A value with an unmatched quote, or text after the closing quote, is
//! treated as unquoted and keeps its quote characters.
//!
//! # Typed Values
//!
//! | Accessor | Accepted | Example |
//! |----------|----------|---------|
//! | Boolean | `on`, `true`, `1`, `enable` (any case) read as `true`; any other non-empty value is `false` | `Enable` -> `true`, `maybe` -> `false` |
//! | Integer | Longest prefix matching `[+-]?[0-9]+` | `-38hvgf384849` -> `-38` |
//! | Float | Longest prefix matching `[+-]?digits[.digits][(e\|E)[+-]?digits]` | `309e3` -> `309000`, `0.0000343 444"` -> `0.0000343` |
//!
//! Empty or missing values yield the caller's default. Numbers with no valid
//! prefix, integers outside the `i32` range and floats that overflow to
//! infinity or underflow to zero from a nonzero mantissa (`1e-400`) also
//! yield the default.
//!
//! # Encoding
//!
//! Input is read as UTF-8; invalid sequences become U+FFFD. Both `\n` and
//! `\r\n` line endings are accepted. Case folding is ASCII only, and so is
//! whitespace: only space, `\t`, `\n`, `\v`, `\f` and `\r` separate or trim
//! tokens. Other spaces such as U+00A0 are ordinary characters.

// This module contains only documentation; no implementation code
