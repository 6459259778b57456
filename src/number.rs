//! Leading-prefix numeric parsing.
//!
//! INI values such as `-38384 849` or `0.0000343 444"` are read as numbers by
//! taking the longest numeric-looking prefix and ignoring the rest. The prefix
//! is located here and then handed to the standard `str::parse`.
//!
//! ```rust
//! use iniparser::number::{parse_float, parse_int};
//!
//! assert_eq!(parse_int::<i32>("-38hvgf384849"), Some(-38));
//! assert_eq!(parse_int::<i32>("true"), None);
//! assert_eq!(parse_float("309e3"), Some(309000.0));
//! assert_eq!(parse_float("-27nmxcb6"), Some(-27.0));
//! ```

use crate::line::is_blank;
use std::str::FromStr;

/// Returns the longest prefix of `s` (after leading whitespace) shaped like a
/// signed decimal integer: `[+-]?[0-9]+`.
#[must_use]
pub fn int_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start_matches(is_blank);
    let bytes = s.as_bytes();
    let sign = sign_len(bytes, 0);
    let digits = digits_len(bytes, sign);
    if digits == 0 {
        return None;
    }
    Some(&s[..sign + digits])
}

/// Returns the longest prefix of `s` (after leading whitespace) shaped like a
/// decimal floating-point number: sign, digits with at most one `.`, then an
/// optional exponent. An exponent marker without digits is not consumed.
#[must_use]
pub fn float_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start_matches(is_blank);
    let bytes = s.as_bytes();

    let mut end = sign_len(bytes, 0);
    let whole = digits_len(bytes, end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_len(bytes, end + 1);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(bytes, end + 1);
        let exp_digits = digits_len(bytes, end + 1 + exp_sign);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    Some(&s[..end])
}

/// Parses the leading integer of `s`.
///
/// Returns `None` when there is no leading integer or it does not fit in `T`.
#[must_use]
pub fn parse_int<T: FromStr>(s: &str) -> Option<T> {
    int_prefix(s)?.parse().ok()
}

/// Parses the leading floating-point number of `s`.
///
/// Returns `None` when there is no leading number, or when it is out of range:
/// it overflows to infinity, or a nonzero mantissa underflows to zero.
#[must_use]
pub fn parse_float(s: &str) -> Option<f64> {
    let prefix = float_prefix(s)?;
    let value = prefix.parse::<f64>().ok()?;
    if !value.is_finite() || (value == 0.0 && has_nonzero_mantissa(prefix)) {
        return None;
    }
    Some(value)
}

fn has_nonzero_mantissa(prefix: &str) -> bool {
    prefix
        .bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

fn sign_len(bytes: &[u8], at: usize) -> usize {
    usize::from(matches!(bytes.get(at), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8], at: usize) -> usize {
    bytes
        .get(at..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix_truncation() {
        assert_eq!(parse_int::<i32>("19872634"), Some(19872634));
        assert_eq!(parse_int::<i32>("-38384849"), Some(-38384849));
        assert_eq!(parse_int::<i32>("-38384 849"), Some(-38384));
        assert_eq!(parse_int::<i32>("-38hvgf384849"), Some(-38));
        assert_eq!(parse_int::<i32>("3.4832"), Some(3));
        assert_eq!(parse_int::<i32>("+7x"), Some(7));
        assert_eq!(parse_int::<i32>("  42"), Some(42));
        assert_eq!(parse_int::<i32>("0"), Some(0));
    }

    #[test]
    fn test_int_prefix_rejects() {
        assert_eq!(parse_int::<i32>("true"), None);
        assert_eq!(parse_int::<i32>("-"), None);
        assert_eq!(parse_int::<i32>("- 5"), None);
        assert_eq!(parse_int::<i32>(""), None);
        assert_eq!(parse_int::<i32>(".5"), None);
    }

    #[test]
    fn test_int_out_of_range() {
        assert_eq!(parse_int::<i32>("2147483647"), Some(i32::MAX));
        assert_eq!(parse_int::<i32>("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_int::<i32>("2147483648"), None);
        assert_eq!(parse_int::<i64>("2147483648"), Some(2_147_483_648));
        assert_eq!(parse_int::<u8>("-1"), None);
    }

    #[test]
    fn test_float_prefix_truncation() {
        assert_eq!(parse_float("2.3937463876"), Some(2.3937463876));
        assert_eq!(parse_float("-276"), Some(-276.0));
        assert_eq!(parse_float("-27nmxcb6"), Some(-27.0));
        assert_eq!(parse_float("309e3"), Some(309000.0));
        assert_eq!(parse_float("0.0000"), Some(0.0));
        assert_eq!(parse_float("0.0000343 444\""), Some(0.0000343));
        assert_eq!(parse_float("1.5e-3x"), Some(0.0015));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-.25"), Some(-0.25));
    }

    #[test]
    fn test_float_exponent_without_digits_is_not_consumed() {
        assert_eq!(float_prefix("309e"), Some("309"));
        assert_eq!(float_prefix("309e+"), Some("309"));
        assert_eq!(float_prefix("1.2.3"), Some("1.2"));
        assert_eq!(float_prefix("7E-2 rest"), Some("7E-2"));
    }

    #[test]
    fn test_float_prefix_rejects() {
        assert_eq!(parse_float("true"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-."), None);
        assert_eq!(parse_float("e5"), None);
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("nan"), None);
        assert_eq!(parse_float("1e999"), None);
    }

    #[test]
    fn test_float_underflow_is_out_of_range() {
        assert_eq!(parse_float("1e-400"), None);
        assert_eq!(parse_float("-2.5e-999 tail"), None);
        assert_eq!(parse_float("0e-400"), Some(0.0));
        assert_eq!(parse_float("0.000e-999"), Some(0.0));
        assert_eq!(parse_float("1e-300"), Some(1e-300));
    }
}
