//! Numeric literals and the number type shared by comparison rules.
//!
//! The accepted literal grammar is
//!
//! ```text
//! WS* [+-]? ( DIGITS ( "." DIGITS? )? | "." DIGITS ) ( [eE] [+-]? DIGITS )? WS*
//! ```
//!
//! where `WS` is ASCII whitespace. Hexadecimal (`0xff`), binary, `inf` and
//! `nan` spellings are not numeric.

use std::cmp::Ordering;

/// A parsed number, kept integral when the literal has no fraction or exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Lossy conversion to `f64`.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// True when the number has no fractional component.
    #[must_use]
    pub fn is_integral(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite() && f.trunc() == f,
        }
    }

    /// Numeric equality; integer pairs compare exactly.
    #[must_use]
    pub fn num_eq(self, other: Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Numeric ordering; `None` when a NaN is involved.
    #[must_use]
    pub fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

/// Parses a numeric literal, returning `None` for anything outside the grammar.
///
/// ```
/// use nebula_verifier::value::{Number, parse_numeric};
///
/// assert_eq!(parse_numeric("-123"), Some(Number::Int(-123)));
/// assert_eq!(parse_numeric(" 3.14 "), Some(Number::Float(3.14)));
/// assert_eq!(parse_numeric("1e3"), Some(Number::Float(1000.0)));
/// assert_eq!(parse_numeric("0xff"), None);
/// ```
#[must_use]
pub fn parse_numeric(input: &str) -> Option<Number> {
    let literal = input.trim_matches(|c: char| c.is_ascii_whitespace());
    let bytes = literal.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    let mut integral = true;
    if bytes.get(pos) == Some(&b'.') {
        integral = false;
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        integral = false;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }

    if pos != bytes.len() {
        return None;
    }

    if integral && let Ok(i) = literal.parse::<i64>() {
        return Some(Number::Int(i));
    }
    literal.parse::<f64>().ok().map(Number::Float)
}

/// True when `input` is a numeric literal.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    parse_numeric(input).is_some()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
