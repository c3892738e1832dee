//! Positional-numeral bridge.
//!
//! Rule text hands values to this collaborator through numeral escapes such
//! as `=#,##0=`, `<0<` or `<##0.###<`. The engine only stores the parsed
//! [`NumeralPattern`] and calls into a [`NumeralBridge`]; all digit grouping
//! and decimal rendering lives behind the trait. [`DecimalBridge`] is the
//! built-in implementation (`,` grouping separator, `.` decimal point).

use crate::error::BridgeError;
use std::fmt;
use std::str::FromStr;

/// A compiled `#,##0.###`-style pattern.
///
/// Supported characters are `#` (optional digit), `0` (required digit), `,`
/// (grouping separator in the integer part) and a single `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralPattern {
    source: String,
    min_integer_digits: usize,
    grouping: Option<usize>,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
}

impl NumeralPattern {
    /// Parse a pattern such as `#,##0`, `00` or `##0.###`.
    pub fn parse(pattern: &str) -> Result<Self, BridgeError> {
        let caps = regex!(r"^([#0,]*[#0])(?:\.([#0]+))?$")
            .captures(pattern)
            .ok_or_else(|| BridgeError::InvalidPattern(pattern.to_string()))?;
        let integer = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map_or("", |m| m.as_str());

        Ok(Self {
            source: pattern.to_string(),
            min_integer_digits: integer.chars().filter(|&c| c == '0').count(),
            grouping: integer.rfind(',').map(|at| integer[at + 1..].len()),
            min_fraction_digits: fraction.chars().filter(|&c| c == '0').count(),
            max_fraction_digits: fraction.len(),
        })
    }

    /// The pattern text as written in the rule.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn min_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    /// Size of a digit group, if the pattern groups at all.
    pub fn grouping(&self) -> Option<usize> {
        self.grouping
    }

    pub fn min_fraction_digits(&self) -> usize {
        self.min_fraction_digits
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// True when the pattern can show fraction digits.
    pub fn keeps_fraction(&self) -> bool {
        self.max_fraction_digits > 0
    }
}

impl FromStr for NumeralPattern {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NumeralPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Standard positional-numeral formatting and parsing, injected into the
/// engine through [`Context`](crate::Context).
pub trait NumeralBridge: Send + Sync {
    /// Render `value` according to `pattern`.
    fn format_numeral(&self, value: f64, pattern: &NumeralPattern) -> Result<String, BridgeError>;

    /// Read a numeral from the start of `text`.
    ///
    /// Returns the value and the number of bytes consumed, or `None` when
    /// `text` does not start with a numeral.
    fn parse_numeral(&self, text: &str, pattern: &NumeralPattern) -> Option<(f64, usize)>;
}

/// Built-in bridge using `,` for grouping and `.` as the decimal point.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalBridge;

impl NumeralBridge for DecimalBridge {
    fn format_numeral(&self, value: f64, pattern: &NumeralPattern) -> Result<String, BridgeError> {
        if !value.is_finite() {
            return Err(BridgeError::NonFinite(value));
        }

        let rendered = format!("{:.*}", pattern.max_fraction_digits, value.abs());
        let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let fraction = trim_fraction(fraction, pattern.min_fraction_digits);

        let integer = if integer == "0" && pattern.min_integer_digits == 0 && !fraction.is_empty() {
            String::new()
        } else if integer.len() < pattern.min_integer_digits {
            format!("{}{}", "0".repeat(pattern.min_integer_digits - integer.len()), integer)
        } else {
            integer.to_string()
        };

        let mut out = String::with_capacity(rendered.len() + 8);
        if value < 0.0 && rendered.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            out.push('-');
        }
        out.push_str(&group_digits(&integer, pattern.grouping));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        Ok(out)
    }

    fn parse_numeral(&self, text: &str, pattern: &NumeralPattern) -> Option<(f64, usize)> {
        let integer =
            if pattern.grouping.is_some() { regex!(r"^-?\d+(?:,\d+)*") } else { regex!(r"^-?\d+") }.find(text)?;

        let mut end = integer.end();
        if pattern.keeps_fraction() {
            if let Some(fraction) = regex!(r"^\.\d+").find(&text[end..]) {
                end += fraction.end();
            }
        }

        let digits: String = text[..end].chars().filter(|&c| c != ',').collect();
        let value = digits.parse::<f64>().ok()?;
        Some((value, end))
    }
}

/// Drop trailing zeros past the pattern's required fraction digits.
fn trim_fraction(fraction: &str, min_digits: usize) -> &str {
    let mut end = fraction.len();
    while end > min_digits && fraction.as_bytes()[end - 1] == b'0' {
        end -= 1;
    }
    &fraction[..end]
}

fn group_digits(digits: &str, size: Option<usize>) -> String {
    let Some(size) = size.filter(|&s| s > 0) else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
