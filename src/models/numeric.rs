//! Lenient numeric reads over raw form text.
//!
//! Profile and vitals values arrive exactly as typed. The engine reads the
//! leading numeric prefix and falls back to zero, so blank or garbled input
//! lowers a score instead of failing it.

use std::sync::LazyLock;

use regex::Regex;

static RE_LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());
static RE_LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Leading integer of `text`, or `None` when there is none.
/// `"145.9"` reads as 145, `"12abc"` as 12. Digits beyond the `i64`
/// range saturate toward the sign of the number.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let caps = RE_LEADING_INT.captures(text)?;
    let digits = caps.get(1)?.as_str();
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Leading decimal number of `text`, or `None` when there is none.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let caps = RE_LEADING_FLOAT.captures(text)?;
    caps.get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn parse_int_or_zero(text: &str) -> i64 {
    parse_leading_int(text).unwrap_or(0)
}

pub fn parse_float_or_zero(text: &str) -> f64 {
    parse_leading_float(text).unwrap_or(0.0)
}

/// A value is present when the user typed anything at all.
pub fn is_present(text: &str) -> bool {
    !text.trim().is_empty()
}
