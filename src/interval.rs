use crate::error::{IntervalError, Result};
use crate::unit::Unit;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A non-negative, finite amount of a single [`Unit`], e.g. `30m` or `0.5d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    value: f64,
    unit: Unit,
}

impl Interval {
    /// Returns `None` for negative, NaN or infinite values.
    pub fn new(value: f64, unit: Unit) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            Some(Self { value, unit })
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

/// Parse an interval string like "30m", "0.5d", "10ms" or "2M".
///
/// The number must be unsigned (`1`, `134`, `0.5`) and immediately followed
/// by exactly one unit symbol. Anything else yields `None`.
pub fn parse_interval(input: &str) -> Option<Interval> {
    let parsed = split_unit(input)
        .and_then(|(number, unit)| parse_number(number).map(|value| (value, unit)))
        .and_then(|(value, unit)| Interval::new(value, unit));

    match &parsed {
        Some(interval) => trace!("Parsed interval {:?} as {:?}", input, interval),
        None => trace!("Rejected interval {:?}", input),
    }

    parsed
}

/// Split the trailing unit symbol off, preferring the two-letter `ms`.
fn split_unit(input: &str) -> Option<(&str, Unit)> {
    if let Some(stripped) = input.strip_suffix("ms") {
        return Some((stripped, Unit::Millisecond));
    }

    let last = input.chars().next_back()?;
    let (number, symbol) = input.split_at(input.len() - last.len_utf8());
    Unit::from_symbol(symbol).map(|unit| (number, unit))
}

/// Digits, optionally followed by a dot and more digits. No sign or exponent.
fn parse_number(number: &str) -> Option<f64> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }

    number.parse().ok()
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        parse_interval(s).ok_or_else(|| IntervalError::invalid_interval(s))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(value: f64, unit: Unit) -> Option<Interval> {
        Interval::new(value, unit)
    }

    #[test]
    fn test_parses_integer_and_decimal_values() {
        assert_eq!(parse_interval("1m"), interval(1.0, Unit::Minute));
        assert_eq!(parse_interval("134d"), interval(134.0, Unit::Day));
        assert_eq!(parse_interval("0.5d"), interval(0.5, Unit::Day));
        assert_eq!(parse_interval("30M"), interval(30.0, Unit::Month));
    }

    #[test]
    fn test_ms_is_not_read_as_seconds() {
        assert_eq!(parse_interval("10ms"), interval(10.0, Unit::Millisecond));
        assert_eq!(parse_interval("10s"), interval(10.0, Unit::Second));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in [
            "", "gm", "M", "ms", "1", "-1d", "+1d", " 1d", "1d ", "1 d", "1dd", "1.d", ".5d",
            "1..5d", "1.5.2d", "1e3s", "1x", "1D", "NaNs", "infd", "1é",
        ] {
            assert_eq!(parse_interval(input), None, "{input:?} should not parse");
        }
    }

    #[test]
    fn test_rejects_values_that_overflow() {
        let huge = format!("{}s", "9".repeat(400));
        assert_eq!(parse_interval(&huge), None);
    }

    #[test]
    fn test_new_rejects_negative_and_non_finite() {
        assert!(Interval::new(-1.0, Unit::Day).is_none());
        assert!(Interval::new(f64::NAN, Unit::Day).is_none());
        assert!(Interval::new(f64::INFINITY, Unit::Day).is_none());
        assert!(Interval::new(0.0, Unit::Day).is_some());
    }

    #[test]
    fn test_display_matches_input_form() {
        assert_eq!(parse_interval("0.5d").unwrap().to_string(), "0.5d");
        assert_eq!(parse_interval("30M").unwrap().to_string(), "30M");
        assert_eq!(parse_interval("10ms").unwrap().to_string(), "10ms");
    }

    #[test]
    fn test_from_str_error_quotes_input() {
        let err = "gm".parse::<Interval>().unwrap_err();
        assert!(matches!(err, IntervalError::InvalidInterval { .. }));
        assert!(err.to_string().contains("'gm'"));
    }

    #[test]
    fn test_serializes_value_and_unit() {
        let json = serde_json::to_value(parse_interval("0.5d").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "value": 0.5, "unit": "d" }));
    }
}
