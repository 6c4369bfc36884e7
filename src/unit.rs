//! The closed set of interval units and their lengths.
//!
//! Month and year use fixed lengths (30 and 365 days). They exist for sizing
//! display buckets, not for calendar arithmetic.

use crate::error::{IntervalError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A time unit, ordered by magnitude (`Millisecond < Second < ... < Year`).
///
/// Symbols are case-sensitive: `m` is a minute and `M` is a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "ms")]
    Millisecond,
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "m")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "M")]
    Month,
    #[serde(rename = "y")]
    Year,
}

impl Unit {
    /// All units, largest first.
    pub const DESCENDING: [Unit; 8] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    const MILLIS_PER_SECOND: u64 = 1_000;
    const MILLIS_PER_MINUTE: u64 = 60 * Self::MILLIS_PER_SECOND;
    const MILLIS_PER_HOUR: u64 = 60 * Self::MILLIS_PER_MINUTE;
    const MILLIS_PER_DAY: u64 = 24 * Self::MILLIS_PER_HOUR;
    const MILLIS_PER_WEEK: u64 = 7 * Self::MILLIS_PER_DAY;
    const MILLIS_PER_MONTH: u64 = 30 * Self::MILLIS_PER_DAY;
    const MILLIS_PER_YEAR: u64 = 365 * Self::MILLIS_PER_DAY;

    /// Length of one unit in whole milliseconds.
    pub const fn millis(self) -> u64 {
        match self {
            Unit::Millisecond => 1,
            Unit::Second => Self::MILLIS_PER_SECOND,
            Unit::Minute => Self::MILLIS_PER_MINUTE,
            Unit::Hour => Self::MILLIS_PER_HOUR,
            Unit::Day => Self::MILLIS_PER_DAY,
            Unit::Week => Self::MILLIS_PER_WEEK,
            Unit::Month => Self::MILLIS_PER_MONTH,
            Unit::Year => Self::MILLIS_PER_YEAR,
        }
    }

    /// Length of one unit in seconds.
    pub fn seconds(self) -> f64 {
        self.millis() as f64 / Self::MILLIS_PER_SECOND as f64
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "M",
            Unit::Year => "y",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Exact symbol lookup, no case folding.
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        match symbol {
            "ms" => Some(Unit::Millisecond),
            "s" => Some(Unit::Second),
            "m" => Some(Unit::Minute),
            "h" => Some(Unit::Hour),
            "d" => Some(Unit::Day),
            "w" => Some(Unit::Week),
            "M" => Some(Unit::Month),
            "y" => Some(Unit::Year),
            _ => None,
        }
    }
}

/// Seconds per unit for a symbol, or `None` if the symbol is not a unit.
pub fn seconds_per_unit(symbol: &str) -> Option<f64> {
    Unit::from_symbol(symbol).map(Unit::seconds)
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::from_symbol(s).ok_or_else(|| IntervalError::unknown_unit(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_lengths() {
        assert_eq!(seconds_per_unit("ms"), Some(0.001));
        assert_eq!(seconds_per_unit("s"), Some(1.0));
        assert_eq!(seconds_per_unit("m"), Some(60.0));
        assert_eq!(seconds_per_unit("h"), Some(3600.0));
        assert_eq!(seconds_per_unit("d"), Some(86400.0));
        assert_eq!(seconds_per_unit("w"), Some(604800.0));
        assert_eq!(seconds_per_unit("M"), Some(2592000.0));
        assert_eq!(seconds_per_unit("y"), Some(31536000.0));
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!(Unit::from_symbol("m"), Some(Unit::Minute));
        assert_eq!(Unit::from_symbol("M"), Some(Unit::Month));
        assert_eq!(Unit::from_symbol("H"), None);
        assert_eq!(Unit::from_symbol("MS"), None);
        assert_eq!(seconds_per_unit("o"), None);
        assert_eq!(seconds_per_unit(""), None);
    }

    #[test]
    fn test_descending_is_sorted_by_magnitude() {
        for pair in Unit::DESCENDING.windows(2) {
            assert!(pair[0].seconds() > pair[1].seconds());
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_symbol_round_trips_through_from_str() {
        for unit in Unit::DESCENDING {
            assert_eq!(unit.symbol().parse::<Unit>().unwrap(), unit);
            assert_eq!(unit.to_string(), unit.symbol());
        }
    }

    #[test]
    fn test_unknown_unit_error_names_input() {
        let err = "x".parse::<Unit>().unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Unit::Month).unwrap(), "\"M\"");
        assert_eq!(serde_json::to_string(&Unit::Minute).unwrap(), "\"m\"");
    }
}
