//! Picking a display unit for an arbitrary duration.
//!
//! The selection is a threshold scan from the largest unit down: the first
//! unit that fits at least once wins. Nothing is rounded up across a unit
//! boundary, so 29 days is shown in weeks and 366 days in years.

use crate::interval::Interval;
use crate::unit::Unit;
use tracing::trace;

/// The coarsest unit that fits into `total_seconds` at least once.
///
/// Negative and NaN durations have no suitable unit. Durations shorter than
/// one millisecond, including zero, report milliseconds.
pub fn get_suitable_unit(total_seconds: f64) -> Option<Unit> {
    if total_seconds.is_nan() || total_seconds < 0.0 {
        return None;
    }

    let unit = Unit::DESCENDING
        .into_iter()
        .find(|unit| total_seconds / unit.seconds() >= 1.0)
        .unwrap_or(Unit::Millisecond);

    trace!("Suitable unit for {}s: {}", total_seconds, unit);
    Some(unit)
}

/// `total_seconds` expressed in its suitable unit, e.g. 172800 -> `2d`.
pub fn suitable_interval(total_seconds: f64) -> Option<Interval> {
    let unit = get_suitable_unit(total_seconds)?;
    Interval::new(total_seconds, Unit::Second)?.to_unit(unit)
}
