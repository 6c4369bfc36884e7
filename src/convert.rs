use crate::interval::{parse_interval, Interval};
use crate::unit::Unit;
use tracing::trace;

impl Interval {
    /// Express this interval in `target` units.
    ///
    /// Returns `None` only if the converted value overflows `f64`.
    pub fn to_unit(self, target: Unit) -> Option<Interval> {
        if target == self.unit() {
            return Some(self);
        }

        Interval::new(
            scale(self.value(), self.unit().millis(), target.millis()),
            target,
        )
    }

    /// Length of this interval in seconds.
    pub fn as_seconds(&self) -> f64 {
        scale(self.value(), self.unit().millis(), Unit::Second.millis())
    }
}

/// `value * from / to`, multiplying first so whole-unit conversions stay
/// exact. Falls back to the ratio when the product alone would overflow.
fn scale(value: f64, from: u64, to: u64) -> f64 {
    let (from, to) = (from as f64, to as f64);
    let scaled = value * from / to;
    if scaled.is_finite() {
        scaled
    } else {
        value * (from / to)
    }
}

/// Convert an interval string such as "30m" into `target_unit` ("h").
///
/// Returns `None` when the input does not parse or `target_unit` is not a
/// known unit symbol.
pub fn convert_interval_to_unit(input: &str, target_unit: &str) -> Option<Interval> {
    let interval = parse_interval(input)?;
    let target = Unit::from_symbol(target_unit)?;

    let converted = interval.to_unit(target);
    trace!(
        "Converted {:?} to {:?}: {:?}",
        input,
        target_unit,
        converted
    );
    converted
}
