use crate::interval::Interval;
use crate::suitable::get_suitable_unit;
use serde::Serialize;
use tracing::debug;

/// A histogram bucket width chosen for a time range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketSize {
    /// Bucket width as a whole number of its suitable unit.
    pub interval: Interval,
    /// Bucket width in seconds.
    pub seconds: f64,
    /// Number of buckets needed to cover the range.
    pub buckets: u64,
}

/// Size buckets so that `range_seconds` is covered by at most `max_buckets`.
///
/// The raw width `range_seconds / max_buckets` is expressed in its suitable
/// unit and rounded up to a whole count of that unit. Widths and counts are
/// computed in whole milliseconds, so the budget holds exactly. Returns `None`
/// for an empty, negative or non-finite range, a range too long to count in
/// `u64` milliseconds, or a zero bucket budget.
pub fn calculate_bucket_size(range_seconds: f64, max_buckets: u64) -> Option<BucketSize> {
    if !range_seconds.is_finite() || range_seconds <= 0.0 || max_buckets == 0 {
        return None;
    }

    // Ranges shorter than a millisecond still get one millisecond bucket.
    let range_ms = (range_seconds * 1_000.0).round().max(1.0);
    if range_ms >= u64::MAX as f64 {
        return None;
    }
    let range_ms = range_ms as u64;

    let raw_ms = range_ms.div_ceil(max_buckets);
    let unit = get_suitable_unit(raw_ms as f64 / 1_000.0)?;
    let count = raw_ms.div_ceil(unit.millis());
    let width_ms = count.checked_mul(unit.millis())?;
    let buckets = range_ms.div_ceil(width_ms);

    let interval = Interval::new(count as f64, unit)?;
    let seconds = width_ms as f64 / 1_000.0;

    debug!(
        "Bucket size for {}s over {} bucket(s): {} ({} bucket(s))",
        range_seconds, max_buckets, interval, buckets
    );

    Some(BucketSize {
        interval,
        seconds,
        buckets,
    })
}
