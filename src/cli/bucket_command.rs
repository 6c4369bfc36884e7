use crate::cli::Output;
use intervals::{calculate_bucket_size, Interval, IntervalError, Result};

pub fn execute_bucket(range: &str, max_buckets: u64, output: Output) -> Result<()> {
    if max_buckets == 0 {
        return Err(IntervalError::InvalidBucketCount(max_buckets));
    }

    let range_interval: Interval = range.parse()?;
    let size = calculate_bucket_size(range_interval.as_seconds(), max_buckets).ok_or_else(|| {
        IntervalError::InvalidDuration {
            input: range.to_string(),
            message: "range must be longer than zero and shorter than 500 million years".to_string(),
        }
    })?;

    output.emit(&size, || {
        format!("{} ({} buckets)", size.interval, size.buckets)
    })
}
