use crate::cli::Output;
use intervals::{suitable_interval, IntervalError, Result};

pub fn execute_suitable(input: &str, output: Output) -> Result<()> {
    let seconds: f64 = input
        .trim()
        .parse()
        .map_err(|_| IntervalError::InvalidDuration {
            input: input.to_string(),
            message: "expected a number of seconds (e.g., '3600', '0.5')".to_string(),
        })?;

    let interval = suitable_interval(seconds).ok_or_else(|| IntervalError::InvalidDuration {
        input: input.to_string(),
        message: "must be a finite, non-negative number of seconds".to_string(),
    })?;

    output.emit(&interval, || {
        format!("{} {}", interval.unit(), interval.value())
    })
}
