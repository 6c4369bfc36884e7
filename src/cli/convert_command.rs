use crate::cli::Output;
use intervals::{Interval, IntervalError, Result, Unit};

pub fn execute_convert(input: &str, target: &str, output: Output) -> Result<()> {
    let interval: Interval = input.parse()?;
    let unit: Unit = target.parse()?;

    let converted = interval
        .to_unit(unit)
        .ok_or_else(|| IntervalError::InvalidDuration {
            input: input.to_string(),
            message: format!("too large to express in {}s", unit.name()),
        })?;

    output.emit(&converted, || converted.to_string())
}
