use crate::cli::Output;
use intervals::{Interval, Result};
use tracing::debug;

pub fn execute_parse(input: &str, output: Output) -> Result<()> {
    let interval: Interval = input.parse()?;
    debug!(
        "Parsed {:?}: {} {} ({}s)",
        input,
        interval.value(),
        interval.unit().name(),
        interval.as_seconds()
    );

    output.emit(&interval, || {
        format!("{} {}", interval.value(), interval.unit())
    })
}
