//! Interval parsing, unit conversion and display-unit selection for time-series buckets

pub mod bucket;
pub mod convert;
pub mod error;
pub mod interval;
pub mod suitable;
pub mod unit;

pub use bucket::{calculate_bucket_size, BucketSize};
pub use convert::convert_interval_to_unit;
pub use error::{IntervalError, Result};
pub use interval::{parse_interval, Interval};
pub use suitable::{get_suitable_unit, suitable_interval};
pub use unit::{seconds_per_unit, Unit};
