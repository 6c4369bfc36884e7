mod types;

pub use types::{IntervalError, Result};

// Re-export for convenience
pub use IntervalError as Error;
