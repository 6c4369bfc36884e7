use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntervalError {
    #[error("Invalid interval '{input}': expected format NUMBER UNIT with no spaces (e.g., '30m', '0.5d', '10ms')")]
    InvalidInterval { input: String },

    #[error("Unknown unit '{input}': expected one of ms, s, m, h, d, w, M, y")]
    UnknownUnit { input: String },

    #[error("Invalid duration '{input}': {message}")]
    InvalidDuration { input: String, message: String },

    #[error("Invalid bucket count {0}: must be at least 1")]
    InvalidBucketCount(u64),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntervalError {
    /// Every failure is an input problem; usage errors exit with 2 from clap itself.
    pub fn exit_code(&self) -> i32 {
        match self {
            IntervalError::InvalidInterval { .. }
            | IntervalError::UnknownUnit { .. }
            | IntervalError::InvalidDuration { .. }
            | IntervalError::InvalidBucketCount(_)
            | IntervalError::Json(_) => 1,
        }
    }

    pub fn invalid_interval(input: impl Into<String>) -> Self {
        IntervalError::InvalidInterval {
            input: input.into(),
        }
    }

    pub fn unknown_unit(input: impl Into<String>) -> Self {
        IntervalError::UnknownUnit {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;
