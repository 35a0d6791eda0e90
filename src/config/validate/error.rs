//! Validation error types
//!
//! Defines all validation error variants for benchmark specifications.

use crate::error::BenchError;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid repeats: {0} (must be >= 1)")]
    InvalidRepeats(usize),

    #[error("Invalid gamma: {0} (must be > 0.0 and <= 1.0)")]
    InvalidGamma(f64),

    #[error("Invalid sample count: {0} (must be >= 2)")]
    TooFewSamples(usize),

    #[error("Invalid noise: {0} (must be finite and >= 0.0)")]
    InvalidNoise(f64),

    #[error("Invalid split fraction: {0} (must be in (0.0, 1.0))")]
    InvalidSplitFraction(f64),

    #[error("Invalid split index: {index} (must be in [1, {samples}))")]
    InvalidSplitIndex { index: usize, samples: usize },
}

impl From<ValidationError> for BenchError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidRepeats(repeats) => Self::InvalidRepeatCount { repeats },
            other => Self::Config { message: other.to_string() },
        }
    }
}
