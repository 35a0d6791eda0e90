//! Error types with actionable diagnostics.
//!
//! Every failure the harness can surface maps to one [`BenchError`] variant.
//! Nothing is retried and no partial result is ever returned: a single failed
//! trial fails the whole benchmarking run.

use crate::eval::MetricError;
use crate::model::ModelError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Phase of a trial in which the classifier failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    /// `fit` on the training partition
    Fit,
    /// `predict` on the evaluation partition
    Predict,
}

impl fmt::Display for TrialPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit => write!(f, "fit"),
            Self::Predict => write!(f, "predict"),
        }
    }
}

/// Errors that can occur while benchmarking a classifier.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Feature/label shapes disagree or a partition is empty.
    #[error("Data shape error: {message}\n  → Check that features and labels have the same length and both partitions are non-empty")]
    DataShape { message: String },

    /// The pluggable classifier failed during fit or predict.
    #[error("Classifier failed during {phase}: {source}")]
    Classifier {
        phase: TrialPhase,
        #[source]
        source: ModelError,
    },

    /// The scorer could not reduce predictions to a score.
    #[error("Metric error: {0}")]
    Metric(#[from] MetricError),

    /// Repeat count below one.
    #[error("Invalid repeat count: {repeats}\n  → Use --repeats with a value of at least 1")]
    InvalidRepeatCount { repeats: usize },

    /// Configuration is missing or invalid.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be read.
    #[error("Configuration file not found or unreadable: {path}\n  Cause: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result rendering failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl BenchError {
    /// Create a data shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::DataShape { message: message.into() }
    }

    /// Wrap a classifier failure with the phase it happened in.
    pub fn classifier(phase: TrialPhase, source: ModelError) -> Self {
        Self::Classifier { phase, source }
    }

    /// Create an IO error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Check if this error is a caller mistake rather than a harness fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DataShape { .. }
                | Self::InvalidRepeatCount { .. }
                | Self::Config { .. }
                | Self::Io { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::DataShape { .. } => "E010",
            Self::Classifier { .. } => "E020",
            Self::Metric(_) => "E030",
            Self::InvalidRepeatCount { .. } => "E040",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_variants() -> Vec<BenchError> {
        vec![
            BenchError::shape("mismatch"),
            BenchError::classifier(TrialPhase::Fit, ModelError::EmptyTrainingSet),
            BenchError::Metric(MetricError::EmptyInput),
            BenchError::InvalidRepeatCount { repeats: 0 },
            BenchError::Config { message: "bad".into() },
            BenchError::io(
                "bench.yaml",
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            ),
            BenchError::Serialization { message: "bad json".into() },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errors = all_variants();
        let codes: HashSet<_> = errors.iter().map(BenchError::code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|c| c.starts_with('E')));
    }

    #[test]
    fn test_repeat_count_message_is_actionable() {
        let msg = BenchError::InvalidRepeatCount { repeats: 0 }.to_string();
        assert!(msg.contains('0'));
        assert!(msg.contains("--repeats"));
    }

    #[test]
    fn test_classifier_error_names_phase() {
        let err = BenchError::classifier(TrialPhase::Predict, ModelError::NotFitted);
        let msg = err.to_string();
        assert!(msg.contains("predict"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_user_errors() {
        assert!(BenchError::shape("x").is_user_error());
        assert!(BenchError::InvalidRepeatCount { repeats: 0 }.is_user_error());
        assert!(!BenchError::Metric(MetricError::EmptyInput).is_user_error());
        assert!(!BenchError::classifier(TrialPhase::Fit, ModelError::NotFitted).is_user_error());
    }

    #[test]
    fn test_metric_error_converts() {
        fn fails() -> Result<()> {
            Err(MetricError::EmptyInput)?
        }
        assert!(matches!(fails(), Err(BenchError::Metric(MetricError::EmptyInput))));
    }
}
