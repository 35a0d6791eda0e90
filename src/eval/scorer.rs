//! Scorers turning predictions into a quality report

use super::classification::{ClassificationReport, ScoreKey};
use std::collections::BTreeSet;
use thiserror::Error;

/// Failures raised while scoring predictions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Nothing to score.
    #[error("no labels to score")]
    EmptyInput,

    /// Expected and predicted label counts differ.
    #[error("{expected} expected labels but {predicted} predictions")]
    LengthMismatch { expected: usize, predicted: usize },

    /// A predicted label never occurs in the ground truth (strict mode).
    #[error("predicted label {label} does not occur in the expected labels")]
    UnknownPredictedLabel { label: usize },

    /// The selected figure came out NaN or infinite.
    #[error("{key} is not a finite number")]
    NonFinite { key: ScoreKey },

    /// The selected figure lies outside `[0, 1]`.
    #[error("{key} = {score} lies outside [0, 1]")]
    OutOfRange { key: ScoreKey, score: f64 },
}

/// Computes a quality report from expected vs. predicted labels.
pub trait Scorer {
    /// Key of the scalar the harness records as the quality score.
    fn quality_key(&self) -> ScoreKey {
        ScoreKey::MicroF1
    }

    /// Score `predicted` against `expected`.
    fn score(&self, expected: &[usize], predicted: &[usize])
        -> Result<ClassificationReport, MetricError>;
}

/// sklearn-style classification scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationScorer {
    key: ScoreKey,
    strict_labels: bool,
}

impl ClassificationScorer {
    /// Scorer reporting `key` as its quality figure.
    pub fn new(key: ScoreKey) -> Self {
        Self { key, strict_labels: false }
    }

    /// Accuracy scorer.
    pub fn accuracy() -> Self {
        Self::new(ScoreKey::Accuracy)
    }

    /// Reject predictions using labels absent from the ground truth.
    pub fn strict_labels(mut self, strict: bool) -> Self {
        self.strict_labels = strict;
        self
    }
}

impl Scorer for ClassificationScorer {
    fn quality_key(&self) -> ScoreKey {
        self.key
    }

    fn score(
        &self,
        expected: &[usize],
        predicted: &[usize],
    ) -> Result<ClassificationReport, MetricError> {
        if expected.len() != predicted.len() {
            return Err(MetricError::LengthMismatch {
                expected: expected.len(),
                predicted: predicted.len(),
            });
        }
        if expected.is_empty() {
            return Err(MetricError::EmptyInput);
        }

        if self.strict_labels {
            let known: BTreeSet<usize> = expected.iter().copied().collect();
            if let Some(&label) = predicted.iter().find(|&&l| !known.contains(&l)) {
                return Err(MetricError::UnknownPredictedLabel { label });
            }
        }

        let report = ClassificationReport::from_predictions(predicted, expected);
        if !report.score(self.key).is_finite() {
            return Err(MetricError::NonFinite { key: self.key });
        }
        Ok(report)
    }
}
