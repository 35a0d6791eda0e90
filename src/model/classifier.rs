//! Classifier contract used by the harness

use thiserror::Error;

/// Failures raised by a classifier.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// `fit` was given no samples.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Feature and label counts differ.
    #[error("{features} feature rows but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    /// A row's dimension differs from the one seen during fit.
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// `predict` was called before `fit`.
    #[error("classifier has not been fitted")]
    NotFitted,

    /// `predict` returned a different number of labels than rows it was given.
    #[error("predicted {actual} labels for {expected} rows")]
    PredictionLength { expected: usize, actual: usize },

    /// Any other model-specific failure.
    #[error("{0}")]
    Other(String),
}

/// A trainable classifier.
///
/// Instances are single-use from the harness' point of view: every trial
/// builds a fresh one, fits it once and predicts once.
pub trait Classifier {
    /// Train on feature rows and their labels.
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError>;

    /// Predict one label per feature row.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError>;

    /// Short human-readable name.
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        (**self).fit(features, labels)
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Produces a fresh, untrained classifier for each trial.
///
/// Any `Fn() -> C` closure is a factory.
pub trait ClassifierFactory {
    /// Classifier type produced
    type Model: Classifier;

    /// Build a new untrained instance.
    fn create(&self) -> Self::Model;
}

impl<F, C> ClassifierFactory for F
where
    F: Fn() -> C,
    C: Classifier,
{
    type Model = C;

    fn create(&self) -> C {
        self()
    }
}

/// Validate the inputs to `fit` and return the feature dimension.
pub(crate) fn check_training_shape(
    features: &[Vec<f64>],
    labels: &[usize],
) -> Result<usize, ModelError> {
    if features.len() != labels.len() {
        return Err(ModelError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }
    let Some(first) = features.first() else {
        return Err(ModelError::EmptyTrainingSet);
    };
    let dim = first.len();
    check_dimensions(features, dim)?;
    Ok(dim)
}

/// Ensure every row has `expected` features.
pub(crate) fn check_dimensions(features: &[Vec<f64>], expected: usize) -> Result<(), ModelError> {
    match features.iter().find(|row| row.len() != expected) {
        Some(row) => Err(ModelError::DimensionMismatch { expected, actual: row.len() }),
        None => Ok(()),
    }
}
