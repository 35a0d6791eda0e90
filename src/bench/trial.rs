//! Single-trial runner: one timed fit, one timed predict, one score.

use crate::data::SampleSet;
use crate::error::{BenchError, Result, TrialPhase};
use crate::eval::{ClassificationReport, MetricError, ScoreKey, Scorer};
use crate::model::{Classifier, ClassifierFactory, ModelError};
use std::time::{Duration, Instant};

/// Measurements of one trial. Immutable once built.
#[derive(Debug, Clone)]
pub struct TrialResult {
    model_name: String,
    training_duration: Duration,
    prediction_duration: Duration,
    quality_key: ScoreKey,
    quality_score: f64,
    report: ClassificationReport,
}

impl TrialResult {
    /// Name reported by the classifier
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Wall-clock time of the `fit` call
    pub fn training_duration(&self) -> Duration {
        self.training_duration
    }

    /// Wall-clock time of the `predict` call
    pub fn prediction_duration(&self) -> Duration {
        self.prediction_duration
    }

    /// Training time in seconds
    pub fn training_secs(&self) -> f64 {
        self.training_duration.as_secs_f64()
    }

    /// Prediction time in seconds
    pub fn prediction_secs(&self) -> f64 {
        self.prediction_duration.as_secs_f64()
    }

    /// Key of the recorded quality figure
    pub fn quality_key(&self) -> ScoreKey {
        self.quality_key
    }

    /// Quality figure in `[0, 1]`
    pub fn quality_score(&self) -> f64 {
        self.quality_score
    }

    /// Full structured report
    pub fn report(&self) -> &ClassificationReport {
        &self.report
    }

    /// Report rendered as sklearn-style text
    pub fn report_text(&self) -> String {
        self.report.to_string()
    }
}

/// Run one trial against a fresh classifier from `factory`.
///
/// Only the `fit` and `predict` calls are timed, on the monotonic clock.
///
/// # Errors
/// - [`BenchError::DataShape`] if the sample set breaks its shape invariants
/// - [`BenchError::Classifier`] if `fit` or `predict` fails, or `predict`
///   returns the wrong number of labels
/// - [`BenchError::Metric`] if the scorer fails or its score is not a
///   finite value in `[0, 1]`
pub fn run_trial<F, S>(sample_set: &SampleSet, factory: &F, scorer: &S) -> Result<TrialResult>
where
    F: ClassifierFactory + ?Sized,
    S: Scorer + ?Sized,
{
    sample_set.validate()?;
    let training = sample_set.training();
    let evaluation = sample_set.evaluation();

    let mut classifier = factory.create();

    let start = Instant::now();
    classifier
        .fit(training.features, training.labels)
        .map_err(|e| BenchError::classifier(TrialPhase::Fit, e))?;
    let training_duration = start.elapsed();

    let start = Instant::now();
    let predicted = classifier
        .predict(evaluation.features)
        .map_err(|e| BenchError::classifier(TrialPhase::Predict, e))?;
    let prediction_duration = start.elapsed();

    if predicted.len() != evaluation.len() {
        return Err(BenchError::classifier(
            TrialPhase::Predict,
            ModelError::PredictionLength { expected: evaluation.len(), actual: predicted.len() },
        ));
    }

    let report = scorer.score(evaluation.labels, &predicted)?;
    let quality_key = scorer.quality_key();
    let quality_score = report.score(quality_key);
    if !quality_score.is_finite() {
        return Err(MetricError::NonFinite { key: quality_key }.into());
    }
    if !(0.0..=1.0).contains(&quality_score) {
        return Err(MetricError::OutOfRange { key: quality_key, score: quality_score }.into());
    }

    Ok(TrialResult {
        model_name: classifier.name().to_string(),
        training_duration,
        prediction_duration,
        quality_key,
        quality_score,
        report,
    })
}
