//! Classification reports

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed key selecting one scalar from [`AggregateMetrics`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKey {
    /// Fraction of correctly classified samples
    Accuracy,
    /// F1 pooled over all classes
    #[default]
    MicroF1,
    /// Unweighted mean of per-class F1
    MacroF1,
    /// Support-weighted mean of per-class F1
    WeightedF1,
}

impl ScoreKey {
    /// Report-style name of the figure
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::MicroF1 => "micro avg f1-score",
            Self::MacroF1 => "macro avg f1-score",
            Self::WeightedF1 => "weighted avg f1-score",
        }
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScoreKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accuracy" => Ok(Self::Accuracy),
            "micro_f1" | "micro" => Ok(Self::MicroF1),
            "macro_f1" | "macro" => Ok(Self::MacroF1),
            "weighted_f1" | "weighted" => Ok(Self::WeightedF1),
            _ => Err(format!(
                "Unknown score key: {s}. Valid keys: accuracy, micro_f1, macro_f1, weighted_f1"
            )),
        }
    }
}

/// Metrics for a single class.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassReport {
    /// Class label
    pub label: usize,
    /// Precision
    pub precision: f64,
    /// Recall
    pub recall: f64,
    /// F1 score
    pub f1: f64,
    /// Number of true instances
    pub support: usize,
}

/// Precision, recall and F1 under one averaging strategy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AveragedScores {
    /// Averaged precision
    pub precision: f64,
    /// Averaged recall
    pub recall: f64,
    /// Averaged F1 score
    pub f1: f64,
    /// Total support
    pub support: usize,
}

impl AveragedScores {
    fn from_metrics(metrics: &MultiClassMetrics, average: Average) -> Self {
        Self {
            precision: metrics.precision_avg(average),
            recall: metrics.recall_avg(average),
            f1: metrics.f1_avg(average),
            support: metrics.total_support(),
        }
    }
}

/// Overall figures of a classification report.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AggregateMetrics {
    /// Fraction of correct predictions
    pub accuracy: f64,
    /// Micro-averaged scores
    pub micro: AveragedScores,
    /// Macro-averaged scores
    pub macro_avg: AveragedScores,
    /// Support-weighted scores
    pub weighted: AveragedScores,
}

impl AggregateMetrics {
    /// Scalar addressed by `key`
    pub fn get(&self, key: ScoreKey) -> f64 {
        match key {
            ScoreKey::Accuracy => self.accuracy,
            ScoreKey::MicroF1 => self.micro.f1,
            ScoreKey::MacroF1 => self.macro_avg.f1,
            ScoreKey::WeightedF1 => self.weighted.f1,
        }
    }
}

/// Per-class reports plus aggregate metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassificationReport {
    /// One entry per label occurring in predictions or ground truth
    pub per_class: Vec<ClassReport>,
    /// Overall figures
    pub aggregate: AggregateMetrics,
}

impl ClassificationReport {
    /// Build from a confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let metrics = MultiClassMetrics::from_confusion_matrix(cm);

        let per_class = (0..metrics.n_classes)
            .map(|i| ClassReport {
                label: metrics.labels[i],
                precision: metrics.precision[i],
                recall: metrics.recall[i],
                f1: metrics.f1[i],
                support: metrics.support[i],
            })
            .collect();

        Self {
            per_class,
            aggregate: AggregateMetrics {
                accuracy: cm.accuracy(),
                micro: AveragedScores::from_metrics(&metrics, Average::Micro),
                macro_avg: AveragedScores::from_metrics(&metrics, Average::Macro),
                weighted: AveragedScores::from_metrics(&metrics, Average::Weighted),
            },
        }
    }

    /// Build from predictions and ground truth
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        Self::from_confusion_matrix(&ConfusionMatrix::from_predictions(y_pred, y_true))
    }

    /// Scalar addressed by `key`
    pub fn score(&self, key: ScoreKey) -> f64 {
        self.aggregate.get(key)
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    precision: f64,
    recall: f64,
    f1: f64,
    support: usize,
) -> fmt::Result {
    writeln!(f, "{name:>12} {precision:>10.2} {recall:>10.2} {f1:>10.2} {support:>10}")
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>10} {:>10} {:>10} {:>10}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f, "{}", "-".repeat(54))?;

        for class in &self.per_class {
            write_row(
                f,
                &format!("Class {}", class.label),
                class.precision,
                class.recall,
                class.f1,
                class.support,
            )?;
        }

        writeln!(f, "{}", "-".repeat(54))?;

        let agg = &self.aggregate;
        for (name, s) in [
            ("micro avg", agg.micro),
            ("macro avg", agg.macro_avg),
            ("weighted avg", agg.weighted),
        ] {
            write_row(f, name, s.precision, s.recall, s.f1, s.support)?;
        }

        writeln!(f, "\nAccuracy: {:.4}", agg.accuracy)
    }
}

/// Compute confusion matrix from predictions and ground truth
///
/// # Example
/// ```
/// use trialbench::eval::confusion_matrix;
///
/// let y_pred = vec![0, 1, 1, 2, 0];
/// let y_true = vec![0, 1, 0, 2, 1];
/// let cm = confusion_matrix(&y_pred, &y_true);
///
/// assert_eq!(cm.get(0, 0), 1);  // True 0, predicted 0
/// assert_eq!(cm.get(0, 1), 1);  // True 0, predicted 1
/// ```
pub fn confusion_matrix(y_pred: &[usize], y_true: &[usize]) -> ConfusionMatrix {
    ConfusionMatrix::from_predictions(y_pred, y_true)
}

/// Generate sklearn-style classification report text
///
/// # Example
/// ```
/// use trialbench::eval::classification_report;
///
/// let report = classification_report(&[0, 1, 1], &[0, 1, 0]);
/// assert!(report.contains("micro avg"));
/// ```
pub fn classification_report(y_pred: &[usize], y_true: &[usize]) -> String {
    ClassificationReport::from_predictions(y_pred, y_true).to_string()
}
