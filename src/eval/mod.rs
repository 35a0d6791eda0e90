//! Prediction quality scoring
//!
//! - `classification`: confusion matrix, per-class and averaged metrics, reports
//! - `scorer`: the `Scorer` contract and the sklearn-style `ClassificationScorer`
//!
//! ## Example
//!
//! ```
//! use trialbench::eval::{ClassificationScorer, ScoreKey, Scorer};
//!
//! let scorer = ClassificationScorer::new(ScoreKey::MicroF1);
//! let report = scorer.score(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
//! assert_eq!(report.score(scorer.quality_key()), 0.75);
//! ```

pub mod classification;
mod scorer;


pub use classification::{
    classification_report, confusion_matrix, AggregateMetrics, Average, AveragedScores,
    ClassReport, ClassificationReport, ConfusionMatrix, MultiClassMetrics, ScoreKey,
};
pub use scorer::{ClassificationScorer, MetricError, Scorer};
