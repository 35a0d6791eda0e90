//! YAML schema for a benchmarking run

use crate::data::{SplitPoint, SyntheticDigits};
use crate::eval::{ClassificationScorer, ScoreKey};
use crate::model::ModelSpec;
use serde::{Deserialize, Serialize};

/// Complete benchmark specification.
///
/// Every field has a default, so an empty document is a valid spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchSpec {
    /// Number of measured trials
    pub repeats: usize,

    /// Discarded trials run before measuring
    pub warmup: usize,

    /// Classifier held fixed across all trials
    pub model: ModelSpec,

    /// Dataset and split
    pub data: DataSpec,

    /// Quality scoring
    pub scoring: ScoringSpec,
}

impl Default for BenchSpec {
    fn default() -> Self {
        Self {
            repeats: 10,
            warmup: 0,
            model: ModelSpec::default(),
            data: DataSpec::default(),
            scoring: ScoringSpec::default(),
        }
    }
}

/// Synthetic dataset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSpec {
    /// Number of generated samples
    pub samples: usize,

    /// Generator seed
    pub seed: u64,

    /// Noise amplitude in intensity units
    pub noise: f64,

    /// Training/evaluation boundary
    pub split: SplitPoint,
}

impl Default for DataSpec {
    fn default() -> Self {
        let digits = SyntheticDigits::default();
        Self {
            samples: digits.samples,
            seed: digits.seed,
            noise: digits.noise,
            split: SplitPoint::Midpoint,
        }
    }
}

impl DataSpec {
    /// Provider generating the configured dataset.
    pub fn provider(&self) -> SyntheticDigits {
        SyntheticDigits::new(self.samples).with_seed(self.seed).with_noise(self.noise)
    }
}

/// Scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringSpec {
    /// Figure recorded as the quality score
    pub key: ScoreKey,

    /// Fail when predictions use labels absent from the ground truth
    pub strict_labels: bool,
}

impl ScoringSpec {
    /// Scorer for this configuration.
    pub fn scorer(&self) -> ClassificationScorer {
        ClassificationScorer::new(self.key).strict_labels(self.strict_labels)
    }
}
