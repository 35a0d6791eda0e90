//! Labeled sample set with a fixed training/evaluation split

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};

/// Where the sample set is cut into training and evaluation partitions.
///
/// The split point is resolved once, when the [`SampleSet`] is built, so every
/// trial of a run sees exactly the same partitions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPoint {
    /// First half trains, second half evaluates (`n / 2`)
    #[default]
    Midpoint,
    /// `floor(n * fraction)` samples train, the rest evaluate
    Fraction(f64),
    /// Explicit boundary index
    Index(usize),
}

impl SplitPoint {
    /// Resolve the boundary index for `n` samples.
    pub fn resolve(&self, n: usize) -> Result<usize> {
        match *self {
            Self::Midpoint => Ok(n / 2),
            Self::Fraction(f) => {
                if !(f > 0.0 && f < 1.0) {
                    return Err(BenchError::shape(format!(
                        "split fraction must be in (0, 1), got {f}"
                    )));
                }
                Ok((n as f64 * f).floor() as usize)
            }
            Self::Index(i) => Ok(i),
        }
    }
}

/// One side of the split, borrowed from the sample set.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    /// Feature rows
    pub features: &'a [Vec<f64>],
    /// Class labels, one per row
    pub labels: &'a [usize],
}

impl Partition<'_> {
    /// Number of samples in the partition
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Fixed labeled dataset shared read-only by every trial of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    features: Vec<Vec<f64>>,
    labels: Vec<usize>,
    split: usize,
}

impl SampleSet {
    /// Build a sample set and cut it at `split`.
    ///
    /// Fails with [`BenchError::DataShape`] when feature and label counts
    /// differ, rows have different dimensions, or either partition would be
    /// empty.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<usize>, split: SplitPoint) -> Result<Self> {
        let boundary = split.resolve(labels.len())?;
        let set = Self { features, labels, split: boundary };
        set.validate()?;
        Ok(set)
    }

    /// Build a sample set split at the midpoint.
    pub fn halves(features: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Self> {
        Self::new(features, labels, SplitPoint::Midpoint)
    }

    /// Check the shape invariants.
    pub fn validate(&self) -> Result<()> {
        if self.features.len() != self.labels.len() {
            return Err(BenchError::shape(format!(
                "{} feature rows but {} labels",
                self.features.len(),
                self.labels.len()
            )));
        }

        if let Some(first) = self.features.first() {
            let dim = first.len();
            if let Some((row, bad)) =
                self.features.iter().enumerate().find(|(_, r)| r.len() != dim)
            {
                return Err(BenchError::shape(format!(
                    "row {row} has {} features, expected {dim}",
                    bad.len()
                )));
            }
        }

        if self.split == 0 {
            return Err(BenchError::shape("training partition is empty"));
        }
        if self.split >= self.labels.len() {
            return Err(BenchError::shape(format!(
                "evaluation partition is empty (split at {} of {} samples)",
                self.split,
                self.labels.len()
            )));
        }

        Ok(())
    }

    /// Training partition `[0, split)`
    #[must_use]
    pub fn training(&self) -> Partition<'_> {
        Partition {
            features: &self.features[..self.split],
            labels: &self.labels[..self.split],
        }
    }

    /// Evaluation partition `[split, n)`
    #[must_use]
    pub fn evaluation(&self) -> Partition<'_> {
        Partition {
            features: &self.features[self.split..],
            labels: &self.labels[self.split..],
        }
    }

    /// Total number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Boundary index between the partitions
    #[must_use]
    pub fn split_index(&self) -> usize {
        self.split
    }

    /// Feature dimension (0 for an empty set)
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }
}
