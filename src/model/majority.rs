//! Majority-class baseline

use super::classifier::{check_dimensions, check_training_shape, Classifier, ModelError};
use std::collections::BTreeMap;

/// Predicts the most frequent training label for every row.
///
/// Ties go to the smallest label.
#[derive(Debug, Clone, Default)]
pub struct MajorityClassifier {
    fitted: Option<(usize, usize)>,
}

impl MajorityClassifier {
    /// Create an untrained baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Majority label learned by `fit`
    pub fn majority_label(&self) -> Option<usize> {
        self.fitted.map(|(label, _)| label)
    }
}

impl Classifier for MajorityClassifier {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        let dim = check_training_shape(features, labels)?;

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }

        // Labels iterate in ascending order; ties keep the first.
        let majority = counts
            .iter()
            .fold(None, |best: Option<(usize, usize)>, (&label, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((label, count)),
            })
            .map(|(label, _)| label)
            .ok_or(ModelError::EmptyTrainingSet)?;

        self.fitted = Some((majority, dim));
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        let (label, dim) = self.fitted.ok_or(ModelError::NotFitted)?;
        check_dimensions(features, dim)?;
        Ok(vec![label; features.len()])
    }

    fn name(&self) -> &str {
        "majority"
    }
}
