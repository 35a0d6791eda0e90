//! RBF kernel-vote classifier

use super::classifier::{check_dimensions, check_training_shape, Classifier, ModelError};
use std::collections::{BTreeMap, BTreeSet};

/// Classifier that scores each class by the summed RBF kernel
/// `exp(-gamma * ||x - x_i||^2)` over its training samples and picks the
/// highest-scoring class. Ties go to the smallest label.
///
/// `gamma` is the kernel smoothing coefficient: small values spread each
/// training sample's influence wide, large values make the vote local.
#[derive(Debug, Clone)]
pub struct KernelClassifier {
    gamma: f64,
    features: Vec<Vec<f64>>,
    /// Sorted distinct training labels
    classes: Vec<usize>,
    /// Index into `classes` for each training row
    class_index: Vec<usize>,
    dim: Option<usize>,
}

impl KernelClassifier {
    /// Create an untrained classifier with the given smoothing coefficient.
    pub fn new(gamma: f64) -> Self {
        Self {
            gamma,
            features: Vec::new(),
            classes: Vec::new(),
            class_index: Vec::new(),
            dim: None,
        }
    }

    /// Smoothing coefficient
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Distinct labels seen by `fit`, ascending
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    fn class_scores(&self, x: &[f64]) -> Vec<f64> {
        let mut scores = vec![0.0; self.classes.len()];
        for (xi, &class) in self.features.iter().zip(&self.class_index) {
            let dist_sq: f64 = x.iter().zip(xi).map(|(a, b)| (a - b).powi(2)).sum();
            scores[class] += (-self.gamma * dist_sq).exp();
        }
        scores
    }
}

/// Index of the largest score; the first index wins ties.
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

impl Classifier for KernelClassifier {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(ModelError::Other(format!(
                "gamma must be finite and positive, got {}",
                self.gamma
            )));
        }
        let dim = check_training_shape(features, labels)?;

        let classes: Vec<usize> =
            labels.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let index_of: BTreeMap<usize, usize> =
            classes.iter().enumerate().map(|(i, &label)| (label, i)).collect();

        self.class_index = labels.iter().map(|label| index_of[label]).collect();
        self.features = features.to_vec();
        self.classes = classes;
        self.dim = Some(dim);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        let dim = self.dim.ok_or(ModelError::NotFitted)?;
        check_dimensions(features, dim)?;
        // Classes are ascending, so the first-index tie-break picks the smallest label.
        Ok(features.iter().map(|x| self.classes[argmax(&self.class_scores(x))]).collect())
    }

    fn name(&self) -> &str {
        "kernel"
    }
}
