//! Confusion matrix for multi-class classification

use std::collections::BTreeSet;
use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Rows and columns follow [`ConfusionMatrix::labels`]: the sorted union of
/// every label that occurs in either the predictions or the ground truth.
/// Element `[i][j]` is the count of samples whose true label is `labels[i]`
/// and whose predicted label is `labels[j]`.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    /// matrix[true_index][predicted_index] = count
    matrix: Vec<Vec<usize>>,
    /// Class label for each row/column
    labels: Vec<usize>,
}

impl ConfusionMatrix {
    /// Create an empty confusion matrix over the given labels
    pub fn new(labels: Vec<usize>) -> Self {
        let n = labels.len();
        Self { matrix: vec![vec![0; n]; n], labels }
    }

    /// Create from predictions and ground truth
    ///
    /// # Panics
    /// Panics if `y_pred` and `y_true` differ in length.
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        assert_eq!(y_pred.len(), y_true.len(), "Predictions and targets must have same length");

        let labels: Vec<usize> =
            y_pred.iter().chain(y_true.iter()).copied().collect::<BTreeSet<_>>().into_iter().collect();
        let mut cm = Self::new(labels);

        for (&pred, &true_label) in y_pred.iter().zip(y_true.iter()) {
            if let (Some(i), Some(j)) = (cm.index_of(true_label), cm.index_of(pred)) {
                cm.matrix[i][j] += 1;
            }
        }

        cm
    }

    /// Position of a label in [`ConfusionMatrix::labels`]
    pub fn index_of(&self, label: usize) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Get the class labels
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Count of samples with `true_label` predicted as `predicted_label`
    ///
    /// Labels that never occur yield 0.
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        match (self.index_of(true_label), self.index_of(predicted_label)) {
            (Some(i), Some(j)) => self.matrix[i][j],
            _ => 0,
        }
    }

    /// True positives for the class at `index`
    pub fn true_positives(&self, index: usize) -> usize {
        self.matrix[index][index]
    }

    /// False positives for the class at `index` (predicted as class but wasn't)
    pub fn false_positives(&self, index: usize) -> usize {
        (0..self.n_classes()).filter(|&i| i != index).map(|i| self.matrix[i][index]).sum()
    }

    /// False negatives for the class at `index` (was class but predicted differently)
    pub fn false_negatives(&self, index: usize) -> usize {
        (0..self.n_classes()).filter(|&j| j != index).map(|j| self.matrix[index][j]).sum()
    }

    /// Support (total true instances) for the class at `index`
    pub fn support(&self, index: usize) -> usize {
        self.matrix[index].iter().sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Number of correctly classified samples
    pub fn correct(&self) -> usize {
        (0..self.n_classes()).map(|i| self.matrix[i][i]).sum()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.correct() as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "        ")?;
        for label in &self.labels {
            write!(f, "Pred {label:<3}")?;
        }
        writeln!(f)?;

        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "True {label:<3}")?;
            for count in &self.matrix[i] {
                write!(f, "{count:>7} ")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
