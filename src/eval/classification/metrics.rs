//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;

/// Multi-class classification metrics
#[derive(Clone, Debug)]
pub struct MultiClassMetrics {
    /// Class label for each per-class entry
    pub labels: Vec<usize>,
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    /// Globally pooled (precision, recall, F1)
    micro: (f64, f64, f64),
}

/// Precision, recall and F1 from raw counts; zero where undefined.
fn prf(tp: f64, fp: f64, fn_: f64) -> (f64, f64, f64) {
    let p = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
    let r = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
    let f = if p + r > 0.0 { 2.0 * p * r / (p + r) } else { 0.0 };
    (p, r, f)
}

impl MultiClassMetrics {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);

        let (mut tp_sum, mut fp_sum, mut fn_sum) = (0.0, 0.0, 0.0);

        for class in 0..n_classes {
            let tp = cm.true_positives(class) as f64;
            let fp = cm.false_positives(class) as f64;
            let fn_ = cm.false_negatives(class) as f64;

            let (p, r, f) = prf(tp, fp, fn_);
            precision.push(p);
            recall.push(r);
            f1.push(f);
            support.push(cm.support(class));

            tp_sum += tp;
            fp_sum += fp;
            fn_sum += fn_;
        }

        Self {
            labels: cm.labels().to_vec(),
            precision,
            recall,
            f1,
            support,
            n_classes,
            micro: prf(tp_sum, fp_sum, fn_sum),
        }
    }

    /// Compute from predictions and ground truth
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        let cm = ConfusionMatrix::from_predictions(y_pred, y_true);
        Self::from_confusion_matrix(&cm)
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.precision, self.micro.0, average)
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.recall, self.micro.1, average)
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.f1, self.micro.2, average)
    }

    /// Total support across classes
    pub fn total_support(&self) -> usize {
        self.support.iter().sum()
    }

    fn average_metric(&self, values: &[f64], micro: f64, average: Average) -> f64 {
        match average {
            Average::Macro => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Average::Micro => micro,
            Average::Weighted => {
                let total_support = self.total_support();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
        }
    }
}
