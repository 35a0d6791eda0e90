//! Central-tendency statistics over trial series.

use serde::Serialize;
use std::cmp::Ordering;

/// Median of a series.
///
/// Even-length series yield the mean of the two middle values. Returns `None`
/// for an empty series.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        Some(f64::midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}

/// Summary of one measured dimension across all trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Median (the reported point estimate)
    pub median: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (0 for a single value)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl SeriesSummary {
    /// Summarize a series, `None` when it is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let median = median(values)?;
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() < 2 {
            0.0
        } else {
            (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self { median, mean, std_dev, min, max })
    }
}
