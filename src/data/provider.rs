//! Dataset providers

use super::sample_set::{SampleSet, SplitPoint};
use crate::error::{BenchError, Result};

/// Feature rows paired with their class labels.
pub type LabeledData = (Vec<Vec<f64>>, Vec<usize>);

/// Source of a fixed labeled dataset.
///
/// Splitting is the caller's job, see [`DatasetProvider::sample_set`].
pub trait DatasetProvider {
    /// Load the full feature matrix and label vector.
    fn load(&self) -> Result<LabeledData>;

    /// Load and cut into a [`SampleSet`].
    fn sample_set(&self, split: SplitPoint) -> Result<SampleSet> {
        let (features, labels) = self.load()?;
        SampleSet::new(features, labels, split)
    }
}

/// Provider over caller-supplied data.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    features: Vec<Vec<f64>>,
    labels: Vec<usize>,
}

impl InMemoryProvider {
    /// Wrap existing rows and labels.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<usize>) -> Self {
        Self { features, labels }
    }
}

impl DatasetProvider for InMemoryProvider {
    fn load(&self) -> Result<LabeledData> {
        Ok((self.features.clone(), self.labels.clone()))
    }
}

/// Side length of a synthetic digit image.
const GLYPH_SIDE: usize = 8;
/// Largest pixel intensity, matching the 4-bit scale of the classic digits set.
const MAX_INTENSITY: f64 = 16.0;

/// Deterministic generator of 8x8 digit-like images.
///
/// Each class gets a fixed random glyph; samples are that glyph plus seeded
/// noise, clamped to `[0, 16]`. Labels cycle through the classes so both
/// halves of a midpoint split see every class.
#[derive(Debug, Clone)]
pub struct SyntheticDigits {
    /// Number of samples to generate
    pub samples: usize,
    /// Number of classes
    pub classes: usize,
    /// Noise amplitude in intensity units
    pub noise: f64,
    /// Seed for glyphs and noise
    pub seed: u64,
}

impl Default for SyntheticDigits {
    fn default() -> Self {
        Self { samples: 1797, classes: 10, noise: 2.0, seed: 42 }
    }
}

impl SyntheticDigits {
    /// Generator with the given sample count and default settings otherwise.
    pub fn new(samples: usize) -> Self {
        Self { samples, ..Self::default() }
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the noise amplitude.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    /// Number of features per sample
    pub fn n_features(&self) -> usize {
        GLYPH_SIDE * GLYPH_SIDE
    }
}

/// LCG step shared by glyph and noise generation, returns a value in `[0, 1)`.
fn next_unit(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*state >> 11) as f64 / (1u64 << 53) as f64
}

impl DatasetProvider for SyntheticDigits {
    fn load(&self) -> Result<LabeledData> {
        if self.classes == 0 {
            return Err(BenchError::shape("synthetic digits need at least one class"));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(BenchError::shape(format!(
                "noise must be finite and non-negative, got {}",
                self.noise
            )));
        }

        let mut state = self.seed;
        let glyphs: Vec<Vec<f64>> = (0..self.classes)
            .map(|_| {
                (0..self.n_features())
                    .map(|_| (next_unit(&mut state) * (MAX_INTENSITY + 1.0)).floor())
                    .collect()
            })
            .collect();

        let mut features = Vec::with_capacity(self.samples);
        let mut labels = Vec::with_capacity(self.samples);
        for i in 0..self.samples {
            let label = i % self.classes;
            let row = glyphs[label]
                .iter()
                .map(|&p| {
                    let jitter = (next_unit(&mut state) * 2.0 - 1.0) * self.noise;
                    (p + jitter).round().clamp(0.0, MAX_INTENSITY)
                })
                .collect();
            features.push(row);
            labels.push(label);
        }

        Ok((features, labels))
    }
}
