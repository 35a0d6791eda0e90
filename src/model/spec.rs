//! Classifier configuration selected once per benchmarking run

use super::classifier::Classifier;
use super::kernel::KernelClassifier;
use super::majority::MajorityClassifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted kernel coefficient (exclusive).
pub const GAMMA_MIN_EXCLUSIVE: f64 = 0.0;
/// Largest accepted kernel coefficient (inclusive).
pub const GAMMA_MAX: f64 = 1.0;
/// Default kernel coefficient.
pub const DEFAULT_GAMMA: f64 = 0.001;

/// Which classifier every trial of a run instantiates.
///
/// Changing this value defines a different benchmarking run; it is never
/// varied between trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelSpec {
    /// [`KernelClassifier`] with smoothing coefficient `gamma` in `(0, 1]`
    Kernel {
        #[serde(default = "default_gamma")]
        gamma: f64,
    },
    /// [`MajorityClassifier`] baseline
    Majority,
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self::kernel(DEFAULT_GAMMA)
    }
}

impl ModelSpec {
    /// Kernel classifier configuration.
    pub fn kernel(gamma: f64) -> Self {
        Self::Kernel { gamma }
    }

    /// Whether `gamma` lies in the documented range `(0, 1]`.
    pub fn gamma_in_range(gamma: f64) -> bool {
        gamma > GAMMA_MIN_EXCLUSIVE && gamma <= GAMMA_MAX
    }

    /// Build a fresh, untrained classifier.
    pub fn build(&self) -> Box<dyn Classifier> {
        match *self {
            Self::Kernel { gamma } => Box::new(KernelClassifier::new(gamma)),
            Self::Majority => Box::new(MajorityClassifier::new()),
        }
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kernel { gamma } => write!(f, "kernel(gamma={gamma})"),
            Self::Majority => write!(f, "majority"),
        }
    }
}
