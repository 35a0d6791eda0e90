//! Pluggable classifiers
//!
//! - `classifier`: the `Classifier` / `ClassifierFactory` contract
//! - `kernel`: RBF kernel-vote classifier
//! - `majority`: majority-class baseline
//! - `spec`: the classifier configuration held fixed across a run

mod classifier;
mod kernel;
mod majority;
mod spec;

#[cfg(test)]
mod tests;

pub use classifier::{Classifier, ClassifierFactory, ModelError};
pub use kernel::KernelClassifier;
pub use majority::MajorityClassifier;
pub use spec::{ModelSpec, DEFAULT_GAMMA, GAMMA_MAX};
