//! Repeated-trial benchmarking for classifiers.
//!
//! This crate provides tools for:
//! - Timing one fit/predict cycle of a classifier on a fixed train/evaluation split
//! - Scoring predictions with a classification report (accuracy, micro/macro/weighted F1)
//! - Repeating the trial and reducing each dimension to its median
//! - Describing runs declaratively in YAML and driving them from the `trialbench` CLI
//!
//! # Example
//!
//! ```
//! use trialbench::bench::benchmark;
//! use trialbench::data::{DatasetProvider, SplitPoint, SyntheticDigits};
//! use trialbench::eval::ClassificationScorer;
//! use trialbench::model::KernelClassifier;
//!
//! let sample_set = SyntheticDigits::new(100).sample_set(SplitPoint::Midpoint)?;
//! let factory = || KernelClassifier::new(0.001);
//! let result = benchmark(&sample_set, &factory, &ClassificationScorer::default(), 3)?;
//!
//! assert_eq!(result.repeats(), 3);
//! assert!(result.quality_score() > 0.5);
//! # Ok::<(), trialbench::error::BenchError>(())
//! ```

pub mod bench;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod model;

pub use bench::{benchmark, run_benchmark, AggregateResult, Benchmark, TrialResult};
pub use error::{BenchError, Result};
