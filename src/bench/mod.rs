//! Repeated-trial benchmarking
//!
//! A trial fits a fresh classifier on the training half, predicts the
//! evaluation half and scores the predictions. The aggregator runs a fixed
//! number of trials and reduces each dimension (training time, prediction
//! time, quality score) to its median independently.

mod aggregate;
mod runner;
mod stats;
mod trial;


pub use aggregate::{
    benchmark, AggregateResult, AggregateSummary, Benchmark, PERFORMANCE_KEY, PREDICTION_TIME_KEY,
    TRAINING_TIME_KEY,
};
pub use runner::{run_benchmark, run_benchmark_observed};
pub use stats::{median, SeriesSummary};
pub use trial::{run_trial, TrialResult};
