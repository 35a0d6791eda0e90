//! Configuration-driven entry point.

use super::aggregate::{AggregateResult, Benchmark};
use super::trial::TrialResult;
use crate::config::{validate_spec, BenchSpec};
use crate::data::DatasetProvider;
use crate::error::Result;

/// Run the benchmark described by `spec`.
///
/// # Example
///
/// ```
/// use trialbench::bench::run_benchmark;
/// use trialbench::config::BenchSpec;
/// use trialbench::data::SplitPoint;
/// use trialbench::model::ModelSpec;
///
/// let mut spec = BenchSpec::default();
/// spec.repeats = 3;
/// spec.model = ModelSpec::Majority;
/// spec.data.samples = 40;
/// spec.data.split = SplitPoint::Midpoint;
///
/// let result = run_benchmark(&spec)?;
/// assert_eq!(result.repeats(), 3);
/// assert!(result.quality_score() <= 1.0);
/// # Ok::<(), trialbench::error::BenchError>(())
/// ```
pub fn run_benchmark(spec: &BenchSpec) -> Result<AggregateResult> {
    run_benchmark_observed(spec, |_, _| {})
}

/// Like [`run_benchmark`], calling `observer(index, trial)` after each
/// measured trial.
pub fn run_benchmark_observed<O>(spec: &BenchSpec, observer: O) -> Result<AggregateResult>
where
    O: FnMut(usize, &TrialResult),
{
    validate_spec(spec)?;

    let sample_set = spec.data.provider().sample_set(spec.data.split)?;
    let model = spec.model;
    let factory = move || model.build();
    let scorer = spec.scoring.scorer();

    Benchmark::new(spec.repeats).with_warmup(spec.warmup).run_observed(
        &sample_set,
        &factory,
        &scorer,
        observer,
    )
}
