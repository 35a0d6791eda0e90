//! Repeated-trial aggregator (median reduction).

use super::stats::SeriesSummary;
use super::trial::{run_trial, TrialResult};
use crate::data::SampleSet;
use crate::error::{BenchError, Result};
use crate::eval::{ScoreKey, Scorer};
use crate::model::ClassifierFactory;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Result key for the median training time.
pub const TRAINING_TIME_KEY: &str = "Training time (s)";
/// Result key for the median prediction time.
pub const PREDICTION_TIME_KEY: &str = "Prediction time (s)";
/// Result key for the median quality score.
pub const PERFORMANCE_KEY: &str = "Performance (aggregate score)";

/// The three medians under their fixed result keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Median training time in seconds
    #[serde(rename = "Training time (s)")]
    pub training_time_s: f64,
    /// Median prediction time in seconds
    #[serde(rename = "Prediction time (s)")]
    pub prediction_time_s: f64,
    /// Median quality score
    #[serde(rename = "Performance (aggregate score)")]
    pub performance: f64,
}

/// Per-dimension medians over all trials of one benchmarking run.
///
/// Each dimension is reduced independently, so the three medians need not
/// come from the same trial.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    training_time: SeriesSummary,
    prediction_time: SeriesSummary,
    quality: SeriesSummary,
    quality_key: ScoreKey,
    trials: Vec<TrialResult>,
}

impl AggregateResult {
    /// Reduce an ordered, non-empty sequence of trials.
    pub fn from_trials(trials: Vec<TrialResult>) -> Result<Self> {
        let Some(first) = trials.first() else {
            return Err(BenchError::InvalidRepeatCount { repeats: 0 });
        };
        let quality_key = first.quality_key();

        let summarize = |f: fn(&TrialResult) -> f64| {
            let series: Vec<f64> = trials.iter().map(f).collect();
            SeriesSummary::from_values(&series)
                .ok_or(BenchError::InvalidRepeatCount { repeats: 0 })
        };
        let training_time = summarize(TrialResult::training_secs)?;
        let prediction_time = summarize(TrialResult::prediction_secs)?;
        let quality = summarize(TrialResult::quality_score)?;

        Ok(Self { training_time, prediction_time, quality, quality_key, trials })
    }

    /// Median training time in seconds
    pub fn training_time_s(&self) -> f64 {
        self.training_time.median
    }

    /// Median prediction time in seconds
    pub fn prediction_time_s(&self) -> f64 {
        self.prediction_time.median
    }

    /// Median quality score
    pub fn quality_score(&self) -> f64 {
        self.quality.median
    }

    /// Key of the aggregated quality figure
    pub fn quality_key(&self) -> ScoreKey {
        self.quality_key
    }

    /// Training time statistics
    pub fn training_summary(&self) -> &SeriesSummary {
        &self.training_time
    }

    /// Prediction time statistics
    pub fn prediction_summary(&self) -> &SeriesSummary {
        &self.prediction_time
    }

    /// Quality score statistics
    pub fn quality_summary(&self) -> &SeriesSummary {
        &self.quality
    }

    /// Trials in execution order
    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    /// Number of measured trials
    pub fn repeats(&self) -> usize {
        self.trials.len()
    }

    /// The three medians as a serializable record
    pub fn summary(&self) -> AggregateSummary {
        AggregateSummary {
            training_time_s: self.training_time_s(),
            prediction_time_s: self.prediction_time_s(),
            performance: self.quality_score(),
        }
    }

    /// The three medians keyed by their fixed result names
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            (TRAINING_TIME_KEY, self.training_time_s()),
            (PREDICTION_TIME_KEY, self.prediction_time_s()),
            (PERFORMANCE_KEY, self.quality_score()),
        ])
    }
}

impl fmt::Display for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark Results ({} trials, quality = {})", self.repeats(), self.quality_key)?;
        writeln!(f, "┌──────────────────────┬────────────┬────────────┬────────────┬────────────┐")?;
        writeln!(f, "│ Dimension            │ Median     │ Mean       │ Min        │ Max        │")?;
        writeln!(f, "├──────────────────────┼────────────┼────────────┼────────────┼────────────┤")?;
        for (name, s) in [
            ("Training time (s)", &self.training_time),
            ("Prediction time (s)", &self.prediction_time),
            ("Performance", &self.quality),
        ] {
            writeln!(
                f,
                "│ {name:<20} │ {:>10.6} │ {:>10.6} │ {:>10.6} │ {:>10.6} │",
                s.median, s.mean, s.min, s.max
            )?;
        }
        writeln!(f, "└──────────────────────┴────────────┴────────────┴────────────┴────────────┘")
    }
}

/// Repeated-trial benchmark configuration.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    repeats: usize,
    warmup: usize,
}

impl Benchmark {
    /// Benchmark with `repeats` measured trials and no warmup.
    pub fn new(repeats: usize) -> Self {
        Self { repeats, warmup: 0 }
    }

    /// Run `warmup` discarded trials before the measured ones.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Number of measured trials
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Number of warmup trials
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Run all trials and reduce them to medians.
    pub fn run<F, S>(&self, sample_set: &SampleSet, factory: &F, scorer: &S) -> Result<AggregateResult>
    where
        F: ClassifierFactory + ?Sized,
        S: Scorer + ?Sized,
    {
        self.run_observed(sample_set, factory, scorer, |_, _| {})
    }

    /// Like [`Benchmark::run`], calling `observer(index, trial)` after each
    /// measured trial.
    ///
    /// Fails with [`BenchError::InvalidRepeatCount`] before any trial when
    /// `repeats` is zero. The first failing trial, warmup included, aborts
    /// the run with its error.
    pub fn run_observed<F, S, O>(
        &self,
        sample_set: &SampleSet,
        factory: &F,
        scorer: &S,
        mut observer: O,
    ) -> Result<AggregateResult>
    where
        F: ClassifierFactory + ?Sized,
        S: Scorer + ?Sized,
        O: FnMut(usize, &TrialResult),
    {
        if self.repeats < 1 {
            return Err(BenchError::InvalidRepeatCount { repeats: self.repeats });
        }

        for _ in 0..self.warmup {
            run_trial(sample_set, factory, scorer)?;
        }

        let mut trials = Vec::with_capacity(self.repeats);
        for index in 0..self.repeats {
            let trial = run_trial(sample_set, factory, scorer)?;
            observer(index, &trial);
            trials.push(trial);
        }

        AggregateResult::from_trials(trials)
    }
}

/// Run `repeats` trials and reduce them to per-dimension medians.
pub fn benchmark<F, S>(
    sample_set: &SampleSet,
    factory: &F,
    scorer: &S,
    repeats: usize,
) -> Result<AggregateResult>
where
    F: ClassifierFactory + ?Sized,
    S: Scorer + ?Sized,
{
    Benchmark::new(repeats).run(sample_set, factory, scorer)
}
