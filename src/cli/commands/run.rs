//! Run command implementation

use super::load_or_default;
use crate::bench::{run_benchmark_observed, AggregateResult, TrialResult};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, BenchSpec, OutputFormat, RunArgs};
use crate::error::{BenchError, Result};

/// One line per measured trial, shown at verbose level
pub fn format_trial_line(index: usize, trial: &TrialResult) -> String {
    format!(
        "  trial {:>3}: fit {:.6}s  predict {:.6}s  {} {:.4}",
        index + 1,
        trial.training_secs(),
        trial.prediction_secs(),
        trial.quality_key(),
        trial.quality_score()
    )
}

/// Header describing what is about to run
pub fn format_run_header(spec: &BenchSpec) -> String {
    let warmup = if spec.warmup > 0 { format!(" (+{} warmup)", spec.warmup) } else { String::new() };
    format!(
        "Benchmarking {} on {} samples: {} trials{warmup}",
        spec.model, spec.data.samples, spec.repeats
    )
}

/// The three medians as pretty-printed JSON
pub fn render_json(result: &AggregateResult) -> Result<String> {
    serde_json::to_string_pretty(&result.summary())
        .map_err(|e| BenchError::Serialization { message: e.to_string() })
}

pub fn run_bench(args: &RunArgs, level: LogLevel) -> Result<()> {
    let mut spec = load_or_default(args.config.as_deref())?;
    apply_overrides(&mut spec, args)?;

    log(level, LogLevel::Normal, &format_run_header(&spec));

    let result = run_benchmark_observed(&spec, |index, trial| {
        log(level, LogLevel::Verbose, &format_trial_line(index, trial));
    })?;

    match args.format {
        OutputFormat::Text => log(level, LogLevel::Normal, &result.to_string()),
        // Machine output is printed even when quiet.
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }

    if args.report {
        if let Some(first) = result.trials().first() {
            println!("{}", first.report_text());
        }
    }

    Ok(())
}
