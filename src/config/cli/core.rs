//! Core CLI types - Cli, Command, and basic argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{ModelKind, OutputFormat};
use crate::config::BenchSpec;
use crate::error::{BenchError, Result};
use crate::eval::ScoreKey;
use crate::model::{ModelSpec, DEFAULT_GAMMA};

/// Trialbench: repeated-trial classifier benchmarking
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "trialbench")]
#[command(version)]
#[command(about = "Benchmark a classifier over repeated fit/predict trials and report medians")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a benchmark and print the per-dimension medians
    Run(RunArgs),

    /// Validate a configuration file without running it
    Validate(ValidateArgs),

    /// Display the effective configuration
    Info(InfoArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override number of measured trials
    #[arg(short, long)]
    pub repeats: Option<usize>,

    /// Override number of discarded warmup trials
    #[arg(short, long)]
    pub warmup: Option<usize>,

    /// Override classifier (kernel, majority)
    #[arg(short, long)]
    pub model: Option<ModelKind>,

    /// Override kernel width
    #[arg(short, long)]
    pub gamma: Option<f64>,

    /// Override dataset seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override dataset size
    #[arg(long)]
    pub samples: Option<usize>,

    /// Override quality figure (accuracy, micro_f1, macro_f1, weighted_f1)
    #[arg(long)]
    pub score: Option<ScoreKey>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the classification report of the first trial
    #[arg(long)]
    pub report: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a BenchSpec
///
/// `--model` is applied before `--gamma`. Switching to the kernel model keeps
/// the configured gamma when the loaded config already names one.
pub fn apply_overrides(spec: &mut BenchSpec, args: &RunArgs) -> Result<()> {
    if let Some(repeats) = args.repeats {
        spec.repeats = repeats;
    }
    if let Some(warmup) = args.warmup {
        spec.warmup = warmup;
    }
    match args.model {
        Some(ModelKind::Majority) => spec.model = ModelSpec::Majority,
        Some(ModelKind::Kernel) if matches!(spec.model, ModelSpec::Majority) => {
            spec.model = ModelSpec::kernel(DEFAULT_GAMMA);
        }
        _ => {}
    }
    if let Some(gamma) = args.gamma {
        match &mut spec.model {
            ModelSpec::Kernel { gamma: g } => *g = gamma,
            ModelSpec::Majority => {
                return Err(BenchError::Config {
                    message: "--gamma only applies to the kernel model".to_string(),
                });
            }
        }
    }
    if let Some(seed) = args.seed {
        spec.data.seed = seed;
    }
    if let Some(samples) = args.samples {
        spec.data.samples = samples;
    }
    if let Some(key) = args.score {
        spec.scoring.key = key;
    }
    Ok(())
}
