//! CLI command implementations

mod info;
mod run;
mod validate;


use crate::cli::LogLevel;
use crate::config::{load_spec, BenchSpec, Cli, Command};
use crate::error::Result;
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Run(args) => run::run_bench(&args, log_level),
        Command::Validate(args) => validate::run_validate(&args, log_level),
        Command::Info(args) => info::run_info(&args, log_level),
    }
}

/// Load the config at `path`, or the defaults when no file is given.
fn load_or_default(path: Option<&Path>) -> Result<BenchSpec> {
    match path {
        Some(path) => load_spec(path),
        None => Ok(BenchSpec::default()),
    }
}
