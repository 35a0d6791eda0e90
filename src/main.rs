//! Trialbench CLI
//!
//! # Usage
//!
//! ```bash
//! # Benchmark the default kernel classifier (10 trials)
//! trialbench run
//!
//! # Benchmark from config with overrides
//! trialbench run bench.yaml --repeats 20 --gamma 0.01
//!
//! # Machine-readable medians
//! trialbench run --format json
//!
//! # Validate config
//! trialbench validate bench.yaml
//!
//! # Show effective config
//! trialbench info bench.yaml
//! ```

use clap::Parser;
use std::process::ExitCode;
use trialbench::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
