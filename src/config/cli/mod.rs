//! CLI argument parsing and validation
//!
//! # Usage
//!
//! ```bash
//! trialbench run
//! trialbench run bench.yaml --repeats 20 --gamma 0.01
//! trialbench run --model majority --format json
//! trialbench validate bench.yaml
//! trialbench info bench.yaml
//! ```

mod core;
mod types;


pub use self::core::{apply_overrides, parse_args, Cli, Command, InfoArgs, RunArgs, ValidateArgs};
pub use types::{ModelKind, OutputFormat};
