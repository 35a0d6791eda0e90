//! Declarative benchmark configuration
//!
//! A benchmark run is described by a YAML document:
//!
//! ```yaml
//! repeats: 10
//! warmup: 1
//! model:
//!   kind: kernel
//!   gamma: 0.001
//! data:
//!   samples: 1797
//!   seed: 42
//!   split: midpoint
//! scoring:
//!   key: micro_f1
//! ```
//!
//! Every field is optional. Command-line flags override the loaded values.

pub mod cli;
mod loader;
mod schema;
mod validate;

#[cfg(test)]
mod tests;

pub use cli::{apply_overrides, parse_args, Cli, Command, InfoArgs, ModelKind, OutputFormat, RunArgs, ValidateArgs};
pub use loader::{load_spec, parse_spec};
pub use schema::{BenchSpec, DataSpec, ScoringSpec};
pub use validate::{validate_spec, ValidationError};
