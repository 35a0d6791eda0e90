//! CLI module for trialbench
//!
//! Command handlers and output helpers behind the `trialbench` binary.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
