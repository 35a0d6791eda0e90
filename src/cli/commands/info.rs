//! Info command implementation

use super::load_or_default;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{validate_spec, BenchSpec, InfoArgs};
use crate::error::{BenchError, Result};

/// Effective configuration as YAML
pub fn render_yaml(spec: &BenchSpec) -> Result<String> {
    serde_yaml::to_string(spec).map_err(|e| BenchError::Serialization { message: e.to_string() })
}

pub fn run_info(args: &InfoArgs, level: LogLevel) -> Result<()> {
    let spec = load_or_default(args.config.as_deref())?;
    validate_spec(&spec)?;

    match &args.config {
        Some(path) => log(level, LogLevel::Normal, &format!("# Effective configuration for {}", path.display())),
        None => log(level, LogLevel::Normal, "# Default configuration"),
    }
    print!("{}", render_yaml(&spec)?);

    Ok(())
}
