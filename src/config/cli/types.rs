//! CLI value enums for output formats and model kinds

use std::fmt;

/// Output format for the run command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Classifier selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Kernel,
    Majority,
}

impl std::str::FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kernel" | "svc" => Ok(ModelKind::Kernel),
            "majority" => Ok(ModelKind::Majority),
            _ => Err(format!("Unknown model: {s}. Valid models: kernel, majority")),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Kernel => write!(f, "kernel"),
            ModelKind::Majority => write!(f, "majority"),
        }
    }
}
