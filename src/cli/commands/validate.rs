//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, BenchSpec, ValidateArgs};
use crate::error::Result;

/// Format a configuration summary as a string
pub fn format_spec_summary(spec: &BenchSpec) -> String {
    let mut lines = vec![
        format!("  Model: {}", spec.model),
        format!("  Repeats: {}", spec.repeats),
    ];
    if spec.warmup > 0 {
        lines.push(format!("  Warmup: {}", spec.warmup));
    }
    lines.push(format!(
        "  Data: {} samples (seed {}, noise {}, split {:?})",
        spec.data.samples, spec.data.seed, spec.data.noise, spec.data.split
    ));
    let strict = if spec.scoring.strict_labels { ", strict labels" } else { "" };
    lines.push(format!("  Quality: {}{strict}", spec.scoring.key));
    lines.join("\n")
}

pub fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_spec(&args.config)?;

    log(level, LogLevel::Normal, "Configuration is valid");
    log(level, LogLevel::Verbose, &format_spec_summary(&spec));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringSpec;
    use crate::eval::ScoreKey;
    use crate::model::ModelSpec;

    #[test]
    fn test_format_spec_summary_defaults() {
        let info = format_spec_summary(&BenchSpec::default());
        assert!(info.contains("kernel"));
        assert!(info.contains("Repeats: 10"));
        assert!(info.contains("1797 samples"));
        assert!(info.contains("micro avg f1-score"));
        assert!(!info.contains("Warmup"));
        assert!(!info.contains("strict"));
    }

    #[test]
    fn test_format_spec_summary_options() {
        let spec = BenchSpec {
            warmup: 2,
            model: ModelSpec::Majority,
            scoring: ScoringSpec { key: ScoreKey::Accuracy, strict_labels: true },
            ..Default::default()
        };
        let info = format_spec_summary(&spec);
        assert!(info.contains("Model: majority"));
        assert!(info.contains("Warmup: 2"));
        assert!(info.contains("strict labels"));
    }
}
