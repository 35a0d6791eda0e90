//! Tests for configuration file loading

use super::*;
use crate::data::SplitPoint;
use crate::error::BenchError;
use crate::eval::ScoreKey;
use crate::model::ModelSpec;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_valid_config() {
    let yaml = r"
repeats: 5
warmup: 1
model:
  kind: kernel
  gamma: 0.01
data:
  samples: 200
  seed: 7
  split: midpoint
scoring:
  key: accuracy
";

    let mut temp_file = NamedTempFile::new().expect("temp file creation should succeed");
    temp_file.write_all(yaml.as_bytes()).expect("file write should succeed");

    let spec = load_spec(temp_file.path()).expect("load should succeed");
    assert_eq!(spec.repeats, 5);
    assert_eq!(spec.warmup, 1);
    assert_eq!(spec.model, ModelSpec::kernel(0.01));
    assert_eq!(spec.data.samples, 200);
    assert_eq!(spec.data.seed, 7);
    assert_eq!(spec.data.split, SplitPoint::Midpoint);
    assert_eq!(spec.scoring.key, ScoreKey::Accuracy);
}

#[test]
fn test_load_invalid_config() {
    let mut temp_file = NamedTempFile::new().expect("temp file creation should succeed");
    temp_file.write_all(b"repeats: 0\n").expect("file write should succeed");

    let err = load_spec(temp_file.path()).unwrap_err();
    assert!(matches!(err, BenchError::InvalidRepeatCount { repeats: 0 }));
}

#[test]
fn test_load_missing_file() {
    let err = load_spec("/nonexistent/trialbench/bench.yaml").unwrap_err();
    assert!(matches!(err, BenchError::Io { .. }));
    assert_eq!(err.code(), "E050");
    assert!(err.to_string().contains("bench.yaml"));
}

#[test]
fn test_parse_empty_document_gives_defaults() {
    let spec = parse_spec("").unwrap();
    assert_eq!(spec, BenchSpec::default());
    assert_eq!(spec.repeats, 10);
    assert_eq!(spec.model, ModelSpec::kernel(0.001));
    assert_eq!(spec.scoring.key, ScoreKey::MicroF1);
}

#[test]
fn test_parse_partial_document() {
    let spec = parse_spec("model:\n  kind: majority\n").unwrap();
    assert_eq!(spec.model, ModelSpec::Majority);
    assert_eq!(spec.repeats, 10);
    assert_eq!(spec.data, DataSpec::default());
}

#[test]
fn test_parse_kernel_without_gamma_uses_default() {
    let spec = parse_spec("model:\n  kind: kernel\n").unwrap();
    assert_eq!(spec.model, ModelSpec::kernel(crate::model::DEFAULT_GAMMA));
}

#[test]
fn test_parse_unknown_field_rejected() {
    let err = parse_spec("repeat: 3\n").unwrap_err();
    assert!(matches!(err, BenchError::Config { .. }));
    assert_eq!(err.code(), "E001");
}

#[test]
fn test_parse_out_of_range_gamma_rejected() {
    let err = parse_spec("model:\n  kind: kernel\n  gamma: 2.0\n").unwrap_err();
    assert!(matches!(err, BenchError::Config { .. }));
    assert!(err.to_string().contains("gamma"));
}

#[test]
fn test_spec_yaml_round_trip() {
    let spec = BenchSpec {
        repeats: 4,
        model: ModelSpec::Majority,
        scoring: ScoringSpec { key: ScoreKey::WeightedF1, strict_labels: true },
        ..Default::default()
    };
    let yaml = serde_yaml::to_string(&spec).unwrap();
    assert_eq!(parse_spec(&yaml).unwrap(), spec);
}

#[test]
fn test_data_spec_provider_matches_fields() {
    let data = DataSpec { samples: 30, seed: 9, noise: 0.5, split: SplitPoint::Midpoint };
    let provider = data.provider();
    assert_eq!(provider.samples, 30);
    assert_eq!(provider.seed, 9);
    assert!((provider.noise - 0.5).abs() < f64::EPSILON);
}
