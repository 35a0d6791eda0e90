//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_spec;
use crate::config::schema::*;
use crate::data::SplitPoint;
use crate::error::BenchError;
use crate::model::ModelSpec;

fn create_valid_spec() -> BenchSpec {
    BenchSpec {
        repeats: 3,
        data: DataSpec { samples: 40, ..Default::default() },
        ..Default::default()
    }
}

#[test]
fn test_valid_config() {
    assert!(validate_spec(&create_valid_spec()).is_ok());
    assert!(validate_spec(&BenchSpec::default()).is_ok());
}

#[test]
fn test_invalid_repeats() {
    let mut spec = create_valid_spec();
    spec.repeats = 0;
    let err = validate_spec(&spec).unwrap_err();
    assert_eq!(err, ValidationError::InvalidRepeats(0));
}

#[test]
fn test_invalid_repeats_maps_to_repeat_count_error() {
    let err: BenchError = ValidationError::InvalidRepeats(0).into();
    assert!(matches!(err, BenchError::InvalidRepeatCount { repeats: 0 }));
}

#[test]
fn test_invalid_gamma() {
    let mut spec = create_valid_spec();
    for gamma in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
        spec.model = ModelSpec::kernel(gamma);
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidGamma(_)), "gamma {gamma}");
    }

    spec.model = ModelSpec::kernel(1.0);
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_majority_ignores_gamma_range() {
    let mut spec = create_valid_spec();
    spec.model = ModelSpec::Majority;
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_too_few_samples() {
    let mut spec = create_valid_spec();
    spec.data.samples = 1;
    assert_eq!(validate_spec(&spec).unwrap_err(), ValidationError::TooFewSamples(1));
}

#[test]
fn test_invalid_noise() {
    let mut spec = create_valid_spec();
    spec.data.noise = -1.0;
    assert!(matches!(validate_spec(&spec), Err(ValidationError::InvalidNoise(_))));
    spec.data.noise = f64::NAN;
    assert!(matches!(validate_spec(&spec), Err(ValidationError::InvalidNoise(_))));
}

#[test]
fn test_split_fraction_bounds() {
    let mut spec = create_valid_spec();
    spec.data.split = SplitPoint::Fraction(0.25);
    assert!(validate_spec(&spec).is_ok());

    for fraction in [0.0, 1.0, -0.5, 0.01] {
        spec.data.split = SplitPoint::Fraction(fraction);
        assert!(
            matches!(validate_spec(&spec), Err(ValidationError::InvalidSplitFraction(_))),
            "fraction {fraction}"
        );
    }
}

#[test]
fn test_split_index_bounds() {
    let mut spec = create_valid_spec();
    spec.data.split = SplitPoint::Index(39);
    assert!(validate_spec(&spec).is_ok());

    spec.data.split = SplitPoint::Index(40);
    assert_eq!(
        validate_spec(&spec).unwrap_err(),
        ValidationError::InvalidSplitIndex { index: 40, samples: 40 }
    );
    spec.data.split = SplitPoint::Index(0);
    assert!(validate_spec(&spec).is_err());
}

#[test]
fn test_error_messages_are_actionable() {
    let msg = ValidationError::InvalidGamma(2.0).to_string();
    assert!(msg.contains("must be > 0.0 and <= 1.0"));

    let err: BenchError = ValidationError::TooFewSamples(1).into();
    assert!(matches!(err, BenchError::Config { .. }));
    assert!(err.to_string().contains(">= 2"));
}
