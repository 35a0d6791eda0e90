//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_spec;
use crate::config::schema::*;
use crate::data::SplitPoint;
use crate::model::ModelSpec;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = BenchSpec> {
    (
        1usize..100,  // repeats
        0usize..5,    // warmup
        1e-6f64..1.0, // gamma
        2usize..2000, // samples
        0.0f64..8.0,  // noise
    )
        .prop_map(|(repeats, warmup, gamma, samples, noise)| BenchSpec {
            repeats,
            warmup,
            model: ModelSpec::kernel(gamma),
            data: DataSpec { samples, noise, seed: 42, split: SplitPoint::Midpoint },
            scoring: ScoringSpec::default(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn prop_zero_repeats_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.repeats = 0;
        prop_assert_eq!(validate_spec(&spec), Err(ValidationError::InvalidRepeats(0)));
    }

    #[test]
    fn prop_gamma_above_max_fails(spec in arb_valid_spec(), excess in 1e-6f64..100.0) {
        let mut spec = spec;
        spec.model = ModelSpec::kernel(1.0 + excess);
        prop_assert!(matches!(validate_spec(&spec), Err(ValidationError::InvalidGamma(_))));
    }

    #[test]
    fn prop_in_range_split_index_passes(spec in arb_valid_spec(), pick in 0.0f64..1.0) {
        let mut spec = spec;
        let samples = spec.data.samples;
        let index = 1 + ((samples - 1) as f64 * pick) as usize;
        prop_assume!(index < samples);
        spec.data.split = SplitPoint::Index(index);
        prop_assert!(validate_spec(&spec).is_ok());
    }
}
