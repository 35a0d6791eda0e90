//! Benchmark specification validation logic

use super::error::ValidationError;
use crate::config::schema::BenchSpec;
use crate::data::SplitPoint;
use crate::model::ModelSpec;

/// Validate a benchmark specification
///
/// Checks numeric ranges only; the synthetic dataset is generated later.
pub fn validate_spec(spec: &BenchSpec) -> Result<(), ValidationError> {
    if spec.repeats == 0 {
        return Err(ValidationError::InvalidRepeats(spec.repeats));
    }

    if let ModelSpec::Kernel { gamma } = spec.model {
        if !ModelSpec::gamma_in_range(gamma) {
            return Err(ValidationError::InvalidGamma(gamma));
        }
    }

    let data = &spec.data;
    if data.samples < 2 {
        return Err(ValidationError::TooFewSamples(data.samples));
    }
    if !data.noise.is_finite() || data.noise < 0.0 {
        return Err(ValidationError::InvalidNoise(data.noise));
    }

    match data.split {
        SplitPoint::Midpoint => {}
        SplitPoint::Fraction(f) => {
            let boundary = (data.samples as f64 * f).floor() as usize;
            if !(f > 0.0 && f < 1.0) || boundary == 0 || boundary >= data.samples {
                return Err(ValidationError::InvalidSplitFraction(f));
            }
        }
        SplitPoint::Index(index) => {
            if index == 0 || index >= data.samples {
                return Err(ValidationError::InvalidSplitIndex { index, samples: data.samples });
            }
        }
    }

    Ok(())
}
