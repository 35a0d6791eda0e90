//! Loading benchmark specifications from YAML

use super::schema::BenchSpec;
use super::validate::validate_spec;
use crate::error::{BenchError, Result};
use std::fs;
use std::path::Path;

/// Parse and validate a YAML specification.
pub fn parse_spec(yaml: &str) -> Result<BenchSpec> {
    // An empty document deserializes to unit, not to an empty mapping.
    let spec: BenchSpec = if yaml.trim().is_empty() {
        BenchSpec::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| BenchError::Config {
            message: format!("Failed to parse YAML config: {e}"),
        })?
    };
    validate_spec(&spec)?;
    Ok(spec)
}

/// Read, parse and validate a YAML specification file.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<BenchSpec> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    parse_spec(&yaml)
}
