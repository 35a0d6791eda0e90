//! Configuration validation
//!
//! Checks benchmark specifications before any trial runs.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_spec;
