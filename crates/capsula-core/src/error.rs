//! Error types for the core math.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid data error
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A value that must be finite was NaN or infinite
    #[error("Non-finite value for {what}: {value}")]
    NonFinite {
        /// Name of the offending quantity
        what: &'static str,
        /// The rejected value
        value: f32,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that a scalar is finite and not negative.
pub fn ensure_non_negative(what: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(Error::NonFinite { what, value });
    }
    if value < 0.0 {
        return Err(Error::InvalidData(format!("{what} must not be negative, got {value}")));
    }
    Ok(value)
}
