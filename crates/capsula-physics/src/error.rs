//! Collision error types.

use thiserror::Error;
use tracing::debug;

use crate::shape::ShapeType;

/// Errors raised by shape construction and collision dispatch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// No collision test exists for this pair of shapes.
    #[error("No collision test between {first} and {second}")]
    UnsupportedPair {
        /// Shape the query was made on
        first: ShapeType,
        /// Shape passed as the argument
        second: ShapeType,
    },

    /// Radius was negative, NaN or infinite.
    #[error("Invalid radius: {0}")]
    InvalidRadius(f32),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, CollisionError>;

pub(crate) fn validate_radius(radius: f32) -> Result<f32> {
    capsula_core::error::ensure_non_negative("radius", radius).map_err(|err| {
        debug!(radius, %err, "rejected shape radius");
        CollisionError::InvalidRadius(radius)
    })
}
