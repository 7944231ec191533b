//! Core math for the Capsula collision toolkit.
//!
//! This crate provides the dimension-generic building blocks used by the
//! shape library:
//! - The [`Vector`] and [`Transform`] capabilities, implemented for the 2D and
//!   3D `glam` types
//! - Point, line and line segment distance functions
//! - Common error types

pub mod distance;
pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{Transform, Vector};

