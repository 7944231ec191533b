//! Serializable shape descriptions.
//!
//! A description holds only the untransformed geometry. Shapes serialize as
//! their description and deserialize through the same validation as the
//! constructors, so stored data can never carry a stale transformed state or
//! a negative radius.

use capsula_core::Vector;
use serde::{Deserialize, Serialize};

use crate::capsule::Capsule;
use crate::error::{CollisionError, Result};
use crate::point::Point;
use crate::shape::{Shape, ShapeType};
use crate::sphere::Sphere;

/// Untransformed point geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointDesc<V> {
    /// Position
    pub position: V,
}

/// Untransformed sphere geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc<V> {
    /// Center
    pub position: V,
    /// Radius, must be finite and not negative
    pub radius: f32,
}

/// Untransformed capsule geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapsuleDesc<V> {
    /// Start point
    pub a: V,
    /// End point
    pub b: V,
    /// Radius, must be finite and not negative
    pub radius: f32,
}

/// Description of any shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapeDesc<V> {
    /// A point
    Point(PointDesc<V>),
    /// A sphere
    Sphere(SphereDesc<V>),
    /// A capsule
    Capsule(CapsuleDesc<V>),
}

impl<V> ShapeDesc<V> {
    /// Type of the shape this describes.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Point(_) => ShapeType::Point,
            Self::Sphere(_) => ShapeType::Sphere,
            Self::Capsule(_) => ShapeType::Capsule,
        }
    }
}

impl<V: Vector> ShapeDesc<V> {
    /// Build the shape, validating radii.
    pub fn build(self) -> Result<Shape<V>> {
        Shape::try_from(self)
    }
}

impl<V: Vector> From<PointDesc<V>> for Point<V> {
    fn from(desc: PointDesc<V>) -> Self {
        Self::new(desc.position)
    }
}

impl<V: Vector> From<Point<V>> for PointDesc<V> {
    fn from(point: Point<V>) -> Self {
        Self {
            position: point.position(),
        }
    }
}

impl<V: Vector> From<Sphere<V>> for SphereDesc<V> {
    fn from(sphere: Sphere<V>) -> Self {
        Self {
            position: sphere.position(),
            radius: sphere.radius(),
        }
    }
}

impl<V: Vector> From<Capsule<V>> for CapsuleDesc<V> {
    fn from(capsule: Capsule<V>) -> Self {
        Self {
            a: capsule.a(),
            b: capsule.b(),
            radius: capsule.radius(),
        }
    }
}

impl<V: Vector> From<Shape<V>> for ShapeDesc<V> {
    fn from(shape: Shape<V>) -> Self {
        match shape {
            Shape::Point(point) => Self::Point(point.into()),
            Shape::Sphere(sphere) => Self::Sphere(sphere.into()),
            Shape::Capsule(capsule) => Self::Capsule(capsule.into()),
        }
    }
}

impl<V: Vector> TryFrom<ShapeDesc<V>> for Shape<V> {
    type Error = CollisionError;

    fn try_from(desc: ShapeDesc<V>) -> Result<Self> {
        Ok(match desc {
            ShapeDesc::Point(point) => Self::Point(point.into()),
            ShapeDesc::Sphere(sphere) => Self::Sphere(Sphere::try_from(sphere)?),
            ShapeDesc::Capsule(capsule) => Self::Capsule(Capsule::try_from(capsule)?),
        })
    }
}
