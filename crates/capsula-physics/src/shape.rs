//! Shape capabilities and the closed shape set.

use std::fmt;

use capsula_core::{Transform, Vector};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capsule::Capsule;
use crate::collision::Intersects;
use crate::desc::ShapeDesc;
use crate::error::{CollisionError, Result};
use crate::point::Point;
use crate::sphere::Sphere;

/// Discriminator for the concrete shape variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// A single position
    Point,
    /// Center and radius
    Sphere,
    /// Line segment swept by a radius
    Capsule,
}

impl ShapeType {
    /// All shape types.
    pub const ALL: [Self; 3] = [Self::Point, Self::Sphere, Self::Capsule];

    /// Returns true if a collision test exists between the two types.
    ///
    /// The relation is symmetric.
    #[inline]
    pub const fn has_test_against(self, other: Self) -> bool {
        !matches!(
            (self, other),
            (Self::Point, Self::Point) | (Self::Capsule, Self::Capsule)
        )
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Sphere => "sphere",
            Self::Capsule => "capsule",
        };
        f.write_str(name)
    }
}

/// Capabilities every shape provides.
pub trait AbstractShape<V: Vector> {
    /// Type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Recompute the cached transformed geometry from `matrix`.
    ///
    /// Overwrites the previous transformed state; the untransformed geometry
    /// is left alone.
    fn apply_transformation_matrix<T: Transform<Vector = V>>(&mut self, matrix: &T);
}

/// Any shape of one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "ShapeDesc<V>",
    into = "ShapeDesc<V>",
    bound(
        serialize = "V: Vector + Serialize",
        deserialize = "V: Vector + Deserialize<'de>"
    )
)]
pub enum Shape<V> {
    /// A point
    Point(Point<V>),
    /// A sphere (circle in 2D)
    Sphere(Sphere<V>),
    /// A capsule
    Capsule(Capsule<V>),
}

/// Planar shape.
pub type Shape2D = Shape<Vec2>;
/// Spatial shape.
pub type Shape3D = Shape<Vec3>;

impl<V: Vector> Shape<V> {
    /// Test this shape against another.
    ///
    /// Symmetric: swapping the operands gives the same answer. Touching
    /// surfaces do not count as a collision.
    pub fn collides(&self, other: &Self) -> Result<bool> {
        let hit = match (self, other) {
            (Self::Point(a), Self::Sphere(b)) => a.intersects(b),
            (Self::Point(a), Self::Capsule(b)) => a.intersects(b),
            (Self::Sphere(a), Self::Point(b)) => a.intersects(b),
            (Self::Sphere(a), Self::Sphere(b)) => a.intersects(b),
            (Self::Sphere(a), Self::Capsule(b)) => a.intersects(b),
            (Self::Capsule(a), Self::Point(b)) => a.intersects(b),
            (Self::Capsule(a), Self::Sphere(b)) => a.intersects(b),
            (Self::Point(_), Self::Point(_)) | (Self::Capsule(_), Self::Capsule(_)) => {
                let (first, second) = (self.shape_type(), other.shape_type());
                debug!(%first, %second, "collision requested for unsupported pair");
                return Err(CollisionError::UnsupportedPair { first, second });
            }
        };
        Ok(hit)
    }

    /// The contained point, if this is one.
    pub fn as_point(&self) -> Option<&Point<V>> {
        match self {
            Self::Point(point) => Some(point),
            _ => None,
        }
    }

    /// The contained sphere, if this is one.
    pub fn as_sphere(&self) -> Option<&Sphere<V>> {
        match self {
            Self::Sphere(sphere) => Some(sphere),
            _ => None,
        }
    }

    /// The contained capsule, if this is one.
    pub fn as_capsule(&self) -> Option<&Capsule<V>> {
        match self {
            Self::Capsule(capsule) => Some(capsule),
            _ => None,
        }
    }
}

impl<V: Vector> AbstractShape<V> for Shape<V> {
    fn shape_type(&self) -> ShapeType {
        match self {
            Self::Point(point) => point.shape_type(),
            Self::Sphere(sphere) => sphere.shape_type(),
            Self::Capsule(capsule) => capsule.shape_type(),
        }
    }

    fn apply_transformation_matrix<T: Transform<Vector = V>>(&mut self, matrix: &T) {
        match self {
            Self::Point(point) => point.apply_transformation_matrix(matrix),
            Self::Sphere(sphere) => sphere.apply_transformation_matrix(matrix),
            Self::Capsule(capsule) => capsule.apply_transformation_matrix(matrix),
        }
    }
}

impl<V> From<Point<V>> for Shape<V> {
    fn from(point: Point<V>) -> Self {
        Self::Point(point)
    }
}

impl<V> From<Sphere<V>> for Shape<V> {
    fn from(sphere: Sphere<V>) -> Self {
        Self::Sphere(sphere)
    }
}

impl<V> From<Capsule<V>> for Shape<V> {
    fn from(capsule: Capsule<V>) -> Self {
        Self::Capsule(capsule)
    }
}
