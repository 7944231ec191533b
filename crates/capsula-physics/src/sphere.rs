//! Sphere shape (a circle in 2D).

use capsula_core::distance::point_point_squared;
use capsula_core::{Transform, Vector};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::collision::Intersects;
use crate::desc::SphereDesc;
use crate::error::{validate_radius, CollisionError, Result};
use crate::point::Point;
use crate::shape::{AbstractShape, ShapeType};

/// A sphere given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "SphereDesc<V>",
    into = "SphereDesc<V>",
    bound(
        serialize = "V: Vector + Serialize",
        deserialize = "V: Vector + Deserialize<'de>"
    )
)]
pub struct Sphere<V> {
    position: V,
    radius: f32,
    transformed_position: V,
    transformed_radius: f32,
}

/// Planar sphere, i.e. a circle.
pub type Sphere2D = Sphere<Vec2>;
/// Spatial sphere.
pub type Sphere3D = Sphere<Vec3>;

impl<V: Vector> Sphere<V> {
    /// Create a sphere.
    ///
    /// Fails with [`CollisionError::InvalidRadius`] if `radius` is negative
    /// or not finite.
    pub fn new(position: V, radius: f32) -> Result<Self> {
        let radius = validate_radius(radius)?;
        Ok(Self {
            position,
            radius,
            transformed_position: position,
            transformed_radius: radius,
        })
    }

    /// Untransformed center
    #[inline]
    pub fn position(&self) -> V {
        self.position
    }

    /// Set the untransformed center. Takes effect on the next transform.
    #[inline]
    pub fn set_position(&mut self, position: V) {
        self.position = position;
    }

    /// Untransformed radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the untransformed radius. Takes effect on the next transform.
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Center after the last applied transformation
    #[inline]
    pub fn transformed_position(&self) -> V {
        self.transformed_position
    }

    /// Radius after the last applied transformation
    #[inline]
    pub fn transformed_radius(&self) -> f32 {
        self.transformed_radius
    }
}

impl<V: Vector> AbstractShape<V> for Sphere<V> {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    fn apply_transformation_matrix<T: Transform<Vector = V>>(&mut self, matrix: &T) {
        let scaling = matrix.uniform_scaling();
        self.transformed_position = matrix.transform_point(self.position);
        self.transformed_radius = scaling * self.radius;
        trace!(scaling, radius = self.transformed_radius, "sphere transformed");
    }
}

impl<V: Vector> Intersects<Point<V>> for Sphere<V> {
    #[inline]
    fn intersects(&self, other: &Point<V>) -> bool {
        point_point_squared(self.transformed_position, other.transformed_position())
            < self.transformed_radius * self.transformed_radius
    }
}

impl<V: Vector> Intersects<Sphere<V>> for Sphere<V> {
    #[inline]
    fn intersects(&self, other: &Sphere<V>) -> bool {
        let reach = self.transformed_radius + other.transformed_radius;
        point_point_squared(self.transformed_position, other.transformed_position) < reach * reach
    }
}

impl<V: Vector> TryFrom<SphereDesc<V>> for Sphere<V> {
    type Error = CollisionError;

    fn try_from(desc: SphereDesc<V>) -> Result<Self> {
        Self::new(desc.position, desc.radius)
    }
}
