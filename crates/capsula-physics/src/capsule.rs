//! Capsule shape: a line segment swept by a radius.

use capsula_core::distance::line_segment_point_squared;
use capsula_core::{Transform, Vector};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::collision::Intersects;
use crate::desc::CapsuleDesc;
use crate::error::{validate_radius, CollisionError, Result};
use crate::point::Point;
use crate::shape::{AbstractShape, ShapeType};
use crate::sphere::Sphere;

/// Capsule defined by two cap centers and a radius.
///
/// With `a == b` the capsule degenerates to a sphere around `a`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "CapsuleDesc<V>",
    into = "CapsuleDesc<V>",
    bound(
        serialize = "V: Vector + Serialize",
        deserialize = "V: Vector + Deserialize<'de>"
    )
)]
pub struct Capsule<V> {
    a: V,
    b: V,
    radius: f32,
    transformed_a: V,
    transformed_b: V,
    transformed_radius: f32,
}

/// Planar capsule.
pub type Capsule2D = Capsule<Vec2>;
/// Spatial capsule.
pub type Capsule3D = Capsule<Vec3>;

impl<V: Vector> Capsule<V> {
    /// Create a capsule.
    ///
    /// Fails with [`CollisionError::InvalidRadius`] if `radius` is negative
    /// or not finite.
    pub fn new(a: V, b: V, radius: f32) -> Result<Self> {
        let radius = validate_radius(radius)?;
        Ok(Self {
            a,
            b,
            radius,
            transformed_a: a,
            transformed_b: b,
            transformed_radius: radius,
        })
    }

    /// Untransformed start point
    #[inline]
    pub fn a(&self) -> V {
        self.a
    }

    /// Set the untransformed start point
    #[inline]
    pub fn set_a(&mut self, a: V) {
        self.a = a;
    }

    /// Untransformed end point
    #[inline]
    pub fn b(&self) -> V {
        self.b
    }

    /// Set the untransformed end point
    #[inline]
    pub fn set_b(&mut self, b: V) {
        self.b = b;
    }

    /// Untransformed radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the untransformed radius
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Transformed start point
    #[inline]
    pub fn transformed_a(&self) -> V {
        self.transformed_a
    }

    /// Transformed end point
    #[inline]
    pub fn transformed_b(&self) -> V {
        self.transformed_b
    }

    /// Transformed radius
    #[inline]
    pub fn transformed_radius(&self) -> f32 {
        self.transformed_radius
    }

    /// Squared distance from `point` to the transformed segment.
    #[inline]
    pub fn segment_point_distance_squared(&self, point: V) -> f32 {
        line_segment_point_squared(self.transformed_a, self.transformed_b, point)
    }
}

impl<V: Vector> AbstractShape<V> for Capsule<V> {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    fn apply_transformation_matrix<T: Transform<Vector = V>>(&mut self, matrix: &T) {
        let scaling = matrix.uniform_scaling();
        self.transformed_a = matrix.transform_point(self.a);
        self.transformed_b = matrix.transform_point(self.b);
        self.transformed_radius = scaling * self.radius;
        trace!(scaling, radius = self.transformed_radius, "capsule transformed");
    }
}

impl<V: Vector> Intersects<Point<V>> for Capsule<V> {
    #[inline]
    fn intersects(&self, other: &Point<V>) -> bool {
        self.segment_point_distance_squared(other.transformed_position())
            < self.transformed_radius * self.transformed_radius
    }
}

impl<V: Vector> Intersects<Sphere<V>> for Capsule<V> {
    #[inline]
    fn intersects(&self, other: &Sphere<V>) -> bool {
        let reach = self.transformed_radius + other.transformed_radius();
        self.segment_point_distance_squared(other.transformed_position()) < reach * reach
    }
}

impl<V: Vector> TryFrom<CapsuleDesc<V>> for Capsule<V> {
    type Error = CollisionError;

    fn try_from(desc: CapsuleDesc<V>) -> Result<Self> {
        Self::new(desc.a, desc.b, desc.radius)
    }
}
