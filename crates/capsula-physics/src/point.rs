//! Point shape.

use capsula_core::{Transform, Vector};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::desc::PointDesc;
use crate::shape::{AbstractShape, ShapeType};

/// A single position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "PointDesc<V>",
    into = "PointDesc<V>",
    bound(
        serialize = "V: Vector + Serialize",
        deserialize = "V: Vector + Deserialize<'de>"
    )
)]
pub struct Point<V> {
    position: V,
    transformed_position: V,
}

/// Planar point.
pub type Point2D = Point<Vec2>;
/// Spatial point.
pub type Point3D = Point<Vec3>;

impl<V: Vector> Point<V> {
    /// Create a point. The transformed position starts out equal to `position`.
    #[inline]
    pub fn new(position: V) -> Self {
        Self {
            position,
            transformed_position: position,
        }
    }

    /// Untransformed position
    #[inline]
    pub fn position(&self) -> V {
        self.position
    }

    /// Set the untransformed position. Takes effect on the next transform.
    #[inline]
    pub fn set_position(&mut self, position: V) {
        self.position = position;
    }

    /// Position after the last applied transformation
    #[inline]
    pub fn transformed_position(&self) -> V {
        self.transformed_position
    }
}

impl<V: Vector> AbstractShape<V> for Point<V> {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Point
    }

    #[inline]
    fn apply_transformation_matrix<T: Transform<Vector = V>>(&mut self, matrix: &T) {
        self.transformed_position = matrix.transform_point(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat3, Mat4, Quat};

    #[test]
    fn starts_untransformed() {
        let point = Point::new(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(point.transformed_position(), point.position());
        assert_eq!(point.shape_type(), ShapeType::Point);
    }

    #[test]
    fn transform_overwrites_previous_pose() {
        let mut point = Point::new(Vec2::new(1.0, 0.0));
        point.apply_transformation_matrix(&Mat3::from_translation(Vec2::new(5.0, 5.0)));
        assert_eq!(point.transformed_position(), Vec2::new(6.0, 5.0));

        point.apply_transformation_matrix(&Mat3::from_translation(Vec2::new(-1.0, 0.0)));
        assert_eq!(point.transformed_position(), Vec2::new(0.0, 0.0));
        assert_eq!(point.position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn set_position_waits_for_next_transform() {
        let mut point = Point::new(Vec3::ZERO);
        point.set_position(Vec3::X);
        assert_eq!(point.transformed_position(), Vec3::ZERO);

        let m = Mat4::from_rotation_translation(Quat::IDENTITY, Vec3::Y);
        point.apply_transformation_matrix(&m);
        assert_eq!(point.transformed_position(), Vec3::new(1.0, 1.0, 0.0));
    }
}
