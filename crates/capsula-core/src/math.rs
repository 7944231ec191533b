//! Dimension-generic vector and transform capabilities.
//!
//! Shapes are written once and instantiated for both the planar and the
//! spatial case. [`Vector`] covers the handful of operations the distance
//! math needs, [`Transform`] covers the affine matrices a caller may supply
//! as a pose.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{Affine2, Affine3A, Mat3, Mat4, Vec2, Vec3};

/// A fixed-size vector of `f32` components.
pub trait Vector:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of components
    const DIMENSIONS: usize;

    /// Vector with every component set to `value`
    fn splat(value: f32) -> Self;

    /// Dot product
    fn dot(self, rhs: Self) -> f32;

    /// Squared Euclidean length
    #[inline]
    fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length
    #[inline]
    fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector along the all-ones diagonal, `(1, .., 1) / sqrt(D)`.
    #[inline]
    fn diagonal_unit() -> Self {
        Self::splat((Self::DIMENSIONS as f32).sqrt().recip())
    }
}

impl Vector for Vec2 {
    const DIMENSIONS: usize = 2;

    #[inline]
    fn splat(value: f32) -> Self {
        Vec2::splat(value)
    }

    #[inline]
    fn dot(self, rhs: Self) -> f32 {
        Vec2::dot(self, rhs)
    }
}

impl Vector for Vec3 {
    const DIMENSIONS: usize = 3;

    #[inline]
    fn splat(value: f32) -> Self {
        Vec3::splat(value)
    }

    #[inline]
    fn dot(self, rhs: Self) -> f32 {
        Vec3::dot(self, rhs)
    }
}

/// An affine transformation acting on vectors of one dimension.
pub trait Transform: Copy + Debug + Send + Sync + 'static {
    /// Vector type this transform acts on
    type Vector: Vector;

    /// Apply the full affine transform, translation included.
    fn transform_point(&self, point: Self::Vector) -> Self::Vector;

    /// Apply only the rotation/scaling part, translation stripped.
    fn transform_vector(&self, vector: Self::Vector) -> Self::Vector;

    /// Uniform scale factor of this transform.
    ///
    /// Measured as the length of the diagonal unit vector after the
    /// rotation/scaling part is applied. Exact for rotations combined with
    /// uniform scale; for non-uniform per-axis scale this is the length along
    /// the diagonal only, not a bound on the true scale along any axis.
    #[inline]
    fn uniform_scaling(&self) -> f32 {
        self.transform_vector(Self::Vector::diagonal_unit()).length()
    }
}

impl Transform for Mat3 {
    type Vector = Vec2;

    #[inline]
    fn transform_point(&self, point: Vec2) -> Vec2 {
        self.transform_point2(point)
    }

    #[inline]
    fn transform_vector(&self, vector: Vec2) -> Vec2 {
        self.transform_vector2(vector)
    }
}

impl Transform for Affine2 {
    type Vector = Vec2;

    #[inline]
    fn transform_point(&self, point: Vec2) -> Vec2 {
        self.transform_point2(point)
    }

    #[inline]
    fn transform_vector(&self, vector: Vec2) -> Vec2 {
        self.transform_vector2(vector)
    }
}

impl Transform for Mat4 {
    type Vector = Vec3;

    #[inline]
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    #[inline]
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_vector3(vector)
    }
}

impl Transform for Affine3A {
    type Vector = Vec3;

    #[inline]
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    #[inline]
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_vector3(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Quat;

    #[test]
    fn diagonal_unit_components() {
        assert_relative_eq!(
            Vec2::diagonal_unit().x,
            std::f32::consts::FRAC_1_SQRT_2,
            epsilon = 1e-6
        );
        assert_relative_eq!(Vec3::diagonal_unit().z, 3.0_f32.sqrt().recip(), epsilon = 1e-6);
    }

    #[test]
    fn diagonal_unit_has_unit_length() {
        assert_relative_eq!(Vec2::diagonal_unit().length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(Vector::length(Vec3::diagonal_unit()), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn transform_point_includes_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            Transform::transform_point(&m, Vec3::ZERO),
            Vec3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(Transform::transform_vector(&m, Vec3::X), Vec3::X);

        let m = Mat3::from_translation(Vec2::new(-4.0, 0.5));
        assert_eq!(
            Transform::transform_point(&m, Vec2::ONE),
            Vec2::new(-3.0, 1.5)
        );
        assert_eq!(Transform::transform_vector(&m, Vec2::ONE), Vec2::ONE);
    }

    #[test]
    fn uniform_scaling_ignores_rotation_and_translation() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_euler(glam::EulerRot::XYZ, 0.3, -1.1, 2.4),
            Vec3::new(10.0, -5.0, 7.0),
        );
        assert_relative_eq!(m.uniform_scaling(), 2.0, epsilon = 1e-5);

        let m = Affine2::from_scale_angle_translation(Vec2::splat(3.0), 0.7, Vec2::X);
        assert_relative_eq!(m.uniform_scaling(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn uniform_scaling_of_identity_is_one() {
        assert_relative_eq!(Mat3::IDENTITY.uniform_scaling(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(Affine3A::IDENTITY.uniform_scaling(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn non_uniform_scaling_measures_the_diagonal() {
        // Scale (3, 0, 0): the diagonal shrinks to length 3 / sqrt(3).
        let m = Mat4::from_scale(Vec3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(m.uniform_scaling(), 3.0_f32.sqrt(), epsilon = 1e-5);
    }
}
