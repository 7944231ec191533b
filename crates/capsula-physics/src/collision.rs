//! Typed pairwise collision tests.
//!
//! Each direct test lives next to the shape that owns the math
//! ([`Capsule`] against points and spheres, [`Sphere`] against points and
//! spheres). The mirrored directions defined here delegate to those.

use capsula_core::Vector;

use crate::capsule::Capsule;
use crate::point::Point;
use crate::sphere::Sphere;

/// Collision test against a shape of type `S`.
///
/// Tests read only the transformed geometry of both operands. Touching
/// surfaces (distance exactly equal to the combined radius) do not collide.
pub trait Intersects<S> {
    /// Returns true if `self` and `other` overlap.
    fn intersects(&self, other: &S) -> bool;
}

impl<V: Vector> Intersects<Sphere<V>> for Point<V> {
    #[inline]
    fn intersects(&self, other: &Sphere<V>) -> bool {
        other.intersects(self)
    }
}

impl<V: Vector> Intersects<Capsule<V>> for Point<V> {
    #[inline]
    fn intersects(&self, other: &Capsule<V>) -> bool {
        other.intersects(self)
    }
}

impl<V: Vector> Intersects<Capsule<V>> for Sphere<V> {
    #[inline]
    fn intersects(&self, other: &Capsule<V>) -> bool {
        other.intersects(self)
    }
}
