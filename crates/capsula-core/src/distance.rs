//! Point, line and line segment distances.
//!
//! Comparisons elsewhere in the toolkit are made on squared distances, so
//! the squared variants are the primary ones and the plain variants just
//! take the square root.

use crate::math::Vector;

/// Squared distance between two points.
#[inline]
pub fn point_point_squared<V: Vector>(a: V, b: V) -> f32 {
    (b - a).length_squared()
}

/// Squared distance from `point` to the infinite line through `a` and `b`.
///
/// If `a == b` the line degenerates to the point `a`.
pub fn line_point_squared<V: Vector>(a: V, b: V, point: V) -> f32 {
    let ba = b - a;
    let pa = point - a;
    let ba_len_sq = ba.length_squared();
    if ba_len_sq <= f32::MIN_POSITIVE {
        return pa.length_squared();
    }
    let t = pa.dot(ba) / ba_len_sq;
    (pa - ba * t).length_squared()
}

/// Distance from `point` to the infinite line through `a` and `b`.
#[inline]
pub fn line_point<V: Vector>(a: V, b: V, point: V) -> f32 {
    line_point_squared(a, b, point).sqrt()
}

/// Squared distance from `point` to the line segment `[a, b]`.
///
/// The closest location is clamped to the segment: a point projecting before
/// `a` measures to `a`, one projecting past `b` measures to `b`. A zero-length
/// segment always falls into the first case, so this never divides by zero.
pub fn line_segment_point_squared<V: Vector>(a: V, b: V, point: V) -> f32 {
    let ba = b - a;
    let pa = point - a;

    let along = pa.dot(ba);
    if along <= 0.0 {
        return pa.length_squared();
    }

    let pb = point - b;
    if pb.dot(ba) >= 0.0 {
        return pb.length_squared();
    }

    // Strictly inside the segment's slab, so |ba|^2 > 0 here. Measuring to
    // the projected location keeps the perpendicular component exact on
    // long segments.
    let t = along / ba.length_squared();
    (pa - ba * t).length_squared()
}

/// Distance from `point` to the line segment `[a, b]`.
#[inline]
pub fn line_segment_point<V: Vector>(a: V, b: V, point: V) -> f32 {
    line_segment_point_squared(a, b, point).sqrt()
}
