//! Small vector helpers on top of nalgebra.
//!
//! Addition, scaling, dot/cross products and norms come straight from
//! nalgebra; this module only adds the interpolation and zero-safe variants
//! the rest of the crate needs.

use super::{Point3, Vector3, TOLERANCE};

/// Returns the unit vector in the direction of `v`, or the zero vector if
/// `v` is shorter than [`TOLERANCE`].
#[must_use]
pub fn normalize_or_zero(v: &Vector3) -> Vector3 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
}

/// Linear interpolation between two vectors. `t` is not clamped.
#[must_use]
pub fn lerp(a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
    a + (b - a) * t
}

/// Linear interpolation between two points. `t` is not clamped.
#[must_use]
pub fn lerp_point(a: &Point3, b: &Point3, t: f64) -> Point3 {
    a + (b - a) * t
}

/// Spherical interpolation between two vectors.
///
/// The direction rotates along the great arc between `a` and `b` while the
/// magnitude is interpolated linearly. Falls back to [`lerp`] when either
/// input is zero-length or the two are (anti-)parallel.
#[must_use]
pub fn slerp(a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
    let len_a = a.norm();
    let len_b = b.norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return lerp(a, b, t);
    }

    let na = a / len_a;
    let nb = b / len_b;
    let cos_theta = na.dot(&nb).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    let sin_theta = theta.sin();
    if sin_theta.abs() < 1e-6 {
        return lerp(a, b, t);
    }

    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    let direction = na * wa + nb * wb;
    let length = len_a + (len_b - len_a) * t;
    direction * length
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}
