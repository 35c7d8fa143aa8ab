//! Uniform Catmull-Rom evaluation over an ordered control-point list.
//!
//! The global parameter `t` in `[0, 1]` is spread evenly over the `n - 1`
//! spans between consecutive control points. The first and last points are
//! repeated as the outer neighbours of the end spans, so the curve starts at
//! the first point and ends at the last.

use crate::math::{Point3, Vector3};

/// Fewest control points that describe a curve.
pub const MIN_CONTROL_POINTS: usize = 4;

/// Returns `true` if `points` holds enough control points to evaluate.
#[must_use]
pub fn is_valid_curve(points: &[Point3]) -> bool {
    points.len() >= MIN_CONTROL_POINTS
}

/// Evaluates one Catmull-Rom span between `p1` (at `t = 0`) and `p2`
/// (at `t = 1`).
#[must_use]
pub fn catmull_rom(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Point3 {
    let t2 = t * t;
    let t3 = t2 * t;
    let c = p0.coords * (-t3 + 2.0 * t2 - t)
        + p1.coords * (3.0 * t3 - 5.0 * t2 + 2.0)
        + p2.coords * (-3.0 * t3 + 4.0 * t2 + t)
        + p3.coords * (t3 - t2);
    Point3::from(c * 0.5)
}

/// Derivative of [`catmull_rom`] with respect to the span parameter.
fn catmull_rom_derivative(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Vector3 {
    let t2 = t * t;
    let d = p0.coords * (-3.0 * t2 + 4.0 * t - 1.0)
        + p1.coords * (9.0 * t2 - 10.0 * t)
        + p2.coords * (-9.0 * t2 + 8.0 * t + 1.0)
        + p3.coords * (3.0 * t2 - 2.0 * t);
    d * 0.5
}

/// Span index and local parameter for a global `t`, plus the four
/// neighbourhood indices with the ends clamped.
struct Span {
    indices: [usize; 4],
    local_t: f64,
    count: usize,
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn locate(len: usize, t: f64) -> Span {
    let count = len - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * count as f64;
    let index = (scaled.floor() as usize).min(count - 1);
    let local_t = scaled - index as f64;
    Span {
        indices: [
            index.saturating_sub(1),
            index,
            index + 1,
            (index + 2).min(len - 1),
        ],
        local_t,
        count,
    }
}

/// Position on the curve at global parameter `t` (clamped to `[0, 1]`).
///
/// Returns the origin when the curve has fewer than
/// [`MIN_CONTROL_POINTS`]; check [`is_valid_curve`] instead of testing for
/// that value.
#[must_use]
pub fn calculate_position(points: &[Point3], t: f64) -> Point3 {
    if !is_valid_curve(points) {
        return Point3::origin();
    }
    let span = locate(points.len(), t);
    let [i0, i1, i2, i3] = span.indices;
    catmull_rom(&points[i0], &points[i1], &points[i2], &points[i3], span.local_t)
}

/// Derivative of the curve with respect to the global parameter `t`.
///
/// Zero vector for an invalid curve.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_tangent(points: &[Point3], t: f64) -> Vector3 {
    if !is_valid_curve(points) {
        return Vector3::zeros();
    }
    let span = locate(points.len(), t);
    let [i0, i1, i2, i3] = span.indices;
    catmull_rom_derivative(&points[i0], &points[i1], &points[i2], &points[i3], span.local_t)
        * span.count as f64
}

/// `count` evenly spaced positions from `t = 0` to `t = 1` inclusive.
///
/// Empty for an invalid curve or when `count < 2`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_positions(points: &[Point3], count: usize) -> Vec<Point3> {
    if !is_valid_curve(points) || count < 2 {
        return Vec::new();
    }
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| calculate_position(points, i as f64 / last))
        .collect()
}
