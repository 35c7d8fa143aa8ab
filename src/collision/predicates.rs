//! Pairwise overlap tests between primitive shapes.
//!
//! Every function is pure and O(1). Degenerate inputs produce `false`
//! rather than an error.

use crate::geometry::{Aabb, Plane, Segment, Sphere, Triangle};
use crate::math::{Point3, TOLERANCE};

/// Two spheres overlap when their centers are no farther apart than the sum
/// of their radii. Touching counts as overlapping.
#[must_use]
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    (b.center - a.center).norm() <= a.radius + b.radius
}

/// A sphere overlaps a plane when the unsigned distance from its center to
/// the plane is at most its radius.
#[must_use]
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(&sphere.center).abs() <= sphere.radius
}

/// Tests whether a segment crosses a plane.
///
/// A segment parallel to the plane never intersects, even when it lies in
/// the plane.
#[must_use]
pub fn segment_plane(segment: &Segment, plane: &Plane) -> bool {
    let denom = segment.diff.dot(&plane.normal);
    if denom.abs() < TOLERANCE {
        return false;
    }
    let t = (plane.distance - segment.origin.coords.dot(&plane.normal)) / denom;
    (0.0..=1.0).contains(&t)
}

/// Point where the segment's supporting line meets the plane.
///
/// Only meaningful after [`segment_plane`] returned `true`; for a segment
/// parallel to the plane the result is not finite.
#[must_use]
pub fn segment_plane_point(segment: &Segment, plane: &Plane) -> Point3 {
    let denom = segment.diff.dot(&plane.normal);
    let t = (plane.distance - segment.origin.coords.dot(&plane.normal)) / denom;
    segment.point_at(t)
}

/// Tests whether a segment pierces a triangle.
///
/// The segment is first tested against the triangle's plane; the hit point
/// is then inside when it lies on the inner side of all three edges for the
/// triangle's winding.
#[must_use]
pub fn triangle_segment(triangle: &Triangle, segment: &Segment) -> bool {
    let Some(plane) = triangle.plane() else {
        return false;
    };
    if !segment_plane(segment, &plane) {
        return false;
    }

    let hit = segment_plane_point(segment, &plane);
    triangle
        .edges()
        .iter()
        .all(|(start, edge)| edge.cross(&(hit - start)).dot(&plane.normal) >= 0.0)
}

/// Two boxes overlap when their extents overlap on all three axes.
#[must_use]
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    (0..3).all(|axis| a.min[axis] <= b.max[axis] && a.max[axis] >= b.min[axis])
}

/// A box overlaps a sphere when the box point closest to the sphere center
/// is within the radius.
#[must_use]
pub fn aabb_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let closest = aabb.closest_point(&sphere.center);
    (closest - sphere.center).norm() <= sphere.radius
}

/// Tests a segment against a box with the slab method.
///
/// Axes with no displacement only pass when the origin already lies within
/// that slab, so a zero-length segment reduces to a point containment test.
#[must_use]
pub fn aabb_segment(aabb: &Aabb, segment: &Segment) -> bool {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for axis in 0..3 {
        let origin = segment.origin[axis];
        let delta = segment.diff[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

        if delta.abs() < TOLERANCE {
            if origin < lo || origin > hi {
                return false;
            }
            continue;
        }

        let t_lo = (lo - origin) / delta;
        let t_hi = (hi - origin) / delta;
        let (near, far) = if t_lo <= t_hi { (t_lo, t_hi) } else { (t_hi, t_lo) };

        t_min = t_min.max(near);
        t_max = t_max.min(far);
        if t_min > t_max {
            return false;
        }
    }

    t_min <= t_max && t_max >= 0.0 && t_min <= 1.0
}

/// Restores `min <= max` on every axis of a box edited in place.
pub fn fix_aabb(aabb: &mut Aabb) {
    aabb.fix();
}
