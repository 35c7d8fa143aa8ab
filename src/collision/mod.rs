mod predicates;

pub use predicates::{
    aabb_aabb, aabb_segment, aabb_sphere, fix_aabb, segment_plane, segment_plane_point,
    sphere_plane, sphere_sphere, triangle_segment,
};

use crate::geometry::Shape;

/// Tests two shapes for overlap, in either argument order.
///
/// Returns `None` for pairs without an overlap test (for example plane vs
/// plane or triangle vs sphere).
#[must_use]
pub fn intersects(a: &Shape, b: &Shape) -> Option<bool> {
    use Shape as S;

    let hit = match (a, b) {
        (S::Sphere(a), S::Sphere(b)) => sphere_sphere(a, b),
        (S::Sphere(s), S::Plane(p)) | (S::Plane(p), S::Sphere(s)) => sphere_plane(s, p),
        (S::Segment(s), S::Plane(p)) | (S::Plane(p), S::Segment(s)) => segment_plane(s, p),
        (S::Triangle(t), S::Segment(s)) | (S::Segment(s), S::Triangle(t)) => {
            triangle_segment(t, s)
        }
        (S::Aabb(a), S::Aabb(b)) => aabb_aabb(a, b),
        (S::Aabb(b), S::Sphere(s)) | (S::Sphere(s), S::Aabb(b)) => aabb_sphere(b, s),
        (S::Aabb(b), S::Segment(s)) | (S::Segment(s), S::Aabb(b)) => aabb_segment(b, s),
        _ => return None,
    };
    Some(hit)
}

/// Brute-force collision pass: tests every unordered pair once and returns
/// the index pairs `(i, j)`, `i < j`, that overlap.
///
/// Pairs without an overlap test are skipped.
#[must_use]
pub fn overlapping_pairs(shapes: &[Shape]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in shapes.iter().enumerate() {
        for (j, b) in shapes.iter().enumerate().skip(i + 1) {
            if intersects(a, b) == Some(true) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
