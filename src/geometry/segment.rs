use crate::math::{Point3, Vector3, TOLERANCE};

/// A finite line segment.
///
/// Stored as an origin and the displacement to the end point, so the
/// parametric form is `P(t) = origin + t * diff` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub origin: Point3,
    /// Displacement from the start point to the end point.
    pub diff: Vector3,
}

impl Segment {
    /// Creates a segment from an origin and a displacement.
    #[must_use]
    pub fn new(origin: Point3, diff: Vector3) -> Self {
        Self { origin, diff }
    }

    /// Creates a segment between two end points.
    #[must_use]
    pub fn from_endpoints(start: Point3, end: Point3) -> Self {
        Self {
            origin: start,
            diff: end - start,
        }
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.origin + self.diff
    }

    /// Evaluates the segment at parameter `t` (not clamped).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.diff * t
    }

    /// Returns `true` for a zero-length segment, which behaves as a point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.diff.norm() < TOLERANCE
    }
}
