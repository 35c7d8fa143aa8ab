use crate::math::{Point3, Vector3};

/// An axis-aligned bounding box.
///
/// Holds `min <= max` component-wise. Interactive editing may break that;
/// [`Aabb::fix`] restores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from its two corners, stored as given.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Creates a box centered at `center` extending `half_extents` along each
    /// axis (absolute values are used).
    #[must_use]
    pub fn from_center_half_extents(center: &Point3, half_extents: &Vector3) -> Self {
        let h = half_extents.abs();
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Swaps any component where `min > max`, axis by axis.
    pub fn fix(&mut self) {
        for axis in 0..3 {
            let (a, b) = (self.min[axis], self.max[axis]);
            self.min[axis] = a.min(b);
            self.max[axis] = a.max(b);
        }
    }

    /// Returns `true` if `min <= max` on every axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0..3).all(|axis| self.min[axis] <= self.max[axis])
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    /// Closest point of the box to `point` (the point itself if inside).
    #[must_use]
    pub fn closest_point(&self, point: &Point3) -> Point3 {
        Point3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Half the size of the box along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vector3 {
        (self.max - self.min) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn fix_swaps_only_inverted_axes() {
        let mut b = Aabb::new(p(2.0, 0.0, 5.0), p(1.0, 1.0, -5.0));
        assert!(!b.is_valid());
        b.fix();
        assert_eq!(b.min, p(1.0, 0.0, -5.0));
        assert_eq!(b.max, p(2.0, 1.0, 5.0));
        assert!(b.is_valid());
    }

    #[test]
    fn fix_leaves_valid_box_untouched() {
        let mut b = Aabb::new(p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0));
        let before = b;
        b.fix();
        assert_eq!(b, before);
    }

    #[test]
    fn center_and_half_extents() {
        let b = Aabb::from_center_half_extents(&p(1.0, 2.0, 3.0), &Vector3::new(1.0, -2.0, 0.5));
        assert_eq!(b.min, p(0.0, 0.0, 2.5));
        assert_eq!(b.max, p(2.0, 4.0, 3.5));
        assert_eq!(b.center(), p(1.0, 2.0, 3.0));
        assert_eq!(b.half_extents(), Vector3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn closest_point_clamps_outside_point() {
        let b = Aabb::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert_eq!(b.closest_point(&p(2.0, 0.5, -3.0)), p(1.0, 0.5, 0.0));
        assert_eq!(b.closest_point(&p(0.25, 0.5, 0.75)), p(0.25, 0.5, 0.75));
    }

    #[test]
    fn boundary_points_are_contained() {
        let b = Aabb::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert!(b.contains_point(&p(1.0, 0.0, 0.5)));
        assert!(!b.contains_point(&p(1.0, 0.0, 1.5)));
    }
}
