use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// A solid sphere used as a collision volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius, never negative.
    pub radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// A zero radius is allowed and describes a single point.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        Ok(Self { center, radius })
    }
}
