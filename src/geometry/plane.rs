use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in Hessian normal form.
///
/// Points `p` on the plane satisfy `dot(normal, p) == distance`. The normal
/// is expected to be unit length; [`Plane::new`] stores it as given, so
/// callers that build planes by hand are responsible for normalizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal (expected unit length).
    pub normal: Vector3,
    /// Signed distance from the origin along `normal`.
    pub distance: f64,
}

impl Plane {
    /// Creates a plane from a normal and a signed distance, without
    /// normalizing.
    #[must_use]
    pub fn new(normal: Vector3, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Creates the plane through `point` with the given normal.
    ///
    /// The normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_point_normal(point: &Point3, normal: &Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            distance: normal.dot(&point.coords),
        })
    }

    /// Signed distance from a point to the plane.
    /// Positive = on the normal side, negative = opposite.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.distance
    }
}
