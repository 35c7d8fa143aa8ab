use crate::math::{Point3, Vector3, TOLERANCE};

use super::Plane;

/// A triangle given by three ordered vertices.
///
/// The winding order defines the face normal; it is derived on demand and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The three vertices, in winding order.
    pub vertices: [Point3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Face normal `cross(v1 - v0, v2 - v1)`. Not normalized; its length is
    /// twice the triangle's area.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(&(v2 - v1))
    }

    /// Average of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let [v0, v1, v2] = self.vertices;
        Point3::from((v0.coords + v1.coords + v2.coords) / 3.0)
    }

    /// The supporting plane, with a unit normal and
    /// `distance = dot(normal, centroid)`.
    ///
    /// Returns `None` for a degenerate (zero-area) triangle.
    #[must_use]
    pub fn plane(&self) -> Option<Plane> {
        let normal = self.normal().try_normalize(TOLERANCE)?;
        Some(Plane::new(normal, normal.dot(&self.centroid().coords)))
    }

    /// The three directed edges `v0->v1`, `v1->v2`, `v2->v0`, each paired
    /// with its start vertex.
    #[must_use]
    pub fn edges(&self) -> [(Point3, Vector3); 3] {
        let [v0, v1, v2] = self.vertices;
        [(v0, v1 - v0), (v1, v2 - v1), (v2, v0 - v2)]
    }
}
