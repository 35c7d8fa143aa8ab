mod aabb;
mod plane;
mod segment;
mod shape;
mod sphere;
mod triangle;

pub use aabb::Aabb;
pub use plane::Plane;
pub use segment::Segment;
pub use shape::{Shape, ShapeKind};
pub use sphere::Sphere;
pub use triangle::Triangle;
