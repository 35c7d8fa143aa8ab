pub mod transform;
pub mod vector;

pub use transform::{look_rotation, make_affine, transform_point};
pub use vector::{distance, lerp, lerp_point, normalize_or_zero, slerp};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
