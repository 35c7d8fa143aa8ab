use nalgebra::Rotation3;

use super::{Matrix4, Point3, Vector3, TOLERANCE};

/// Builds a scale-rotate-translate matrix.
///
/// `rotation` holds Euler angles in radians about X, Y and Z. The result
/// applies scale first, then X, Y, Z rotations, then translation
/// (`T * Rz * Ry * Rx * S` for column vectors).
#[must_use]
pub fn make_affine(scale: &Vector3, rotation: &Vector3, translation: &Vector3) -> Matrix4 {
    let s = Matrix4::new_nonuniform_scaling(scale);
    let r = Rotation3::from_euler_angles(rotation.x, rotation.y, rotation.z).to_homogeneous();
    let t = Matrix4::new_translation(translation);
    t * r * s
}

/// Transforms a point by a homogeneous matrix, dividing by `w` unless it is
/// (close to) zero.
#[must_use]
pub fn transform_point(m: &Matrix4, point: &Point3) -> Point3 {
    let h = m * point.to_homogeneous();
    if h.w.abs() > TOLERANCE {
        Point3::new(h.x / h.w, h.y / h.w, h.z / h.w)
    } else {
        Point3::new(h.x, h.y, h.z)
    }
}

/// Euler angles orienting a +Z-forward object at `from` so it faces `to`.
///
/// Returns `(pitch, yaw, 0)`: pitch about X, yaw about Y. Returns the zero
/// vector if the two points coincide.
#[must_use]
pub fn look_rotation(from: &Point3, to: &Point3) -> Vector3 {
    let d = to - from;
    if d.norm() < TOLERANCE {
        return Vector3::zeros();
    }
    let yaw = d.x.atan2(d.z);
    let horizontal = d.x.hypot(d.z);
    let pitch = (-d.y).atan2(horizontal);
    Vector3::new(pitch, yaw, 0.0)
}
