use super::{Matrix4, Point3, Vector4};

/// Standard 4x4 matrix product `a * b`.
#[must_use]
pub fn mat_mul(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    a * b
}

/// Multiplies a 4x4 matrix by a homogeneous 4-vector.
#[must_use]
pub fn mat_vec(m: &Matrix4, v: &Vector4) -> Vector4 {
    m * v
}

/// Lifts a point to homogeneous coordinates `(x, y, z, 1)`.
#[must_use]
pub fn lift(p: &Point3) -> Vector4 {
    Vector4::new(p.x, p.y, p.z, 1.0)
}

/// Applies an affine 4x4 matrix to a point.
///
/// The homogeneous coordinate is dropped without a perspective divide.
#[must_use]
pub fn transform_point(m: &Matrix4, p: &Point3) -> Point3 {
    let r = mat_vec(m, &lift(p));
    Point3::new(r.x, r.y, r.z)
}
