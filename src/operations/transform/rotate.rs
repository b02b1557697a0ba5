use crate::math::Matrix4;

/// Rotation about the X axis by `angle` radians.
#[must_use]
pub fn rotation_x(angle: f64) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c,   -s,  0.0,
        0.0, s,   c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation about the Y axis by `angle` radians.
#[must_use]
pub fn rotation_y(angle: f64) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix4::new(
        c,   0.0, s,   0.0,
        0.0, 1.0, 0.0, 0.0,
        -s,  0.0, c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}
