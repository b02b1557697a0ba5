use crate::math::Matrix4;

/// Uniform scale composed with a translation, as one matrix.
///
/// Points are scaled first and translated second.
#[must_use]
pub fn scale_translate(scale: f64, tx: f64, ty: f64, tz: f64) -> Matrix4 {
    #[rustfmt::skip]
    let m = Matrix4::new(
        scale, 0.0,   0.0,   tx,
        0.0,   scale, 0.0,   ty,
        0.0,   0.0,   scale, tz,
        0.0,   0.0,   0.0,   1.0,
    );
    m
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{transform_point, Point3};
    use crate::operations::creation::MakeIcosahedron;
    use crate::operations::transform::GeneralTransform;

    #[test]
    fn scales_before_translating() {
        let m = scale_translate(2.0, 300.0, 300.0, 0.0);
        let q = transform_point(&m, &Point3::new(1.0, -1.0, 4.0));
        assert_relative_eq!(q, Point3::new(302.0, 298.0, 8.0), epsilon = 1e-12);
    }

    #[test]
    fn moves_centroid_to_offset() {
        let solid = MakeIcosahedron::new(60.0).execute().unwrap();
        let out = GeneralTransform::new(scale_translate(2.2, 300.0, 300.0, 0.0))
            .execute(&solid)
            .unwrap();
        assert_relative_eq!(
            out.centroid().unwrap(),
            Point3::new(300.0, 300.0, 0.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            (out.vertices()[0] - Point3::new(300.0, 300.0, 0.0)).norm(),
            132.0,
            epsilon = 1e-9
        );
    }
}
