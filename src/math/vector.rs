use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` has (near) zero magnitude.
pub fn normalize(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Arithmetic mean of a set of points, or `None` for an empty set.
#[must_use]
pub fn centroid<'a, I>(points: I) -> Option<Point3>
where
    I: IntoIterator<Item = &'a Point3>,
{
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(Point3::from(sum / count as f64))
}

/// Builds an orthonormal basis `(u, v)` of the plane perpendicular to `normal`.
///
/// The reference axis is +X unless `normal` is nearly parallel to it, in
/// which case +Y is used. `u = normalize(reference x n)`, `v = n x u`, so
/// `(u, v, n)` is right-handed.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `normal` is zero-length.
pub fn perpendicular_basis(normal: &Vector3) -> Result<(Vector3, Vector3)> {
    let n = normalize(normal)?;
    let reference = if n.dot(&Vector3::x()).abs() > 0.9 {
        Vector3::y()
    } else {
        Vector3::x()
    };
    let u = normalize(&reference.cross(&n))?;
    let v = n.cross(&u);
    Ok((u, v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PolywireError;

    #[test]
    fn normalize_returns_unit_vector() {
        let n = normalize(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n, Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let result = normalize(&Vector3::zeros());
        assert!(matches!(
            result,
            Err(PolywireError::Geometry(GeometryError::ZeroVector))
        ));
    }

    #[test]
    fn centroid_of_points() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 6.0),
        ];
        let c = centroid(&pts).unwrap();
        assert_relative_eq!(c, Point3::new(2.0 / 3.0, 4.0 / 3.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_nothing_is_none() {
        let pts: [Point3; 0] = [];
        assert!(centroid(&pts).is_none());
    }

    #[test]
    fn perpendicular_basis_is_orthonormal() {
        for normal in [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, -3.0),
        ] {
            let n = normal.normalize();
            let (u, v) = perpendicular_basis(&normal).unwrap();
            assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
            assert!(u.dot(&v).abs() < 1e-12);
            assert!(u.dot(&n).abs() < 1e-12);
            assert!(v.dot(&n).abs() < 1e-12);
            // Right-handed: u x v points along n.
            assert_relative_eq!(u.cross(&v), n, epsilon = 1e-12);
        }
    }
}
