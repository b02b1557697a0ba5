use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{normalize, Point3, Vector3, TOLERANCE};
use crate::topology::{Face, Solid};

/// Golden ratio `(1 + sqrt(5)) / 2`.
const PHI: f64 = 1.618_033_988_749_895;

/// Canonical icosahedron vertices: cyclic permutations of `(±1, ±phi, 0)`.
#[rustfmt::skip]
const VERTICES: [[f64; 3]; 12] = [
    [-1.0,  PHI,  0.0],
    [ 1.0,  PHI,  0.0],
    [-1.0, -PHI,  0.0],
    [ 1.0, -PHI,  0.0],
    [ 0.0, -1.0,  PHI],
    [ 0.0,  1.0,  PHI],
    [ 0.0, -1.0, -PHI],
    [ 0.0,  1.0, -PHI],
    [ PHI,  0.0, -1.0],
    [ PHI,  0.0,  1.0],
    [-PHI,  0.0, -1.0],
    [-PHI,  0.0,  1.0],
];

/// The 20 triangles over [`VERTICES`], wound counter-clockwise when seen
/// from outside. Every vertex touches 5 faces and every edge 2 faces.
pub(crate) const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates a regular icosahedron centred at the origin.
///
/// Every vertex lies on the sphere of the given radius.
pub struct MakeIcosahedron {
    radius: f64,
}

impl MakeIcosahedron {
    /// Creates a new `MakeIcosahedron` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if the radius is not
    /// positive.
    pub fn execute(&self) -> Result<Solid> {
        if !self.radius.is_finite() || self.radius < TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: self.radius,
                min: TOLERANCE,
                max: f64::MAX,
            }
            .into());
        }

        let vertices = VERTICES
            .iter()
            .map(|&[x, y, z]| {
                let n = normalize(&Vector3::new(x, y, z))?;
                Ok(Point3::from(n * self.radius))
            })
            .collect::<Result<Vec<_>>>()?;
        let faces = FACES.iter().map(|&f| Face::from(f)).collect();

        let solid = Solid::new(vertices, faces)?;
        debug!(
            radius = self.radius,
            vertices = solid.vertices().len(),
            faces = solid.faces().len(),
            "built icosahedron"
        );
        Ok(solid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::query::IsValid;

    #[test]
    fn phi_constant_matches_definition() {
        assert_relative_eq!(PHI, (1.0 + 5.0_f64.sqrt()) / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn counts_and_triangles() {
        let solid = MakeIcosahedron::new(60.0).execute().unwrap();
        assert_eq!(solid.vertices().len(), 12);
        assert_eq!(solid.faces().len(), 20);
        assert!(solid.faces().iter().all(|f| f.len() == 3));
    }

    #[test]
    fn vertices_lie_on_sphere() {
        for radius in [0.5, 1.0, 60.0, 1234.5] {
            let solid = MakeIcosahedron::new(radius).execute().unwrap();
            for v in solid.vertices() {
                assert_relative_eq!(v.coords.norm(), radius, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn every_vertex_touches_five_faces() {
        let solid = MakeIcosahedron::new(1.0).execute().unwrap();
        for incident in solid.vertex_faces() {
            assert_eq!(incident.len(), 5);
        }
    }

    #[test]
    fn every_edge_is_shared_by_two_faces() {
        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for face in &FACES {
            for i in 0..3 {
                let (a, b) = (face[i], face[(i + 1) % 3]);
                *counts.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }
        assert_eq!(counts.len(), 30);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn face_table_is_a_closed_manifold() {
        let solid = MakeIcosahedron::new(1.0).execute().unwrap();
        assert!(IsValid::new(&solid).execute());
    }

    #[test]
    fn non_positive_radius_fails() {
        assert!(MakeIcosahedron::new(0.0).execute().is_err());
        assert!(MakeIcosahedron::new(-3.0).execute().is_err());
        assert!(MakeIcosahedron::new(f64::NAN).execute().is_err());
    }
}
