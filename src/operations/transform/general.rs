use tracing::trace;

use crate::error::Result;
use crate::math::{transform_point, Matrix4};
use crate::topology::Solid;

/// Applies an arbitrary affine 4x4 matrix to every vertex of a solid.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, returning a transformed copy.
    ///
    /// Each vertex is lifted to `(x, y, z, 1)`, multiplied by the matrix and
    /// the homogeneous coordinate dropped. Face topology is unchanged.
    ///
    /// # Errors
    ///
    /// Does not fail for solids built by this crate; the error path exists
    /// for the vertex-count check in [`Solid::with_vertices`].
    pub fn execute(&self, solid: &Solid) -> Result<Solid> {
        let vertices = solid
            .vertices()
            .iter()
            .map(|p| transform_point(&self.matrix, p))
            .collect();
        trace!(vertices = solid.vertices().len(), "applied affine transform");
        solid.with_vertices(vertices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::{MakeDodecahedron, MakeIcosahedron};

    #[test]
    fn identity_preserves_solid() {
        let solid = MakeDodecahedron::new(60.0).execute().unwrap();
        let out = GeneralTransform::new(Matrix4::identity())
            .execute(&solid)
            .unwrap();
        assert_eq!(out.faces(), solid.faces());
        for (a, b) in out.vertices().iter().zip(solid.vertices()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn translation_moves_every_vertex() {
        let solid = MakeIcosahedron::new(1.0).execute().unwrap();
        let offset = Vector3::new(10.0, -5.0, 2.0);
        let out = GeneralTransform::new(Matrix4::new_translation(&offset))
            .execute(&solid)
            .unwrap();
        for (a, b) in out.vertices().iter().zip(solid.vertices()) {
            assert_relative_eq!(*a, b + offset, epsilon = 1e-12);
        }
    }

    #[test]
    fn source_solid_is_untouched() {
        let solid = MakeIcosahedron::new(1.0).execute().unwrap();
        let before = solid.vertices().to_vec();
        let _ = GeneralTransform::new(Matrix4::new_scaling(3.0))
            .execute(&solid)
            .unwrap();
        assert_eq!(solid.vertices(), before.as_slice());
    }
}
