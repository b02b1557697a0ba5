use tracing::debug;

use crate::error::Result;
use crate::topology::Solid;

use super::{MakeDual, MakeIcosahedron};

/// Faces meeting at every icosahedron vertex.
const ICOSAHEDRON_VALENCE: usize = 5;

/// Creates a regular dodecahedron as the dual of an icosahedron.
///
/// The 20 vertices are the icosahedron's face centroids, so they lie on a
/// sphere smaller than `radius`. Face `i` is the pentagon around
/// icosahedron vertex `i`.
pub struct MakeDodecahedron {
    radius: f64,
    strict: bool,
}

impl MakeDodecahedron {
    /// Creates a new `MakeDodecahedron` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            strict: false,
        }
    }

    /// Makes a corrupt icosahedron adjacency fatal.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, or in strict mode
    /// if an icosahedron vertex does not have exactly five incident faces.
    pub fn execute(&self) -> Result<Solid> {
        let icosahedron = MakeIcosahedron::new(self.radius).execute()?;
        let solid = MakeDual::new(ICOSAHEDRON_VALENCE)
            .strict(self.strict)
            .execute(&icosahedron)?;
        debug!(
            radius = self.radius,
            vertices = solid.vertices().len(),
            faces = solid.faces().len(),
            "built dodecahedron"
        );
        Ok(solid)
    }
}
