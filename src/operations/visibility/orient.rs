use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::topology::{Face, Solid};

use super::face_normal;

/// Rewinds faces so every normal points away from the solid's centroid.
///
/// A face whose normal has a negative dot product with the vector from
/// the solid centroid to the face centroid is reversed; all other faces
/// are kept as they are. Valid for convex solids.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixOrientation;

impl FixOrientation {
    /// Creates a new `FixOrientation` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, returning a copy with consistent winding.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the solid has no vertices.
    pub fn execute(&self, solid: &Solid) -> Result<Solid> {
        let center = solid
            .centroid()
            .ok_or_else(|| GeometryError::Degenerate("solid has no vertices".into()))?;

        let mut flipped = 0usize;
        let faces: Vec<Face> = solid
            .faces()
            .iter()
            .map(|face| {
                let [p0, p1, p2] = solid.leading_points(face);
                let normal = face_normal(&p0, &p1, &p2);
                let outward = match solid.face_centroid(face) {
                    Some(c) => c - center,
                    None => return face.clone(),
                };
                if normal.dot(&outward) < 0.0 {
                    flipped += 1;
                    face.reversed()
                } else {
                    face.clone()
                }
            })
            .collect();

        debug!(flipped, faces = faces.len(), "fixed face orientation");
        solid.with_faces(faces)
    }
}
