use crate::error::{Result, TopologyError};
use crate::math::{centroid, Point3};

use super::Face;

/// An immutable polyhedral solid stored arena-style.
///
/// Vertices live in one contiguous sequence and every [`Face`] holds
/// 0-based indices into it. A solid is never mutated after construction;
/// transforms and orientation fixes produce new values.
#[derive(Debug, Clone)]
pub struct Solid {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
}

impl Solid {
    /// Creates a solid from vertex positions and faces.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceTooSmall`] if a face has fewer than three
    /// indices, or [`TopologyError::IndexOutOfRange`] if a face references a
    /// vertex that does not exist.
    pub fn new(vertices: Vec<Point3>, faces: Vec<Face>) -> Result<Self> {
        for (fi, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(TopologyError::FaceTooSmall {
                    face: fi,
                    len: face.len(),
                }
                .into());
            }
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertices.len()) {
                return Err(TopologyError::IndexOutOfRange {
                    face: fi,
                    index,
                    len: vertices.len(),
                }
                .into());
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Iterates the positions of a face's vertices in winding order.
    ///
    /// `face` must belong to this solid (or share its vertex count).
    pub fn face_points<'a>(&'a self, face: &'a Face) -> impl Iterator<Item = &'a Point3> + 'a {
        face.indices().iter().map(move |&i| &self.vertices[i])
    }

    /// Returns the leading three vertex positions of a face.
    #[must_use]
    pub fn leading_points(&self, face: &Face) -> [Point3; 3] {
        let idx = face.indices();
        [
            self.vertices[idx[0]],
            self.vertices[idx[1]],
            self.vertices[idx[2]],
        ]
    }

    /// Mean of all vertex positions, or `None` for an empty solid.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3> {
        centroid(&self.vertices)
    }

    /// Mean of a face's vertex positions.
    #[must_use]
    pub fn face_centroid(&self, face: &Face) -> Option<Point3> {
        centroid(self.face_points(face))
    }

    /// For every vertex, the indices of the faces that reference it.
    #[must_use]
    pub fn vertex_faces(&self) -> Vec<Vec<usize>> {
        let mut incident = vec![Vec::new(); self.vertices.len()];
        for (fi, face) in self.faces.iter().enumerate() {
            for &vi in face.indices() {
                incident[vi].push(fi);
            }
        }
        incident
    }

    /// Returns a new solid with the same faces and new vertex positions.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] if the vertex count differs.
    pub fn with_vertices(&self, vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() != self.vertices.len() {
            return Err(TopologyError::InvalidTopology(format!(
                "expected {} vertices, got {}",
                self.vertices.len(),
                vertices.len()
            ))
            .into());
        }
        Ok(Self {
            vertices,
            faces: self.faces.clone(),
        })
    }

    /// Returns a new solid with the same vertices and a new face list.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solid::new`].
    pub fn with_faces(&self, faces: Vec<Face>) -> Result<Self> {
        Self::new(self.vertices.clone(), faces)
    }
}
