use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::topology::Solid;

/// Validates that a solid is a closed, orientable-looking 2-manifold of
/// genus zero.
///
/// Checks that every face has distinct indices, every undirected edge is
/// shared by exactly two faces, and `V - E + F == 2`. Index bounds and
/// face length are already guaranteed by [`Solid::new`].
pub struct IsValid<'a> {
    solid: &'a Solid,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        for (fi, face) in self.solid.faces().iter().enumerate() {
            let distinct: HashSet<_> = face.indices().iter().collect();
            if distinct.len() != face.len() {
                debug!(face = fi, "face repeats a vertex");
                return false;
            }
            for (a, b) in face.edges() {
                *edges.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }

        if let Some((edge, count)) = edges.iter().find(|&(_, &c)| c != 2) {
            debug!(?edge, count, "edge is not shared by exactly two faces");
            return false;
        }

        let v = self.solid.vertices().len();
        let e = edges.len();
        let f = self.solid.faces().len();
        if v + f != e + 2 {
            debug!(v, e, f, "euler characteristic is not 2");
            return false;
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::topology::Face;

    fn tetrahedron(faces: Vec<Face>) -> Solid {
        Solid::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            faces,
        )
        .unwrap()
    }

    #[test]
    fn closed_tetrahedron_is_valid() {
        let solid = tetrahedron(vec![
            Face::from([0, 2, 1]),
            Face::from([0, 1, 3]),
            Face::from([0, 3, 2]),
            Face::from([1, 2, 3]),
        ]);
        assert!(IsValid::new(&solid).execute());
    }

    #[test]
    fn open_surface_is_invalid() {
        let solid = tetrahedron(vec![
            Face::from([0, 2, 1]),
            Face::from([0, 1, 3]),
            Face::from([0, 3, 2]),
        ]);
        assert!(!IsValid::new(&solid).execute());
    }

    #[test]
    fn repeated_vertex_is_invalid() {
        let solid = tetrahedron(vec![Face::from([0, 1, 1])]);
        assert!(!IsValid::new(&solid).execute());
    }
}
