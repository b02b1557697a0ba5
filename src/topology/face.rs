/// A planar polygon given as an ordered list of 0-based vertex indices.
///
/// Boundary edges connect consecutive indices and wrap from the last index
/// back to the first. The winding order determines the sign of the normal
/// computed from the leading three vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    /// Creates a face from an ordered index list.
    ///
    /// Index bounds and minimum length are checked when the face is placed
    /// in a [`Solid`](super::Solid).
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Returns the ordered vertex indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of vertices (and edges) of the face.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the face has no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the same face with its winding order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            indices: self.indices.iter().rev().copied().collect(),
        }
    }

    /// Iterates the boundary edges as `(from, to)` index pairs, wrapping.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

impl From<&[usize]> for Face {
    fn from(indices: &[usize]) -> Self {
        Self::new(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Face {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_wrap_around() {
        let face = Face::from([4, 7, 9]);
        let edges: Vec<_> = face.edges().collect();
        assert_eq!(edges, vec![(4, 7), (7, 9), (9, 4)]);
    }

    #[test]
    fn reversed_flips_winding() {
        let face = Face::from([0, 1, 2, 3, 4]);
        assert_eq!(face.reversed().indices(), &[4, 3, 2, 1, 0]);
        assert_eq!(face.reversed().reversed(), face);
    }
}
