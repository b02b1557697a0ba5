use std::cmp::Ordering;

use tracing::warn;

use crate::error::{GeometryError, PolywireError, Result, TopologyError};
use crate::math::{perpendicular_basis, Point3};
use crate::topology::{Face, Solid};

/// Builds the dual of a convex solid.
///
/// Each face centroid of the source becomes a vertex of the dual. Each
/// source vertex becomes a dual face whose indices are the incident source
/// faces, sorted by angle around the vertex's outward direction. The
/// angle is measured in the plane spanned by [`perpendicular_basis`], so
/// faces come out counter-clockwise when seen from outside.
pub struct MakeDual {
    valence: usize,
    strict: bool,
}

impl MakeDual {
    /// Creates a new `MakeDual` operation expecting `valence` faces around
    /// every source vertex.
    #[must_use]
    pub fn new(valence: usize) -> Self {
        Self {
            valence,
            strict: false,
        }
    }

    /// Makes a valence mismatch fatal instead of a logged warning.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Executes the operation on `source`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::BuildInconsistency`] in strict mode when a
    /// vertex has an unexpected number of incident faces, and
    /// [`GeometryError::ZeroVector`] if a vertex coincides with the solid's
    /// centroid.
    pub fn execute(&self, source: &Solid) -> Result<Solid> {
        let center = source
            .centroid()
            .ok_or_else(|| GeometryError::Degenerate("solid has no vertices".into()))?;

        let centroids = source
            .faces()
            .iter()
            .map(|f| {
                source
                    .face_centroid(f)
                    .ok_or_else(|| {
                        PolywireError::from(GeometryError::Degenerate("face has no vertices".into()))
                    })
            })
            .collect::<Result<Vec<Point3>>>()?;

        let mut faces = Vec::with_capacity(source.vertices().len());
        for (vi, incident) in source.vertex_faces().into_iter().enumerate() {
            if incident.len() != self.valence {
                let err = TopologyError::BuildInconsistency {
                    vertex: vi,
                    incident: incident.len(),
                    expected: self.valence,
                };
                if self.strict {
                    return Err(err.into());
                }
                warn!(%err, "continuing with the faces found");
            }
            if incident.len() < 3 {
                warn!(vertex = vi, "too few incident faces for a dual face, skipping");
                continue;
            }

            let apex = source.vertices()[vi];
            let (u, v) = perpendicular_basis(&(apex - center))?;

            let mut around: Vec<(f64, usize)> = incident
                .into_iter()
                .map(|fi| {
                    let d = centroids[fi] - apex;
                    (d.dot(&v).atan2(d.dot(&u)), fi)
                })
                .collect();
            around.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

            faces.push(Face::new(around.into_iter().map(|(_, fi)| fi).collect()));
        }

        Solid::new(centroids, faces)
    }
}
