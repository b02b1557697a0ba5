use tracing::debug;

use crate::math::Point3;
use crate::topology::{Face, Solid};

use super::face_normal;

/// Roberts visibility test for one face.
///
/// `face` must already be wound outward (see
/// [`FixOrientation`](super::FixOrientation)). Pixel space has X to the
/// right and Y down, so the viewer sits at `-inf` on the Z axis: the face
/// is visible iff the normal of its leading three vertices has a strictly
/// negative Z component. Edge-on faces are hidden, and so are faces with
/// fewer than three indices or an index outside `points`.
#[must_use]
pub fn classify_visible(face: &Face, points: &[Point3]) -> bool {
    let leading: Option<Vec<&Point3>> = face
        .indices()
        .iter()
        .take(3)
        .map(|&i| points.get(i))
        .collect();
    match leading.as_deref() {
        Some(&[p0, p1, p2]) => face_normal(p0, p1, p2).z < 0.0,
        _ => false,
    }
}

/// Classifies every face of an outward-wound solid.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassifyVisibility;

impl ClassifyVisibility {
    /// Creates a new `ClassifyVisibility` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns one flag per face, in face order.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Vec<bool> {
        let flags: Vec<bool> = solid
            .faces()
            .iter()
            .map(|f| classify_visible(f, solid.vertices()))
            .collect();
        debug!(
            visible = flags.iter().filter(|&&v| v).count(),
            faces = flags.len(),
            "classified faces"
        );
        flags
    }

    /// Returns the visible faces, in face order.
    #[must_use]
    pub fn visible_faces<'a>(&self, solid: &'a Solid) -> Vec<&'a Face> {
        solid
            .faces()
            .iter()
            .zip(self.execute(solid))
            .filter_map(|(f, visible)| visible.then_some(f))
            .collect()
    }
}
