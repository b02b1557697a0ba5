//! Roberts hidden-line removal for convex solids.
//!
//! Every face normal is computed the same way, as
//! `(p1 - p0) x (p2 - p0)` over the face's leading three vertices. After
//! [`FixOrientation`] that normal points away from the solid's interior,
//! and a face is visible iff the normal's Z component is strictly
//! negative. Pixel space has X to the right and Y down, which puts the
//! viewer at `-inf` on the Z axis.

mod classify;
mod orient;

pub use classify::{classify_visible, ClassifyVisibility};
pub use orient::FixOrientation;

use crate::math::{Point3, Vector3};

/// Unnormalized face normal `(p1 - p0) x (p2 - p0)`.
///
/// Counter-clockwise winding (seen from the side the normal points to)
/// gives a normal pointing toward the viewer.
#[must_use]
pub fn face_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Vector3 {
    (p1 - p0).cross(&(p2 - p0))
}
