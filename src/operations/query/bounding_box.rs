use crate::error::{GeometryError, Result};
use crate::math::Point3;
use crate::topology::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns `true` if the XY footprint lies inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn fits_xy(&self, width: f64, height: f64) -> bool {
        self.min.x >= 0.0 && self.min.y >= 0.0 && self.max.x <= width && self.max.y <= height
    }
}

/// Computes the axis-aligned bounding box of a solid's vertices.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the solid has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let mut points = self.solid.vertices().iter();
        let first = points
            .next()
            .ok_or_else(|| GeometryError::Degenerate("solid has no vertices".into()))?;
        let (min, max) = points.fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Ok(Aabb { min, max })
    }
}
