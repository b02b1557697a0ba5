use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, TOLERANCE};
use crate::topology::Solid;

use super::{compose, rotation_x, rotation_y, scale_translate, GeneralTransform};

/// The orthographic demonstration view: rotate about X, then about Y, then
/// scale uniformly and shift into pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Rotation about the X axis, in radians.
    pub rotate_x: f64,
    /// Rotation about the Y axis, in radians.
    pub rotate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Pixel offset of the solid's origin.
    pub offset: (f64, f64),
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            rotate_x: 30.0_f64.to_radians(),
            rotate_y: 25.0_f64.to_radians(),
            scale: 2.2,
            offset: (300.0, 300.0),
        }
    }
}

impl ViewTransform {
    /// Returns `Mscale · Mry · Mrx`.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        compose(&[
            scale_translate(self.scale, self.offset.0, self.offset.1, 0.0),
            rotation_y(self.rotate_y),
            rotation_x(self.rotate_x),
        ])
    }

    /// Applies the view to a solid, returning a transformed copy.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if the scale is not
    /// positive.
    pub fn execute(&self, solid: &Solid) -> Result<Solid> {
        if !self.scale.is_finite() || self.scale < TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "scale",
                value: self.scale,
                min: TOLERANCE,
                max: f64::MAX,
            }
            .into());
        }
        GeneralTransform::new(self.matrix()).execute(solid)
    }
}
