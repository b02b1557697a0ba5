use std::path::PathBuf;

use crate::error::{GeometryError, RenderError, Result};
use crate::math::TOLERANCE;
use crate::operations::transform::ViewTransform;
use crate::render::StrokeStyle;
use crate::topology::SolidKind;

/// Everything the renderer needs, passed explicitly at call time.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Which solid to build.
    pub kind: SolidKind,
    /// Circumradius of the icosahedron the solid is built from.
    pub radius: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Rotation, scale and pixel offset of the demonstration view.
    pub view: ViewTransform,
    /// Edge colour and width.
    pub stroke: StrokeStyle,
    /// Background colour.
    pub background: [u8; 3],
    /// Where the PNG is written.
    pub output: PathBuf,
    /// Whether to try opening the image after saving.
    pub show: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            kind: SolidKind::Dodecahedron,
            radius: 60.0,
            width: 600,
            height: 600,
            view: ViewTransform::default(),
            stroke: StrokeStyle::default(),
            background: [255, 255, 255],
            output: PathBuf::from("img.png"),
            show: true,
        }
    }
}

impl RenderConfig {
    /// Returns a copy with a different solid kind.
    #[must_use]
    pub fn with_kind(mut self, kind: SolidKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns a copy writing to a different path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Checks the values before any geometry or raster work starts.
    ///
    /// # Errors
    ///
    /// Returns an error for zero image dimensions, a non-positive radius
    /// or scale, or an empty output path.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidParameters(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            ))
            .into());
        }
        for (parameter, value) in [("radius", self.radius), ("scale", self.view.scale)] {
            if !value.is_finite() || value < TOLERANCE {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: TOLERANCE,
                    max: f64::MAX,
                }
                .into());
            }
        }
        if self.output.as_os_str().is_empty() {
            return Err(RenderError::InvalidParameters("output path is empty".into()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn defaults_match_demonstration_view() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (600, 600));
        assert_relative_eq!(config.radius, 60.0);
        assert_relative_eq!(config.view.scale, 2.2);
        assert_relative_eq!(config.view.rotate_x, 30.0_f64.to_radians());
        assert_relative_eq!(config.view.rotate_y, 25.0_f64.to_radians());
        assert_eq!(config.view.offset, (300.0, 300.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_width_is_rejected() {
        let config = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let mut config = RenderConfig::default();
        config.view.scale = -2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_output_is_rejected() {
        let config = RenderConfig::default().with_output("");
        assert!(config.validate().is_err());
    }
}
