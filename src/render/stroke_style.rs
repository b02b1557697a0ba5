use crate::error::{RenderError, Result};

/// Colour and width used for every drawn edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    color: [u8; 3],
    width: f32,
}

impl StrokeStyle {
    /// Creates a new stroke style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(color: [u8; 3], width: f32) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RenderError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self { color, width })
    }

    /// Returns the stroke colour as RGB.
    #[must_use]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Returns the stroke width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeStyle {
    /// Black, two pixels wide.
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            width: 2.0,
        }
    }
}
