use std::path::Path;

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{RenderError, Result};

use super::{LineCanvas, StrokeStyle};

/// An RGB raster backed by a `tiny-skia` pixmap.
pub struct Raster {
    pixmap: Pixmap,
    background: [u8; 3],
}

impl Raster {
    /// Creates a raster filled with the background colour.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameters`] if either dimension is zero
    /// or the pixmap cannot be allocated.
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::InvalidParameters(format!("cannot allocate a {width}x{height} raster"))
        })?;
        let [r, g, b] = background;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(Self { pixmap, background })
    }

    /// Raster width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Raster height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// RGB value of the pixel at `(x, y)`, or `None` outside the raster.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue()])
    }

    /// Number of pixels that differ from the background.
    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        let [r, g, b] = self.background;
        self.pixmap
            .pixels()
            .iter()
            .filter(|p| p.red() != r || p.green() != g || p.blue() != b)
            .count()
    }

    /// Writes the raster as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutputWrite`] if encoding or writing fails.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap.save_png(path).map_err(|e| {
            RenderError::OutputWrite {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl LineCanvas for Raster {
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), style: &StrokeStyle) {
        #[allow(clippy::cast_precision_loss)]
        let (x0, y0, x1, y1) = (from.0 as f32, from.1 as f32, to.0 as f32, to.1 as f32);

        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);

        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            let [r, g, b] = style.color();
            paint.set_color_rgba8(r, g, b, 255);
            paint.anti_alias = false;
            let stroke = Stroke {
                width: style.width(),
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}
