//! Rasterization of visible edges and image output.

mod raster;
mod stroke_style;
mod viewer;
mod wireframe;

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

pub use raster::Raster;
pub use stroke_style::StrokeStyle;
pub use viewer::{NoViewer, SystemViewer, Viewer};
pub use wireframe::{RenderSummary, WireframeRender};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::operations::creation::MakeSolid;
use crate::topology::Solid;

/// A 2D surface that can draw straight segments between pixel positions.
pub trait LineCanvas {
    /// Draws a straight segment from `from` to `to`.
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), style: &StrokeStyle);
}

/// Outcome of [`render_to_file`].
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// Where the image was written, absolute when it can be resolved.
    pub path: PathBuf,
    /// What was drawn.
    pub summary: RenderSummary,
    /// Whether the viewer opened the image.
    pub displayed: bool,
}

/// Renders `solid` with the configured view, saves the PNG and tries to
/// show it.
///
/// Display failures are logged and reported through
/// [`RenderReport::displayed`]; they never fail the call.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the image cannot be
/// written.
pub fn render_to_file(
    solid: &Solid,
    config: &RenderConfig,
    viewer: &dyn Viewer,
) -> Result<RenderReport> {
    config.validate()?;

    let mut raster = Raster::new(config.width, config.height, config.background)?;
    let summary = WireframeRender::new(config.view, config.stroke).execute(solid, &mut raster)?;
    if !summary
        .bounds
        .fits_xy(f64::from(config.width), f64::from(config.height))
    {
        warn!(bounds = ?summary.bounds, "solid extends past the image; edges are cut off");
    }

    raster.save_png(&config.output)?;
    let path = fs::canonicalize(&config.output).unwrap_or_else(|_| config.output.clone());

    let displayed = config.show
        && match viewer.show(&path) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "could not open the image");
                false
            }
        };
    info!(path = %path.display(), "image saved");

    Ok(RenderReport {
        path,
        summary,
        displayed,
    })
}

/// Builds the configured solid and renders it with [`render_to_file`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the solid cannot be
/// built or the image cannot be written.
pub fn render(config: &RenderConfig, viewer: &dyn Viewer) -> Result<RenderReport> {
    config.validate()?;
    let solid = MakeSolid::new(config.kind, config.radius).execute()?;
    render_to_file(&solid, config, viewer)
}
