//! Renders an icosahedron or dodecahedron wireframe to a PNG.
//!
//! ```text
//! polywire [icosa|dodeca] [OUTPUT] [--no-show] [--width N] [--height N]
//!          [--radius R] [--scale S] [--offset-x X] [--offset-y Y]
//!          [--rotate-x DEG] [--rotate-y DEG]
//! ```
//!
//! Defaults to a dodecahedron written to `img.png`. Logging goes through
//! `RUST_LOG` (e.g. `RUST_LOG=polywire=debug`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use polywire::operations::creation::MakeSolid;
use polywire::operations::transform::ViewTransform;
use polywire::render::{render_to_file, SystemViewer};
use polywire::topology::SolidKind;
use polywire::{RenderConfig, Result};
use tracing::error;

/// Vertices echoed before rendering.
const PREVIEW_VERTICES: usize = 6;

#[derive(Parser, Debug)]
#[command(
    name = "polywire",
    about = "Render a polyhedron wireframe with hidden lines removed"
)]
struct Args {
    /// Solid to render: icosa or dodeca
    #[arg(default_value = "dodeca")]
    kind: SolidKind,

    /// Path of the PNG to write
    #[arg(default_value = "img.png")]
    output: PathBuf,

    /// Save the image without opening it
    #[arg(long)]
    no_show: bool,

    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Circumradius of the source icosahedron
    #[arg(long, default_value_t = 60.0)]
    radius: f64,

    /// Uniform scale applied after rotation
    #[arg(long, default_value_t = 2.2)]
    scale: f64,

    /// Horizontal pixel offset of the solid's origin
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    offset_x: f64,

    /// Vertical pixel offset of the solid's origin
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    offset_y: f64,

    /// Rotation about the X axis, in degrees
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    rotate_x: f64,

    /// Rotation about the Y axis, in degrees
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    rotate_y: f64,
}

impl Args {
    fn into_config(self) -> RenderConfig {
        RenderConfig {
            kind: self.kind,
            radius: self.radius,
            width: self.width,
            height: self.height,
            view: ViewTransform {
                rotate_x: self.rotate_x.to_radians(),
                rotate_y: self.rotate_y.to_radians(),
                scale: self.scale,
                offset: (self.offset_x, self.offset_y),
            },
            output: self.output,
            show: !self.no_show,
            ..RenderConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Default: WARN for everything, INFO for polywire.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polywire=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(&args.into_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "render failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RenderConfig) -> Result<()> {
    config.validate()?;

    let solid = MakeSolid::new(config.kind, config.radius).execute()?;
    println!("Figure: {}", config.kind);
    println!(
        "Vertices: {} Faces: {}",
        solid.vertices().len(),
        solid.faces().len()
    );
    println!("first {PREVIEW_VERTICES} vertices (x, y, z):");
    for (i, p) in solid.vertices().iter().take(PREVIEW_VERTICES).enumerate() {
        println!("{i} ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
    }

    let report = render_to_file(&solid, config, &SystemViewer)?;
    println!(
        "Saved {} ({} visible faces, {} edges)",
        report.path.display(),
        report.summary.visible_faces,
        report.summary.edges_drawn
    );
    Ok(())
}
