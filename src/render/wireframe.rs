use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::operations::query::{Aabb, BoundingBox};
use crate::operations::transform::ViewTransform;
use crate::operations::visibility::{ClassifyVisibility, FixOrientation};
use crate::topology::Solid;

use super::{LineCanvas, StrokeStyle};

/// What a wireframe pass drew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    /// Number of faces that passed the visibility test.
    pub visible_faces: usize,
    /// Number of line segments handed to the canvas.
    pub edges_drawn: usize,
    /// Bounds of the transformed solid, in pixel space (Z kept).
    pub bounds: Aabb,
}

/// Draws the visible edges of a solid with Roberts hidden-line removal.
///
/// The solid is moved into pixel space by the view transform, its faces
/// are rewound outward, and every boundary edge of each front-facing face
/// is drawn between the rounded `(x, y)` projections of its endpoints.
/// Edges shared by two visible faces are drawn twice.
pub struct WireframeRender {
    view: ViewTransform,
    style: StrokeStyle,
}

impl WireframeRender {
    /// Creates a new `WireframeRender` operation.
    #[must_use]
    pub fn new(view: ViewTransform, style: StrokeStyle) -> Self {
        Self { view, style }
    }

    /// Executes the pass onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the view scale is not positive or the solid has
    /// no vertices.
    pub fn execute<C>(&self, solid: &Solid, canvas: &mut C) -> Result<RenderSummary>
    where
        C: LineCanvas + ?Sized,
    {
        let viewed = self.view.execute(solid)?;
        let oriented = FixOrientation::new().execute(&viewed)?;
        let bounds = BoundingBox::new(&oriented).execute()?;

        let visible = ClassifyVisibility::new().visible_faces(&oriented);
        let points = oriented.vertices();
        let mut edges_drawn = 0;
        for face in &visible {
            for (a, b) in face.edges() {
                canvas.draw_line(to_pixel(&points[a]), to_pixel(&points[b]), &self.style);
                edges_drawn += 1;
            }
        }

        debug!(
            visible_faces = visible.len(),
            edges_drawn, "drew wireframe"
        );
        Ok(RenderSummary {
            visible_faces: visible.len(),
            edges_drawn,
            bounds,
        })
    }
}

/// Orthographic projection: drop Z, round X and Y to the nearest pixel.
#[allow(clippy::cast_possible_truncation)]
fn to_pixel(p: &Point3) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeDodecahedron, MakeIcosahedron};
    use crate::render::Raster;

    /// Records segments instead of painting them.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<((i32, i32), (i32, i32))>,
    }

    impl LineCanvas for Recorder {
        fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), _style: &StrokeStyle) {
            self.lines.push((from, to));
        }
    }

    fn render(solid: &Solid) -> (RenderSummary, Recorder) {
        let mut rec = Recorder::default();
        let summary = WireframeRender::new(ViewTransform::default(), StrokeStyle::default())
            .execute(solid, &mut rec)
            .unwrap();
        (summary, rec)
    }

    #[test]
    fn icosahedron_draws_ten_triangles() {
        let (summary, rec) = render(&MakeIcosahedron::new(60.0).execute().unwrap());
        assert_eq!(summary.visible_faces, 10);
        assert_eq!(summary.edges_drawn, 30);
        assert_eq!(rec.lines.len(), 30);
    }

    #[test]
    fn dodecahedron_draws_six_pentagons() {
        let (summary, rec) = render(&MakeDodecahedron::new(60.0).execute().unwrap());
        assert_eq!(summary.visible_faces, 6);
        assert_eq!(rec.lines.len(), 30);
    }

    #[test]
    fn segments_stay_near_the_offset() {
        // Radius 60 scaled by 2.2 around (300, 300).
        let (summary, rec) = render(&MakeIcosahedron::new(60.0).execute().unwrap());
        for (from, to) in rec.lines {
            for (x, y) in [from, to] {
                let d = f64::from((x - 300).pow(2) + (y - 300).pow(2)).sqrt();
                assert!(d <= 133.0, "({x}, {y}) is {d} px from the center");
            }
        }
        assert!(summary.bounds.fits_xy(600.0, 600.0));
    }

    #[test]
    fn every_visible_edge_is_drawn_for_both_solids() {
        for solid in [
            MakeIcosahedron::new(60.0).execute().unwrap(),
            MakeDodecahedron::new(60.0).execute().unwrap(),
        ] {
            let mut raster = Raster::new(600, 600, [255, 255, 255]).unwrap();
            let summary = WireframeRender::new(ViewTransform::default(), StrokeStyle::default())
                .execute(&solid, &mut raster)
                .unwrap();
            assert!(summary.edges_drawn > 0);
            assert!(raster.painted_pixels() > 0);
        }
    }

    #[test]
    fn to_pixel_rounds_half_away_from_zero() {
        assert_eq!(to_pixel(&Point3::new(1.5, 2.49, -7.0)), (2, 2));
        assert_eq!(to_pixel(&Point3::new(-0.5, 0.4, 0.0)), (-1, 0));
    }
}
