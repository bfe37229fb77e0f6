//! Cairo-based rendering of finished polygons and the live preview.

use super::color::{self, Color};
use super::frame::Polygon;
use super::preview::Preview;
use crate::geometry::Point;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Stroke parameters for one kind of outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash pattern in drawing units; empty for a solid line
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.color.r, self.color.g, self.color.b, self.color.a);
        ctx.set_line_width(self.width);
        ctx.set_dash(&self.dash, 0.0);
    }
}

/// Full set of styles used to draw a scene.
///
/// Defaults mirror the classic editor look: black outlines at width 2 with no
/// fill, and a thin gray guide dashed 5/5.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub polygon: StrokeStyle,
    pub preview: StrokeStyle,
    pub guide: StrokeStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: color::WHITE,
            polygon: StrokeStyle::solid(color::BLACK, 2.0),
            preview: StrokeStyle::solid(color::BLACK, 2.0),
            guide: StrokeStyle {
                color: color::GRAY,
                width: 1.0,
                dash: vec![5.0, 5.0],
            },
        }
    }
}

/// Errors raised while rasterizing a scene to an image file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render an empty {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("surface size {width}x{height} exceeds the image size limit")]
    SurfaceTooLarge { width: u32, height: u32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to create output file: {0}")]
    Io(#[from] std::io::Error),
}

/// Fills the whole surface with `background`.
///
/// A fully transparent background leaves the surface untouched.
pub fn fill_background(ctx: &cairo::Context, background: Color) {
    if background.a <= 0.0 {
        return;
    }
    let _ = ctx.save();
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all finished polygons, oldest first.
pub fn render_polygons(ctx: &cairo::Context, polygons: &[Polygon], style: &StrokeStyle) {
    for polygon in polygons {
        render_polygon(ctx, polygon, style);
    }
}

/// Strokes a single closed polygon outline without fill.
pub fn render_polygon(ctx: &cairo::Context, polygon: &Polygon, style: &StrokeStyle) {
    let vertices = polygon.vertices();
    if vertices.is_empty() {
        return;
    }

    style.apply(ctx);
    ctx.set_line_join(cairo::LineJoin::Miter);
    trace_path(ctx, vertices);
    ctx.close_path();
    let _ = ctx.stroke();
}

/// Renders the in-progress polyline and the dashed guide segment.
pub fn render_preview(ctx: &cairo::Context, preview: &Preview, style: &RenderStyle) {
    if preview.polyline.len() > 1 {
        style.preview.apply(ctx);
        ctx.set_line_join(cairo::LineJoin::Round);
        trace_path(ctx, &preview.polyline);
        let _ = ctx.stroke();
    }

    if let Some(guide) = preview.guide {
        style.guide.apply(ctx);
        ctx.move_to(guide.from.x, guide.from.y);
        ctx.line_to(guide.to.x, guide.to.y);
        let _ = ctx.stroke();
    }
}

/// Writes a PNG of `width` x `height` pixels, letting `draw` paint the content.
pub fn export_png<F>(path: &Path, width: u32, height: u32, draw: F) -> Result<(), RenderError>
where
    F: FnOnce(&cairo::Context),
{
    if width == 0 || height == 0 {
        return Err(RenderError::EmptySurface { width, height });
    }

    let (Ok(surface_width), Ok(surface_height)) = (i32::try_from(width), i32::try_from(height))
    else {
        return Err(RenderError::SurfaceTooLarge { width, height });
    };

    let surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, surface_width, surface_height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        draw(&ctx);
    }
    surface.flush();

    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

fn trace_path(ctx: &cairo::Context, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
}
