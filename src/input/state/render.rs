use crate::draw::{self, Preview, RenderError, RenderStyle};
use std::path::Path;

use super::InputState;

impl InputState {
    /// Returns the live preview for the sketch in progress.
    ///
    /// Empty while idle. Switching tools mid-sketch keeps the preview visible
    /// but frozen, since the pointer position only updates under the draw tool.
    pub fn preview(&self) -> Preview {
        Preview::project(self.drawing.current_polygon(), self.pointer)
    }

    /// Renders the background, finished polygons and live preview, in that order.
    ///
    /// The context is expected to be in drawing-space units.
    pub fn render_scene(&self, ctx: &cairo::Context, style: &RenderStyle) {
        draw::fill_background(ctx, style.background);
        draw::render_polygons(ctx, self.polygons(), &style.polygon);

        let preview = self.preview();
        if !preview.is_empty() {
            draw::render_preview(ctx, &preview, style);
        }
    }

    /// Rasterizes the current scene to a PNG sized to the viewport.
    pub fn export_png(&self, path: &Path, style: &RenderStyle) -> Result<(), RenderError> {
        let viewport = self.viewport();
        draw::export_png(path, viewport.width, viewport.height, |ctx| {
            self.render_scene(ctx, style)
        })
    }
}
