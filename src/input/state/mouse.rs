use crate::draw::VertexOutcome;
use crate::geometry::Point;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes pointer motion over the surface.
    ///
    /// # Behavior
    /// - Draw tool active: caches the drawing-space position for the preview
    ///   guide and requests a redraw while a sketch is in progress
    /// - Any other tool, or no valid surface transform: ignored
    ///
    /// Returns `true` if the cached pointer position changed.
    pub fn on_pointer_move(&mut self, screen: Point) -> bool {
        let Some(point) = self.map_for_drawing(screen) else {
            return false;
        };

        if point == self.pointer {
            return false;
        }
        self.pointer = point;
        if self.drawing.is_drawing() {
            self.needs_redraw = true;
        }
        true
    }

    /// Processes a primary click on the surface.
    ///
    /// The click position is mapped on its own; the cached pointer position is
    /// never used for committed vertices.
    ///
    /// # Returns
    /// - `Some(outcome)` when the click reached the sketcher
    /// - `None` when it was dropped (inactive tool or unmappable position)
    pub fn on_pointer_click(&mut self, screen: Point) -> Option<VertexOutcome> {
        let point = self.map_for_drawing(screen)?;
        let outcome = self.drawing.add_vertex(point);
        self.needs_redraw = true;
        Some(outcome)
    }

    fn map_for_drawing(&self, screen: Point) -> Option<Point> {
        if !self.router.routes_to_drawing() {
            return None;
        }
        match self.mapper.map(screen) {
            Ok(point) => Some(point),
            Err(err) => {
                debug!("Dropping pointer event at ({}, {}): {err}", screen.x, screen.y);
                None
            }
        }
    }
}
