//! Drawing surface dimensions.

use serde::Serialize;

/// Default height in pixels reserved for the toolbar above the surface.
pub const DEFAULT_TOOLBAR_HEIGHT: u32 = 50;

/// Surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Tracks the surface size as the window resizes.
///
/// Pure dimension bookkeeping: recorded drawing-space coordinates are never
/// touched by a resize.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    viewport: Viewport,
    toolbar_height: u32,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TOOLBAR_HEIGHT)
    }
}

impl ViewportTracker {
    /// Tracker with a 0x0 surface until the first resize notification.
    pub fn new(toolbar_height: u32) -> Self {
        Self {
            viewport: Viewport::default(),
            toolbar_height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn toolbar_height(&self) -> u32 {
        self.toolbar_height
    }

    /// Records new surface dimensions. Returns `true` if they changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let next = Viewport { width, height };
        if next == self.viewport {
            return false;
        }
        log::debug!(
            "Surface resized: {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            width,
            height
        );
        self.viewport = next;
        true
    }

    /// Derives the surface size from the window size: full width, height
    /// minus the toolbar.
    pub fn on_window_resize(&mut self, window_width: u32, window_height: u32) -> bool {
        self.resize(
            window_width,
            window_height.saturating_sub(self.toolbar_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tracker = ViewportTracker::default();
        assert_eq!(tracker.viewport(), Viewport::default());
    }

    #[test]
    fn resize_reports_changes_only() {
        let mut tracker = ViewportTracker::default();
        assert!(tracker.resize(800, 600));
        assert!(!tracker.resize(800, 600));
        assert!(tracker.resize(1024, 600));
    }

    #[test]
    fn window_resize_reserves_toolbar() {
        let mut tracker = ViewportTracker::default();
        tracker.on_window_resize(1280, 720);
        assert_eq!(
            tracker.viewport(),
            Viewport {
                width: 1280,
                height: 670
            }
        );
    }

    #[test]
    fn tiny_window_saturates_to_zero_height() {
        let mut tracker = ViewportTracker::new(80);
        tracker.on_window_resize(300, 40);
        assert_eq!(tracker.viewport().height, 0);
    }
}
