//! Sketching session state and toolbar/viewport handling.

use crate::draw::{DEFAULT_CLOSE_THRESHOLD, DrawStatus, Polygon, PolygonDrawState};
use crate::geometry::{Point, Transform};
use crate::input::mapper::CoordinateMapper;
use crate::input::tool::{Tool, ToolError, ToolRouter};
use crate::input::viewport::{DEFAULT_TOOLBAR_HEIGHT, Viewport, ViewportTracker};

/// Tunables applied when a session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSettings {
    /// Distance under which a click closes the sketch
    pub close_threshold: f64,
    /// Tool active when the session starts
    pub default_tool: Tool,
    /// Pixels reserved for the toolbar when deriving surface size from the window
    pub toolbar_height: u32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            default_tool: Tool::default(),
            toolbar_height: DEFAULT_TOOLBAR_HEIGHT,
        }
    }
}

/// Main input state containing all sketching session state.
///
/// This struct is the single owner of the active tool, the surface geometry,
/// the polygon sketcher and the cached pointer position. Backends feed it
/// events one at a time and read back polygons and preview geometry to render.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Active tool and pointer gating
    pub(super) router: ToolRouter,
    /// Screen to drawing-space mapping for the surface
    pub(super) mapper: CoordinateMapper,
    /// Surface dimensions
    pub(super) viewport: ViewportTracker,
    /// Sketch in progress plus finished polygons
    pub(super) drawing: PolygonDrawState,
    /// Last drawing-space pointer position (preview only)
    pub(super) pointer: Point,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(InputSettings::default())
    }
}

impl InputState {
    /// Creates a new InputState from `settings`.
    ///
    /// The surface has no size and no screen transform until the backend
    /// reports them (see `on_viewport_resize` and `on_layout`); pointer events
    /// arriving earlier are dropped.
    pub fn new(settings: InputSettings) -> Self {
        Self {
            router: ToolRouter::new(settings.default_tool),
            mapper: CoordinateMapper::default(),
            viewport: ViewportTracker::new(settings.toolbar_height),
            drawing: PolygonDrawState::new(settings.close_threshold),
            pointer: Point::ORIGIN,
            needs_redraw: true,
        }
    }

    // ------------------------------------------------------------------
    // Toolbar
    // ------------------------------------------------------------------

    /// Makes `tool` active. Selecting the active tool changes nothing.
    pub fn select_tool(&mut self, tool: Tool) -> bool {
        let changed = self.router.select(tool);
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Selects a tool by toolbar name (`zoom-in`, `zoom-out`, `pan`, `draw-polygon`).
    ///
    /// Unknown names are rejected and the active tool stays as it was.
    pub fn select_tool_by_name(&mut self, name: &str) -> Result<bool, ToolError> {
        let changed = self.router.select_by_name(name).inspect_err(|err| {
            log::warn!("Ignoring tool selection: {err}");
        })?;
        if changed {
            self.needs_redraw = true;
        }
        Ok(changed)
    }

    pub fn active_tool(&self) -> Tool {
        self.router.active()
    }

    // ------------------------------------------------------------------
    // Surface geometry
    // ------------------------------------------------------------------

    /// Records new surface dimensions.
    ///
    /// Recorded polygon and sketch coordinates are left untouched.
    pub fn on_viewport_resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.viewport.resize(width, height);
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Records a window resize, reserving the toolbar strip.
    pub fn on_window_resize(&mut self, window_width: u32, window_height: u32) -> bool {
        let changed = self.viewport.on_window_resize(window_width, window_height);
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Sets the surface's drawing-space to screen-space transform after layout.
    ///
    /// `None` marks the surface as not laid out; pointer events are dropped
    /// until a transform is provided again.
    pub fn on_layout(&mut self, transform: Option<Transform>) {
        self.mapper.set_transform(transform);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Finished polygons in closing order.
    pub fn polygons(&self) -> &[Polygon] {
        self.drawing.polygons()
    }

    /// Vertices of the sketch in progress (empty when idle).
    pub fn current_polygon(&self) -> &[Point] {
        self.drawing.current_polygon()
    }

    /// Last drawing-space pointer position seen while the draw tool was active.
    pub fn pointer_position(&self) -> Point {
        self.pointer
    }

    pub fn status(&self) -> DrawStatus {
        self.drawing.status()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_drawing()
    }

    pub fn drawing(&self) -> &PolygonDrawState {
        &self.drawing
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
}
