//! Drawing state, polygon storage and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types used for polygon sketching:
//! - [`PolygonDrawState`]: the sketch-in-progress state machine
//! - [`Polygon`] and [`Frame`]: finished rings in closing order
//! - [`Preview`]: live polyline + guide geometry for the sketch in progress
//! - [`Color`] and Cairo rendering functions

pub mod color;
pub mod frame;
pub mod polygon_state;
pub mod preview;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::{Frame, Polygon};
pub use polygon_state::{
    DEFAULT_CLOSE_THRESHOLD, DrawStatus, DrawingState, PolygonDrawState, VertexOutcome,
};
pub use preview::Preview;
pub use render::{
    RenderError, RenderStyle, StrokeStyle, export_png, fill_background, render_polygon,
    render_polygons, render_preview,
};
