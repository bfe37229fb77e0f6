//! Input handling and tool routing.
//!
//! This module translates backend pointer, toolbar and resize events into
//! sketching actions. It maps screen positions into drawing space, gates
//! pointer events on the active tool, and owns the polygon sketching state.

pub mod mapper;
pub mod state;
pub mod tool;
pub mod viewport;

// Re-export commonly used types at module level
pub use mapper::{CoordinateMapper, MapError};
pub use state::{InputSettings, InputState};
pub use tool::{Tool, ToolError, ToolRouter};
pub use viewport::{Viewport, ViewportTracker};
