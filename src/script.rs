//! JSON event scripts for driving an [`InputState`] without a windowing system.
//!
//! A script is a JSON array of events, each tagged by its `"event"` field:
//!
//! ```json
//! [
//!   { "event": "window_resize", "width": 800, "height": 650 },
//!   { "event": "layout", "transform": [1, 0, 0, 1, 0, 50] },
//!   { "event": "tool", "name": "draw-polygon" },
//!   { "event": "move", "x": 10, "y": 60 },
//!   { "event": "click", "x": 10, "y": 60 }
//! ]
//! ```
//!
//! Pointer coordinates are screen space; `layout` provides the surface
//! transform that maps drawing space onto the screen.

use crate::geometry::{Point, Transform};
use crate::input::InputState;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One recorded UI event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Drawing surface resized to an explicit size
    Resize { width: u32, height: u32 },
    /// Window resized; the surface loses the toolbar strip
    WindowResize { width: u32, height: u32 },
    /// Surface laid out with a drawing-to-screen transform (`null` clears it)
    Layout { transform: Option<Transform> },
    /// Toolbar button pressed
    Tool { name: String },
    /// Pointer moved, screen coordinates
    Move { x: f64, y: f64 },
    /// Primary click, screen coordinates
    Click { x: f64, y: f64 },
}

/// Errors raised while reading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Counters describing what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied
    pub events: usize,
    /// Clicks that reached the sketcher
    pub accepted_clicks: usize,
    /// Clicks dropped by the tool gate or an unusable surface transform
    pub dropped_clicks: usize,
    /// Tool selections rejected for unknown names
    pub rejected_tools: usize,
}

/// Parses a script from JSON text.
pub fn parse(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Applies `events` to `state` in order.
///
/// Rejected tool names are logged and skipped, like a toolbar ignoring an
/// unknown button; the rest of the script keeps running.
pub fn replay(state: &mut InputState, events: &[ScriptEvent]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for event in events {
        log::trace!("Replaying {:?}", event);
        match event {
            ScriptEvent::Resize { width, height } => {
                state.on_viewport_resize(*width, *height);
            }
            ScriptEvent::WindowResize { width, height } => {
                state.on_window_resize(*width, *height);
            }
            ScriptEvent::Layout { transform } => state.on_layout(*transform),
            ScriptEvent::Tool { name } => {
                if state.select_tool_by_name(name).is_err() {
                    summary.rejected_tools += 1;
                }
            }
            ScriptEvent::Move { x, y } => {
                state.on_pointer_move(Point::new(*x, *y));
            }
            ScriptEvent::Click { x, y } => {
                if state.on_pointer_click(Point::new(*x, *y)).is_some() {
                    summary.accepted_clicks += 1;
                } else {
                    summary.dropped_clicks += 1;
                }
            }
        }
        summary.events += 1;
    }

    log::debug!("Replay finished: {:?}", summary);
    summary
}
