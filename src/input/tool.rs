//! Tool selection and pointer-event gating.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Toolbar tool selection.
///
/// The active tool determines how pointer events on the surface are
/// interpreted. Only [`Tool::DrawPolygon`] has behavior today; the zoom and pan
/// slots are selectable but swallow pointer events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Zoom into the surface
    ZoomIn,
    /// Zoom out of the surface
    ZoomOut,
    /// Pan the surface
    Pan,
    /// Click vertices to sketch a polygon (default)
    #[default]
    DrawPolygon,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::ZoomIn, Tool::ZoomOut, Tool::Pan, Tool::DrawPolygon];

    /// Toolbar name used by the UI and config files.
    pub fn name(self) -> &'static str {
        match self {
            Tool::ZoomIn => "zoom-in",
            Tool::ZoomOut => "zoom-out",
            Tool::Pan => "pan",
            Tool::DrawPolygon => "draw-polygon",
        }
    }

    /// Whether pointer events on the surface feed the polygon sketcher.
    pub fn draws_polygons(self) -> bool {
        matches!(self, Tool::DrawPolygon)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by tool selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("unknown tool '{0}' (expected one of: zoom-in, zoom-out, pan, draw-polygon)")]
    Unknown(String),
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ToolError::Unknown(s.to_string()))
    }
}

/// Holds the active tool and decides which pointer events reach the sketcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRouter {
    active: Tool,
}

impl ToolRouter {
    pub fn new(active: Tool) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Tool {
        self.active
    }

    /// Makes `tool` active. Returns `true` if the active tool changed.
    pub fn select(&mut self, tool: Tool) -> bool {
        if self.active == tool {
            return false;
        }
        log::debug!("Tool changed: {} -> {}", self.active, tool);
        self.active = tool;
        true
    }

    /// Parses and selects a tool by toolbar name.
    ///
    /// Unknown names leave the active tool unchanged.
    pub fn select_by_name(&mut self, name: &str) -> Result<bool, ToolError> {
        let tool = name.parse::<Tool>()?;
        Ok(self.select(tool))
    }

    /// Whether pointer events should be forwarded to the sketcher.
    pub fn routes_to_drawing(&self) -> bool {
        self.active.draws_polygons()
    }
}
