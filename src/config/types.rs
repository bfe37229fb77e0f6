//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Polygon sketching behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Distance in drawing units under which a click on the first vertex closes
    /// the polygon (valid range: 0.0 - 1000.0)
    #[serde(default = "default_close_threshold")]
    pub close_threshold: f64,

    /// Tool active at startup: "zoom-in", "zoom-out", "pan" or "draw-polygon"
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            close_threshold: default_close_threshold(),
            default_tool: default_tool(),
        }
    }
}

/// UI layout preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Height in pixels reserved for the toolbar above the drawing surface
    /// (valid range: 0 - 500)
    #[serde(default = "default_toolbar_height")]
    pub toolbar_height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toolbar_height: default_toolbar_height(),
        }
    }
}

/// Colors and stroke widths used when rendering the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Surface background color
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Outline color of finished polygons
    #[serde(default = "default_outline_color")]
    pub polygon_color: ColorSpec,

    /// Outline width of finished polygons in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_outline_width")]
    pub polygon_width: f64,

    /// Color of the in-progress polyline
    #[serde(default = "default_outline_color")]
    pub preview_color: ColorSpec,

    /// Width of the in-progress polyline in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_outline_width")]
    pub preview_width: f64,

    /// Color of the dashed guide from the last vertex to the pointer
    #[serde(default = "default_guide_color")]
    pub guide_color: ColorSpec,

    /// Width of the guide in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_guide_width")]
    pub guide_width: f64,

    /// Guide dash pattern as on/off lengths; empty for a solid guide
    #[serde(default = "default_guide_dash")]
    pub guide_dash: Vec<f64>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            polygon_color: default_outline_color(),
            polygon_width: default_outline_width(),
            preview_color: default_outline_color(),
            preview_width: default_outline_width(),
            guide_color: default_guide_color(),
            guide_width: default_guide_width(),
            guide_dash: default_guide_dash(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_close_threshold() -> f64 {
    crate::draw::DEFAULT_CLOSE_THRESHOLD
}

fn default_tool() -> String {
    "draw-polygon".to_string()
}

fn default_toolbar_height() -> u32 {
    crate::input::viewport::DEFAULT_TOOLBAR_HEIGHT
}

fn default_background() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_outline_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_outline_width() -> f64 {
    2.0
}

fn default_guide_color() -> ColorSpec {
    ColorSpec::named("gray")
}

fn default_guide_width() -> f64 {
    1.0
}

fn default_guide_dash() -> Vec<f64> {
    vec![5.0, 5.0]
}
