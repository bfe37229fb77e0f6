//! Configuration file support for polysketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/polysketch/config.toml`. Settings include the polygon close
//! threshold, the startup tool, toolbar layout and render styling.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, StyleConfig, UiConfig};

use crate::draw::{RenderStyle, StrokeStyle, color};
use crate::input::{InputSettings, Tool};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "polysketch";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// close_threshold = 10.0
/// default_tool = "draw-polygon"
///
/// [ui]
/// toolbar_height = 50
///
/// [style]
/// polygon_color = "black"
/// guide_dash = [5.0, 5.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Polygon sketching behavior
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// UI layout preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Render colors and stroke widths
    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default when not a number) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `close_threshold`: 0.0 - 1000.0
    /// - `toolbar_height`: 0 - 500
    /// - stroke widths: 0.5 - 20.0
    /// - `guide_dash`: finite, non-negative, not all zero
    fn validate_and_clamp(&mut self) {
        let defaults = Config::default();

        let threshold = &mut self.drawing.close_threshold;
        if !threshold.is_finite() {
            warn!("Invalid close_threshold {threshold}, using default");
            *threshold = defaults.drawing.close_threshold;
        } else if !(0.0..=1000.0).contains(&*threshold) {
            warn!("Invalid close_threshold {threshold:.1}, clamping to 0.0-1000.0 range");
            *threshold = threshold.clamp(0.0, 1000.0);
        }

        if self.drawing.default_tool.parse::<Tool>().is_err() {
            warn!(
                "Invalid default_tool '{}', falling back to '{}'",
                self.drawing.default_tool, defaults.drawing.default_tool
            );
            self.drawing.default_tool = defaults.drawing.default_tool.clone();
        }

        if self.ui.toolbar_height > 500 {
            warn!(
                "Invalid toolbar_height {}, clamping to 0-500 range",
                self.ui.toolbar_height
            );
            self.ui.toolbar_height = 500;
        }

        let style = &mut self.style;
        for (name, width, default) in [
            (
                "polygon_width",
                &mut style.polygon_width,
                defaults.style.polygon_width,
            ),
            (
                "preview_width",
                &mut style.preview_width,
                defaults.style.preview_width,
            ),
            (
                "guide_width",
                &mut style.guide_width,
                defaults.style.guide_width,
            ),
        ] {
            if !width.is_finite() {
                warn!("Invalid {name} {width}, using default");
                *width = default;
            } else if !(0.5..=20.0).contains(&*width) {
                warn!("Invalid {name} {width:.1}, clamping to 0.5-20.0 range");
                *width = width.clamp(0.5, 20.0);
            }
        }

        if style.guide_dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
            warn!(
                "Invalid guide_dash {:?}, falling back to default",
                style.guide_dash
            );
            style.guide_dash = defaults.style.guide_dash;
        } else if !style.guide_dash.is_empty() && style.guide_dash.iter().all(|d| *d == 0.0) {
            warn!("guide_dash is all zeros, drawing a solid guide");
            style.guide_dash.clear();
        }
    }

    /// Returns the directory holding the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_DIR))
    }

    /// Returns the path to the configuration file (`~/.config/polysketch/config.toml`).
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Session settings derived from the `[drawing]` and `[ui]` sections.
    pub fn input_settings(&self) -> InputSettings {
        InputSettings {
            close_threshold: self.drawing.close_threshold,
            default_tool: self.drawing.default_tool.parse().unwrap_or_default(),
            toolbar_height: self.ui.toolbar_height,
        }
    }

    /// Render styling derived from the `[style]` section.
    pub fn render_style(&self) -> RenderStyle {
        let fallback = RenderStyle::default();
        let style = &self.style;
        RenderStyle {
            background: style.background.to_color_or(fallback.background),
            polygon: StrokeStyle::solid(
                style.polygon_color.to_color_or(color::BLACK),
                style.polygon_width,
            ),
            preview: StrokeStyle::solid(
                style.preview_color.to_color_or(color::BLACK),
                style.preview_width,
            ),
            guide: StrokeStyle {
                color: style.guide_color.to_color_or(fallback.guide.color),
                width: style.guide_width,
                dash: style.guide_dash.clone(),
            },
        }
    }
}
