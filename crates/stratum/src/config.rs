//! Configuration types for layout generation and preview rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as the CLI's TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining naming and style settings.
//! - [`Naming`] - Label schemes for grids and levels (from `stratum-core`).
//! - [`StyleConfig`] - Visual options for the SVG plan preview.
//!
//! # Example
//!
//! ```
//! # use stratum::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.naming().level_prefix(), "Level");
//! assert!(config.style().grid_color().is_ok());
//! ```

use serde::Deserialize;

pub use stratum_core::naming::{LetterScheme, Naming};

use crate::color::Color;

const DEFAULT_BACKGROUND_COLOR: &str = "white";
const DEFAULT_GRID_COLOR: &str = "#c0392b";
const DEFAULT_LEVEL_COLOR: &str = "#2c3e50";
const DEFAULT_SCALE: f64 = 1.0;
const DEFAULT_BUBBLE_RADIUS: f64 = 12.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Naming configuration section.
    #[serde(default)]
    naming: Naming,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from naming and style sections.
    pub fn new(naming: Naming, style: StyleConfig) -> Self {
        Self { naming, style }
    }

    /// Returns the naming configuration.
    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling for the SVG plan preview.
///
/// Colors are kept as strings until rendering so that a bad value is
/// reported where it is used, with the offending setting named.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    grid_color: Option<String>,
    level_color: Option<String>,
    /// Pixels per model unit.
    scale: f64,
    /// Radius of the label bubble at each grid end, in pixels.
    bubble_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            grid_color: None,
            level_color: None,
            scale: DEFAULT_SCALE,
            bubble_radius: DEFAULT_BUBBLE_RADIUS,
        }
    }
}

impl StyleConfig {
    /// Returns a copy with the given scale in pixels per model unit.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the given grid color string.
    pub fn with_grid_color(mut self, color: impl Into<String>) -> Self {
        self.grid_color = Some(color.into());
        self
    }

    /// Background color of the preview.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background_color", self.background_color.as_deref(), DEFAULT_BACKGROUND_COLOR)
    }

    /// Stroke and bubble color for grid lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn grid_color(&self) -> Result<Color, String> {
        parse_color("grid_color", self.grid_color.as_deref(), DEFAULT_GRID_COLOR)
    }

    /// Stroke and text color for level markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn level_color(&self) -> Result<Color, String> {
        parse_color("level_color", self.level_color.as_deref(), DEFAULT_LEVEL_COLOR)
    }

    /// Pixels per model unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number.
    pub fn scale(&self) -> Result<f64, String> {
        positive("scale", self.scale)
    }

    /// Label bubble radius in pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number.
    pub fn bubble_radius(&self) -> Result<f64, String> {
        positive("bubble_radius", self.bubble_radius)
    }
}

fn parse_color(setting: &str, configured: Option<&str>, default: &str) -> Result<Color, String> {
    Color::new(configured.unwrap_or(default))
        .map_err(|err| format!("Invalid {setting} in config: {err}"))
}

fn positive(setting: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("Invalid {setting} in config: must be a positive number, got {value}"))
    }
}
