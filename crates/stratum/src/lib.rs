//! Stratum - labeled grid and level layouts for building-design models.
//!
//! Parameter parsing, layout generation, and document writing for regular
//! structural grids and level stacks. The layout algorithm itself lives in
//! [`stratum_core`]; this crate connects it to raw input, configuration and
//! document writers.

pub mod color;
pub mod config;
pub mod document;
pub mod export;
pub mod input;

mod error;

pub use stratum_core::{
    GridParams, LayoutError, LayoutGenerator, LayoutRequest, LayoutResult, LevelParams, MAX_COUNT,
    geometry, grid, level, naming,
};

pub use error::StratumError;

use log::{debug, info, trace};

use config::AppConfig;
use document::apply_layout;
use export::SvgPlanWriter;

/// Builder for generating and rendering Stratum layouts.
///
/// # Examples
///
/// ```rust,no_run
/// use stratum::{LayoutBuilder, config::AppConfig, input::RawLayoutInput};
///
/// let input = RawLayoutInput {
///     vert_count: "3".into(),
///     vert_distance: "6000".into(),
///     vert_range: "18000".into(),
///     hor_count: "4".into(),
///     hor_distance: "6000".into(),
///     hor_range: "18000".into(),
///     level_count: "5".into(),
///     level_distance: "3300".into(),
///     level_range: "1".into(),
/// };
///
/// let builder = LayoutBuilder::new(AppConfig::default());
///
/// // Convert raw text and generate the layout
/// let request = input.parse().expect("Invalid parameters");
/// let layout = builder.generate(&request).expect("Failed to generate");
///
/// // Render a plan preview
/// let svg = builder.render_svg(&layout).expect("Failed to render");
/// println!("{svg}");
/// ```
#[derive(Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including naming and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate the grids and levels for a request.
    ///
    /// # Errors
    ///
    /// Returns `StratumError::Layout` if the layout cannot be generated.
    pub fn generate(&self, request: &LayoutRequest) -> Result<LayoutResult, StratumError> {
        info!("Generating layout");

        let generator = LayoutGenerator::new(self.config.naming().clone());
        let layout = generator.build_layout(request)?;

        debug!(elements = layout.len(); "Layout generated successfully");
        trace!(layout:?; "Generated layout");

        Ok(layout)
    }

    /// Render a layout to an SVG plan preview.
    ///
    /// The layout is written to an [`SvgPlanWriter`] in one transaction and
    /// the committed result is rendered.
    ///
    /// # Errors
    ///
    /// Returns `StratumError::Config` for invalid style settings and
    /// `StratumError::Write` if the writer rejects an element.
    pub fn render_svg(&self, layout: &LayoutResult) -> Result<String, StratumError> {
        let mut writer = SvgPlanWriter::new(self.config.style())?;
        apply_layout(&mut writer, layout)?;

        let svg = writer.to_svg_string();
        info!("SVG rendered successfully");
        Ok(svg)
    }
}
