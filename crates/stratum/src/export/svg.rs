//! SVG plan preview.
//!
//! [`SvgPlanWriter`] is a [`DocumentWriter`] whose committed contents can be
//! rendered as an SVG drawing: grid lines in plan with a label bubble at one
//! end, and a side elevation strip with one marker per level.
//!
//! ```text
//!   ┌───────────────────────────────┬──────────────────┐
//!   │   (1)   (2)   (3)             │ ──── Level 3 (+8)│
//!   │    ┆     ┆     ┆              │ ──── Level 2 (+4)│
//!   │ (B)┼┄┄┄┄┄┼┄┄┄┄┄┼┄             │ ┄┄┄┄ ±0          │
//!   │ (A)┼┄┄┄┄┄┼┄┄┄┄┄┼┄             │                  │
//!   └───────────────────────────────┴──────────────────┘
//! ```

use log::{debug, info};
use svg::{
    Document,
    node::element::{Circle, Group, Line, Rectangle, Text},
};

use stratum_core::{
    geometry::Point,
    grid::{GridLine, Orientation},
    level::Level,
};

use crate::{
    color::Color,
    config::StyleConfig,
    document::{DocumentWriter, MemoryDocument, WriteError},
    error::StratumError,
};

const MARGIN: f64 = 20.0;
const STRIP_GAP: f64 = 40.0;
const LEVEL_MARKER_WIDTH: f64 = 60.0;
const LEVEL_TEXT_WIDTH: f64 = 120.0;
const FONT_FAMILY: &str = "sans-serif";
const GRID_DASH: &str = "12,4,2,4";

/// Style settings resolved and checked once, up front.
#[derive(Debug, Clone, Copy)]
struct ResolvedStyle {
    background: Color,
    grid: Color,
    level: Color,
    scale: f64,
    bubble_radius: f64,
}

impl ResolvedStyle {
    fn from_config(style: &StyleConfig) -> Result<Self, StratumError> {
        Ok(Self {
            background: style.background_color().map_err(StratumError::Config)?,
            grid: style.grid_color().map_err(StratumError::Config)?,
            level: style.level_color().map_err(StratumError::Config)?,
            scale: style.scale().map_err(StratumError::Config)?,
            bubble_radius: style.bubble_radius().map_err(StratumError::Config)?,
        })
    }
}

/// Model extents of the committed grids.
#[derive(Debug, Clone, Copy)]
struct PlanExtents {
    min: Point,
    max: Point,
}

impl PlanExtents {
    fn of(grids: &[GridLine]) -> Option<Self> {
        let mut points = grids.iter().flat_map(|grid| [grid.start(), grid.end()]);
        let first = points.next()?;
        Some(points.fold(Self { min: first, max: first }, |acc, point| Self {
            min: Point::new(acc.min.x().min(point.x()), acc.min.y().min(point.y())),
            max: Point::new(acc.max.x().max(point.x()), acc.max.y().max(point.y())),
        }))
    }

    fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}

/// A document writer that renders its committed contents as SVG.
#[derive(Debug)]
pub struct SvgPlanWriter {
    document: MemoryDocument,
    style: ResolvedStyle,
}

impl SvgPlanWriter {
    /// Creates an empty writer.
    ///
    /// # Errors
    ///
    /// Returns [`StratumError::Config`] if a style setting is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, StratumError> {
        Ok(Self {
            document: MemoryDocument::new(),
            style: ResolvedStyle::from_config(style)?,
        })
    }

    /// Renders the committed grids and levels.
    pub fn render(&self) -> Document {
        let style = &self.style;
        let pad = MARGIN + 2.0 * style.bubble_radius;
        let grids = self.document.grids();
        let levels = self.document.levels();

        let extents = PlanExtents::of(grids);
        let plan_width = extents.map_or(0.0, |e| e.width() * style.scale);
        let plan_height = extents.map_or(0.0, |e| e.height() * style.scale);

        let top_elevation = levels
            .iter()
            .map(Level::elevation)
            .fold(0.0_f64, f64::max);
        let strip_height = top_elevation * style.scale;
        let strip_width = if levels.is_empty() {
            0.0
        } else {
            STRIP_GAP + LEVEL_MARKER_WIDTH + LEVEL_TEXT_WIDTH
        };

        let width = plan_width + strip_width + 2.0 * pad;
        let height = plan_height.max(strip_height) + 2.0 * pad;
        debug!(width, height, grids = grids.len(), levels = levels.len(); "Rendering plan preview");

        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", style.background)
            .set("fill-opacity", style.background.alpha());

        let mut plan = Group::new().set("id", "grids");
        if let Some(extents) = extents {
            let to_canvas = |point: Point| {
                Point::new(
                    pad + (point.x() - extents.min.x()) * style.scale,
                    pad + (extents.max.y() - point.y()) * style.scale,
                )
            };
            for grid in grids {
                plan = plan.add(self.render_grid(grid, to_canvas));
            }
        }

        let mut elevation = Group::new().set("id", "levels");
        if !levels.is_empty() {
            let strip_x = pad + plan_width + STRIP_GAP;
            let datum_y = pad + strip_height;
            elevation = elevation.add(self.render_level_marker(strip_x, datum_y, "±0", true));
            for level in levels {
                let y = datum_y - level.elevation() * style.scale;
                let text = format!("{} (+{})", level.label(), level.elevation());
                elevation = elevation.add(self.render_level_marker(strip_x, y, &text, false));
            }
        }

        Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
            .add(background)
            .add(plan)
            .add(elevation)
    }

    /// Renders the committed contents as SVG text.
    pub fn to_svg_string(&self) -> String {
        let svg = self.render().to_string();
        info!(bytes = svg.len(); "Plan preview rendered");
        svg
    }

    /// The underlying document holding committed elements.
    pub fn document(&self) -> &MemoryDocument {
        &self.document
    }

    fn render_grid(&self, grid: &GridLine, to_canvas: impl Fn(Point) -> Point) -> Group {
        let style = &self.style;
        let start = to_canvas(grid.start());
        let end = to_canvas(grid.end());

        // Bubble sits past the top end of vertical grids and the left end of
        // horizontal ones.
        let bubble = match grid.orientation() {
            Orientation::Vertical => end.offset(0.0, -style.bubble_radius),
            Orientation::Horizontal => start.offset(-style.bubble_radius, 0.0),
        };

        let line = Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y())
            .set("stroke", style.grid)
            .set("stroke-opacity", style.grid.alpha())
            .set("stroke-width", 1.0)
            .set("stroke-dasharray", GRID_DASH);

        let circle = Circle::new()
            .set("cx", bubble.x())
            .set("cy", bubble.y())
            .set("r", style.bubble_radius)
            .set("fill", "none")
            .set("stroke", style.grid)
            .set("stroke-width", 1.0);

        let label = Text::new(grid.label())
            .set("x", bubble.x())
            .set("y", bubble.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", style.bubble_radius)
            .set("fill", style.grid);

        Group::new()
            .set("class", format!("grid {}", grid.orientation()))
            .set("data-label", grid.label())
            .add(line)
            .add(circle)
            .add(label)
    }

    fn render_level_marker(&self, x: f64, y: f64, text: &str, datum: bool) -> Group {
        let color = self.style.level;

        let mut line = Line::new()
            .set("x1", x)
            .set("y1", y)
            .set("x2", x + LEVEL_MARKER_WIDTH)
            .set("y2", y)
            .set("stroke", color)
            .set("stroke-opacity", color.alpha())
            .set("stroke-width", 1.5);
        if datum {
            line = line.set("stroke-dasharray", "4,4");
        }

        let label = Text::new(text)
            .set("x", x + LEVEL_MARKER_WIDTH + 6.0)
            .set("y", y)
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", 12.0)
            .set("fill", color);

        Group::new()
            .set("class", if datum { "datum" } else { "level" })
            .add(line)
            .add(label)
    }
}

impl DocumentWriter for SvgPlanWriter {
    fn begin(&mut self, name: &str) -> Result<(), WriteError> {
        self.document.begin(name)
    }

    fn insert_grid(&mut self, grid: &GridLine) -> Result<(), WriteError> {
        self.document.insert_grid(grid)
    }

    fn insert_level(&mut self, level: &Level) -> Result<(), WriteError> {
        self.document.insert_level(level)
    }

    fn commit(&mut self) -> Result<(), WriteError> {
        self.document.commit()
    }

    fn rollback(&mut self) {
        self.document.rollback();
    }
}
