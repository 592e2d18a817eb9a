//! Validated layout parameters.
//!
//! A [`LayoutRequest`] can only be obtained through [`LayoutRequest::new`],
//! which rejects non-positive counts, distances and ranges. Holding one means
//! the generator's preconditions are already met.
//!
//! Counts are capped at [`MAX_COUNT`] per family.

use crate::{
    error::{LayoutError, ensure_positive},
    grid::Orientation,
};

/// Largest number of grids or levels one family may request.
pub const MAX_COUNT: u32 = 10_000;

/// Parameters for one grid family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    count: u32,
    distance: f64,
    range: f64,
}

impl GridParams {
    /// # Arguments
    ///
    /// * `count` - Number of grid lines.
    /// * `distance` - Spacing between consecutive lines.
    /// * `range` - Length of every line.
    pub fn new(count: u32, distance: f64, range: f64) -> Self {
        Self {
            count,
            distance,
            range,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    fn validate(&self, orientation: Orientation) -> Result<(), LayoutError> {
        validate_grid_params(orientation, self.count, self.distance, self.range)
    }
}

/// Parameters for the level stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    count: u32,
    spacing: f64,
    range: f64,
}

impl LevelParams {
    /// # Arguments
    ///
    /// * `count` - Number of levels.
    /// * `spacing` - Elevation step; also the elevation of the first level.
    /// * `range` - Accepted for parity with the grid families; not used for placement.
    pub fn new(count: u32, spacing: f64, range: f64) -> Self {
        Self {
            count,
            spacing,
            range,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The level range as supplied. No elevation depends on it.
    pub fn range(&self) -> f64 {
        self.range
    }

    fn validate(&self) -> Result<(), LayoutError> {
        ensure_count("levels.count", self.count)?;
        ensure_positive("levels.spacing", self.spacing)?;
        ensure_positive("levels.range", self.range)
    }
}

/// The full, validated input for one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    vertical: GridParams,
    horizontal: GridParams,
    levels: LevelParams,
}

impl LayoutRequest {
    /// Validates and bundles the parameters of all three families.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] for the first field that is
    /// zero, negative or not finite, checking vertical, horizontal and level
    /// parameters in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratum_core::{GridParams, LayoutRequest, LevelParams};
    ///
    /// let request = LayoutRequest::new(
    ///     GridParams::new(3, 10.0, 20.0),
    ///     GridParams::new(2, 5.0, 15.0),
    ///     LevelParams::new(3, 4.0, 1.0),
    /// );
    /// assert!(request.is_ok());
    ///
    /// let invalid = LayoutRequest::new(
    ///     GridParams::new(3, 0.0, 20.0),
    ///     GridParams::new(2, 5.0, 15.0),
    ///     LevelParams::new(3, 4.0, 1.0),
    /// );
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        vertical: GridParams,
        horizontal: GridParams,
        levels: LevelParams,
    ) -> Result<Self, LayoutError> {
        vertical.validate(Orientation::Vertical)?;
        horizontal.validate(Orientation::Horizontal)?;
        levels.validate()?;

        Ok(Self {
            vertical,
            horizontal,
            levels,
        })
    }

    pub fn vertical(&self) -> GridParams {
        self.vertical
    }

    pub fn horizontal(&self) -> GridParams {
        self.horizontal
    }

    pub fn levels(&self) -> LevelParams {
        self.levels
    }
}

/// Checks one grid family's parameters, naming fields after the family.
pub(crate) fn validate_grid_params(
    orientation: Orientation,
    count: u32,
    distance: f64,
    range: f64,
) -> Result<(), LayoutError> {
    let [count_field, distance_field, range_field] = match orientation {
        Orientation::Vertical => ["vertical.count", "vertical.distance", "vertical.range"],
        Orientation::Horizontal => ["horizontal.count", "horizontal.distance", "horizontal.range"],
    };
    ensure_count(count_field, count)?;
    ensure_positive(distance_field, distance)?;
    ensure_positive(range_field, range)
}

pub(crate) fn ensure_count(parameter: &'static str, count: u32) -> Result<(), LayoutError> {
    if count == 0 {
        return Err(LayoutError::invalid_parameter(parameter, "must be at least 1"));
    }
    if count > MAX_COUNT {
        return Err(LayoutError::invalid_parameter(
            parameter,
            format!("must be at most {MAX_COUNT}, got {count}"),
        ));
    }
    Ok(())
}
