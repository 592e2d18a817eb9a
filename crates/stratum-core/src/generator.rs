//! The layout generation algorithm.
//!
//! [`LayoutGenerator`] turns counts, spacings and extents into named grid
//! lines and levels. It keeps no state between calls: the same input always
//! yields the same output, and any number of callers may share one generator.
//!
//! # Grid placement
//!
//! Each family walks an anchor point along the axis perpendicular to its
//! lines:
//!
//! ```text
//!   Horizontal (A, B, ...)             Vertical (1, 2, ...)
//!
//!   (-d, 2d) ───────────── B           ▲     ▲     ▲
//!   (-d,  d) ───────────── A           │     │     │  range
//!                                      │     │     │
//!                                    (0,0) (d,0) (2d,0)
//! ```
//!
//! Vertical lines start at the origin and step by `+distance` along x.
//! Horizontal lines start at `(-distance, distance)` and step by `+distance`
//! along y.

use log::{debug, info, trace};

use crate::{
    error::{LayoutError, ensure_positive},
    geometry::Point,
    grid::{GridLine, Orientation},
    layout::LayoutResult,
    level::Level,
    naming::{Naming, letter_label, number_label},
    request::{LayoutRequest, MAX_COUNT, ensure_count, validate_grid_params},
};

/// Generates grid and level layouts.
///
/// # Examples
///
/// ```
/// use stratum_core::{GridParams, LayoutGenerator, LayoutRequest, LevelParams};
///
/// let request = LayoutRequest::new(
///     GridParams::new(3, 10.0, 20.0),
///     GridParams::new(2, 5.0, 15.0),
///     LevelParams::new(3, 4.0, 1.0),
/// )
/// .unwrap();
///
/// let layout = LayoutGenerator::default().build_layout(&request).unwrap();
/// assert_eq!(layout.vertical_grids().len(), 3);
/// assert_eq!(layout.horizontal_grids()[1].label(), "B");
/// assert_eq!(layout.levels()[0].label(), "Level 2");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutGenerator {
    naming: Naming,
}

impl LayoutGenerator {
    /// Creates a generator with the given naming options.
    pub fn new(naming: Naming) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Generates one family of grid lines.
    ///
    /// # Arguments
    ///
    /// * `distance` - Spacing between consecutive lines.
    /// * `count` - Number of lines to produce.
    /// * `range` - Length of every line.
    /// * `orientation` - Which family to produce.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidParameter`] if `count` is zero or above
    ///   [`MAX_COUNT`], `distance` or
    ///   `range` is not a positive finite number, or the horizontal count
    ///   cannot be lettered under the configured scheme.
    /// - [`LayoutError::GridCreationFailed`] if a computed line collapses to a
    ///   point or leaves the representable range.
    pub fn generate_grids(
        &self,
        distance: f64,
        count: u32,
        range: f64,
        orientation: Orientation,
    ) -> Result<Vec<GridLine>, LayoutError> {
        validate_grid_params(orientation, count, distance, range)?;
        if orientation == Orientation::Horizontal {
            self.naming.check_horizontal_count(count)?;
        }

        debug!(orientation:%, count, distance, range; "Generating grids");

        let mut anchor = match orientation {
            Orientation::Vertical => Point::default(),
            Orientation::Horizontal => Point::new(-distance, distance),
        };

        let mut grids = Vec::with_capacity(count as usize);
        for index in 0..count {
            let (end, label) = match orientation {
                Orientation::Vertical => (anchor.offset(0.0, range), number_label(index)),
                Orientation::Horizontal => (anchor.offset(range, 0.0), letter_label(index)),
            };

            let grid = GridLine::new(orientation, anchor, end, label);
            check_grid(&grid, index)?;
            trace!(grid:%; "Grid created");
            grids.push(grid);

            anchor = match orientation {
                Orientation::Vertical => anchor.offset(distance, 0.0),
                Orientation::Horizontal => anchor.offset(0.0, distance),
            };
        }

        Ok(grids)
    }

    /// Generates the level stack.
    ///
    /// Elevations are `spacing, 2 * spacing, ..., count * spacing`; the zero
    /// datum is never generated. `range` is accepted but does not influence
    /// any elevation.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::LevelCreationFailed`] if `count` is zero, an elevation
    ///   overflows or stops increasing, or a level number overflows.
    /// - [`LayoutError::InvalidParameter`] if `count` is above [`MAX_COUNT`]
    ///   or `spacing` is not a positive finite number.
    pub fn generate_levels(
        &self,
        spacing: f64,
        count: u32,
        range: f64,
    ) -> Result<Vec<Level>, LayoutError> {
        if count == 0 {
            return Err(LayoutError::LevelCreationFailed {
                index: 0,
                reason: "at least one level must be requested".to_string(),
            });
        }
        ensure_count("levels.count", count)?;
        ensure_positive("levels.spacing", spacing)?;

        debug!(count, spacing, range; "Generating levels");

        let mut levels: Vec<Level> = Vec::with_capacity(count as usize);
        let mut elevation = spacing;
        for index in 0..count {
            if !elevation.is_finite() {
                return Err(LayoutError::LevelCreationFailed {
                    index,
                    reason: "elevation is not representable".to_string(),
                });
            }
            if levels.last().is_some_and(|previous| elevation <= previous.elevation()) {
                return Err(LayoutError::LevelCreationFailed {
                    index,
                    reason: format!("elevation {elevation} does not rise above the level below"),
                });
            }

            let label = self.naming.level_label(index).ok_or_else(|| {
                LayoutError::LevelCreationFailed {
                    index,
                    reason: "level number overflows".to_string(),
                }
            })?;

            let level = Level::new(elevation, label);
            trace!(level:%; "Level created");
            levels.push(level);

            elevation += spacing;
        }

        Ok(levels)
    }

    /// Builds the complete layout for a request.
    ///
    /// Generates vertical grids, then horizontal grids, then levels. The first
    /// failure is returned and nothing else is produced.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`generate_grids`](Self::generate_grids) or
    /// [`generate_levels`](Self::generate_levels).
    pub fn build_layout(&self, request: &LayoutRequest) -> Result<LayoutResult, LayoutError> {
        let vertical = request.vertical();
        let horizontal = request.horizontal();
        let levels = request.levels();

        let vertical_grids = self.generate_grids(
            vertical.distance(),
            vertical.count(),
            vertical.range(),
            Orientation::Vertical,
        )?;
        let horizontal_grids = self.generate_grids(
            horizontal.distance(),
            horizontal.count(),
            horizontal.range(),
            Orientation::Horizontal,
        )?;
        let levels = self.generate_levels(levels.spacing(), levels.count(), levels.range())?;

        info!(
            vertical_grids = vertical_grids.len(),
            horizontal_grids = horizontal_grids.len(),
            levels = levels.len();
            "Layout generated"
        );

        Ok(LayoutResult::new(vertical_grids, horizontal_grids, levels))
    }
}

fn check_grid(grid: &GridLine, index: u32) -> Result<(), LayoutError> {
    let failure = |reason: &str| LayoutError::GridCreationFailed {
        orientation: grid.orientation(),
        index,
        reason: reason.to_string(),
    };

    if !grid.start().is_finite() || !grid.end().is_finite() {
        return Err(failure("endpoint is not representable"));
    }
    if grid.is_degenerate() {
        return Err(failure("start and end points coincide"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        naming::LetterScheme,
        request::{GridParams, LevelParams},
    };

    fn endpoints(grids: &[GridLine]) -> Vec<(Point, Point, &str)> {
        grids
            .iter()
            .map(|grid| (grid.start(), grid.end(), grid.label()))
            .collect()
    }

    #[test]
    fn test_vertical_grids() {
        let grids = LayoutGenerator::default()
            .generate_grids(10.0, 3, 20.0, Orientation::Vertical)
            .unwrap();

        assert_eq!(
            endpoints(&grids),
            vec![
                (Point::new(0.0, 0.0), Point::new(0.0, 20.0), "1"),
                (Point::new(10.0, 0.0), Point::new(10.0, 20.0), "2"),
                (Point::new(20.0, 0.0), Point::new(20.0, 20.0), "3"),
            ]
        );
        assert!(grids.iter().all(|grid| grid.orientation() == Orientation::Vertical));
    }

    #[test]
    fn test_horizontal_grids() {
        let grids = LayoutGenerator::default()
            .generate_grids(5.0, 2, 15.0, Orientation::Horizontal)
            .unwrap();

        assert_eq!(
            endpoints(&grids),
            vec![
                (Point::new(-5.0, 5.0), Point::new(10.0, 5.0), "A"),
                (Point::new(-5.0, 10.0), Point::new(10.0, 10.0), "B"),
            ]
        );
        assert!(grids.iter().all(|grid| grid.orientation() == Orientation::Horizontal));
    }

    #[test]
    fn test_single_grid() {
        let generator = LayoutGenerator::default();

        let vertical = generator
            .generate_grids(7.0, 1, 3.0, Orientation::Vertical)
            .unwrap();
        assert_eq!(endpoints(&vertical), vec![(Point::new(0.0, 0.0), Point::new(0.0, 3.0), "1")]);

        let horizontal = generator
            .generate_grids(7.0, 1, 3.0, Orientation::Horizontal)
            .unwrap();
        assert_eq!(
            endpoints(&horizontal),
            vec![(Point::new(-7.0, 7.0), Point::new(-4.0, 7.0), "A")]
        );
    }

    #[test]
    fn test_zero_distance_or_range_is_invalid() {
        let generator = LayoutGenerator::default();

        let err = generator
            .generate_grids(0.0, 3, 20.0, Orientation::Vertical)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                parameter: "vertical.distance",
                ..
            }
        ));

        let err = generator
            .generate_grids(5.0, 3, 0.0, Orientation::Horizontal)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                parameter: "horizontal.range",
                ..
            }
        ));

        let err = generator
            .generate_grids(5.0, 0, 10.0, Orientation::Horizontal)
            .unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_absorbed_range_is_grid_creation_failure() {
        // 1e-20 vanishes when added to -1e10, so the line would collapse.
        let err = LayoutGenerator::default()
            .generate_grids(1e10, 1, 1e-20, Orientation::Horizontal)
            .unwrap_err();

        assert_eq!(
            err,
            LayoutError::GridCreationFailed {
                orientation: Orientation::Horizontal,
                index: 0,
                reason: "start and end points coincide".to_string(),
            }
        );
    }

    #[test]
    fn test_overflowing_endpoint_is_grid_creation_failure() {
        let err = LayoutGenerator::default()
            .generate_grids(f64::MAX, 3, 1.0, Orientation::Vertical)
            .unwrap_err();

        assert!(matches!(
            err,
            LayoutError::GridCreationFailed {
                orientation: Orientation::Vertical,
                index: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_horizontal_labels_past_z() {
        let grids = LayoutGenerator::default()
            .generate_grids(1.0, 28, 10.0, Orientation::Horizontal)
            .unwrap();

        let labels: Vec<&str> = grids.iter().map(GridLine::label).collect();
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "AA");
        assert_eq!(labels[27], "AB");
    }

    #[test]
    fn test_strict_letters_reject_more_than_26() {
        let generator = LayoutGenerator::new(Naming::default().with_letters(LetterScheme::Strict));

        assert_eq!(
            generator
                .generate_grids(1.0, 26, 10.0, Orientation::Horizontal)
                .unwrap()
                .len(),
            26
        );

        let err = generator
            .generate_grids(1.0, 27, 10.0, Orientation::Horizontal)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                parameter: "horizontal.count",
                ..
            }
        ));

        // Vertical grids are numbered, so the letter limit does not apply.
        assert!(generator.generate_grids(1.0, 27, 10.0, Orientation::Vertical).is_ok());
    }

    #[test]
    fn test_levels() {
        let levels = LayoutGenerator::default().generate_levels(4.0, 3, 123.0).unwrap();

        let summary: Vec<(f64, &str)> = levels
            .iter()
            .map(|level| (level.elevation(), level.label()))
            .collect();
        assert_eq!(summary, vec![(4.0, "Level 2"), (8.0, "Level 3"), (12.0, "Level 4")]);
    }

    #[test]
    fn test_level_range_is_ignored() {
        let generator = LayoutGenerator::default();
        assert_eq!(
            generator.generate_levels(3.0, 4, 1.0).unwrap(),
            generator.generate_levels(3.0, 4, 9999.0).unwrap()
        );
    }

    #[test]
    fn test_single_level() {
        let levels = LayoutGenerator::default().generate_levels(2.5, 1, 1.0).unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].elevation(), 2.5);
        assert_eq!(levels[0].label(), "Level 2");
    }

    #[test]
    fn test_zero_levels_is_level_creation_failure() {
        let err = LayoutGenerator::default().generate_levels(4.0, 0, 1.0).unwrap_err();
        assert_eq!(err.code(), "level_creation_failed");
    }

    #[test]
    fn test_non_positive_spacing_is_invalid() {
        let err = LayoutGenerator::default().generate_levels(-4.0, 3, 1.0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                parameter: "levels.spacing",
                ..
            }
        ));
    }

    #[test]
    fn test_counts_above_limit_are_invalid_parameters() {
        let generator = LayoutGenerator::default();

        let err = generator
            .generate_grids(1.0, u32::MAX, 1.0, Orientation::Vertical)
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                parameter: "vertical.count",
                ..
            }
        ));

        let err = generator.generate_levels(1.0, MAX_COUNT + 1, 1.0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter {
                parameter: "levels.count",
                ..
            }
        ));
    }

    #[test]
    fn test_overflowing_elevation_is_level_creation_failure() {
        let err = LayoutGenerator::default()
            .generate_levels(f64::MAX, 3, 1.0)
            .unwrap_err();
        assert!(matches!(err, LayoutError::LevelCreationFailed { index: 1, .. }));
    }

    #[test]
    fn test_level_number_overflow_is_level_creation_failure() {
        let generator = LayoutGenerator::new(Naming::new(LetterScheme::Extended, "Level", u32::MAX));
        let err = generator.generate_levels(1.0, 2, 1.0).unwrap_err();
        assert!(matches!(err, LayoutError::LevelCreationFailed { index: 1, .. }));
    }

    #[test]
    fn test_custom_level_naming() {
        let generator = LayoutGenerator::new(Naming::new(LetterScheme::Extended, "Floor", 1));
        let levels = generator.generate_levels(3.0, 2, 1.0).unwrap();
        assert_eq!(levels[0].label(), "Floor 1");
        assert_eq!(levels[1].label(), "Floor 2");
    }

    #[test]
    fn test_build_layout() {
        let request = LayoutRequest::new(
            GridParams::new(3, 10.0, 20.0),
            GridParams::new(2, 5.0, 15.0),
            LevelParams::new(3, 4.0, 1.0),
        )
        .unwrap();

        let layout = LayoutGenerator::default().build_layout(&request).unwrap();

        assert_eq!(layout.vertical_grids().len(), 3);
        assert_eq!(layout.horizontal_grids().len(), 2);
        assert_eq!(layout.levels().len(), 3);
        assert_eq!(layout.len(), 8);
        assert!(!layout.is_empty());

        let labels: Vec<&str> = layout.grids().map(GridLine::label).collect();
        assert_eq!(labels, vec!["1", "2", "3", "A", "B"]);
    }

    #[test]
    fn test_build_layout_fails_fast() {
        let generator = LayoutGenerator::new(Naming::default().with_letters(LetterScheme::Strict));
        let request = LayoutRequest::new(
            GridParams::new(3, 10.0, 20.0),
            GridParams::new(30, 5.0, 15.0),
            LevelParams::new(3, 4.0, 1.0),
        )
        .unwrap();

        let err = generator.build_layout(&request).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
