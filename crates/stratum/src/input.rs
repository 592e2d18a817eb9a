//! Conversion of raw text parameters into a [`LayoutRequest`].
//!
//! The layout core never sees text. Whatever collects parameters (a CLI, a
//! form, a batch file) fills a [`RawLayoutInput`] with the nine values as
//! typed and calls [`RawLayoutInput::parse`].

use log::debug;

use stratum_core::{GridParams, LayoutRequest, LevelParams};

use crate::error::StratumError;

/// The nine layout parameters as entered, before any conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLayoutInput {
    pub vert_count: String,
    pub vert_distance: String,
    pub vert_range: String,
    pub hor_count: String,
    pub hor_distance: String,
    pub hor_range: String,
    pub level_count: String,
    pub level_distance: String,
    pub level_range: String,
}

impl RawLayoutInput {
    /// Converts and validates the raw values.
    ///
    /// Fields are converted in declaration order and the first failure is
    /// reported. Counts are unsigned integers. Real values accept `.` as the
    /// decimal separator, or `,` when no `.` is present.
    ///
    /// # Errors
    ///
    /// - [`StratumError::ParameterFormat`] if a value is not a number.
    /// - [`StratumError::Layout`] if a number breaks a precondition such as a
    ///   zero count or a negative distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratum::input::RawLayoutInput;
    ///
    /// let input = RawLayoutInput {
    ///     vert_count: "3".into(),
    ///     vert_distance: "10".into(),
    ///     vert_range: "20".into(),
    ///     hor_count: "2".into(),
    ///     hor_distance: "5".into(),
    ///     hor_range: "15".into(),
    ///     level_count: "3".into(),
    ///     level_distance: "4".into(),
    ///     level_range: "1".into(),
    /// };
    ///
    /// let request = input.parse().unwrap();
    /// assert_eq!(request.vertical().count(), 3);
    /// ```
    pub fn parse(&self) -> Result<LayoutRequest, StratumError> {
        let vertical = GridParams::new(
            parse_count("vert_count", &self.vert_count)?,
            parse_real("vert_distance", &self.vert_distance)?,
            parse_real("vert_range", &self.vert_range)?,
        );
        let horizontal = GridParams::new(
            parse_count("hor_count", &self.hor_count)?,
            parse_real("hor_distance", &self.hor_distance)?,
            parse_real("hor_range", &self.hor_range)?,
        );
        let levels = LevelParams::new(
            parse_count("level_count", &self.level_count)?,
            parse_real("level_distance", &self.level_distance)?,
            parse_real("level_range", &self.level_range)?,
        );

        debug!(vertical:?, horizontal:?, levels:?; "Parsed layout parameters");

        Ok(LayoutRequest::new(vertical, horizontal, levels)?)
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, StratumError> {
    raw.trim()
        .parse()
        .map_err(|_| StratumError::parameter_format(field, raw))
}

fn parse_real(field: &'static str, raw: &str) -> Result<f64, StratumError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };

    normalized
        .parse()
        .map_err(|_| StratumError::parameter_format(field, raw))
}
