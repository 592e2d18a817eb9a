//! Levels: named elevation datums.

use std::fmt;

/// One named level at a fixed elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    elevation: f64,
    label: String,
}

impl Level {
    /// Creates a level. Generated levels come from
    /// [`LayoutGenerator::generate_levels`](crate::LayoutGenerator::generate_levels);
    /// this is for describing levels a document already holds.
    pub fn new(elevation: f64, label: impl Into<String>) -> Self {
        Self {
            elevation,
            label: label.into(),
        }
    }

    /// Elevation above the zero datum, in input units.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" @ {}", self.label, self.elevation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_accessors() {
        let level = Level::new(8.0, "Level 3");
        assert_eq!(level.elevation(), 8.0);
        assert_eq!(level.label(), "Level 3");
        assert_eq!(level.to_string(), "\"Level 3\" @ 8");
    }
}
