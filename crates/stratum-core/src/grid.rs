//! Grid lines and their families.
//!
//! A grid is a bounded, named reference line. Grids come in two families,
//! [`Orientation::Vertical`] and [`Orientation::Horizontal`], and each family
//! has its own label namespace.

use std::fmt;

use crate::geometry::Point;

/// The family a grid line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lines running along y, spaced along x, labeled with numbers.
    Vertical,
    /// Lines running along x, spaced along y, labeled with letters.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// One named grid line.
///
/// Built only by [`LayoutGenerator`](crate::LayoutGenerator), which upholds
/// the family invariants: vertical lines share `x` at both ends, horizontal
/// lines share `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    orientation: Orientation,
    start: Point,
    end: Point,
    label: String,
}

impl GridLine {
    pub(crate) fn new(
        orientation: Orientation,
        start: Point,
        end: Point,
        label: impl Into<String>,
    ) -> Self {
        Self {
            orientation,
            start,
            end,
            label: label.into(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Length of the bounded segment.
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Returns `true` when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{} \"{}\"", self.orientation, self.start, self.end, self.label)
    }
}
