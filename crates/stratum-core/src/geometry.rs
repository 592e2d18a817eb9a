//! Geometric primitives for grid layout.
//!
//! # Coordinate System
//!
//! Stratum works in model plan coordinates, the way a building-design host
//! lays out a floor plan:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: `(0, 0)`, the anchor of the vertical grid family
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward (plan north)
//!
//! Units are whatever the caller supplies; the layout never converts them.

use std::fmt;

/// A 2D point in model plan coordinates.
///
/// # Examples
///
/// ```
/// # use stratum_core::geometry::Point;
/// let anchor = Point::new(-5.0, 5.0);
///
/// let end = anchor.offset(15.0, 0.0);
/// assert_eq!(end.x(), 10.0);
/// assert_eq!(end.y(), 5.0);
/// assert_eq!(anchor.distance_to(end), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks that neither coordinate is infinite or NaN
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns a new point moved by `dx` along x and `dy` along y.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance between this point and another
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_point_offset() {
        let moved = Point::new(10.0, 0.0).offset(0.0, 20.0);
        assert_eq!(moved, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::new(2.0, 2.0).distance_to(Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -1.0).is_finite());
        assert!(!Point::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NAN).is_finite());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(-5.0, 2.5).to_string(), "(-5, 2.5)");
    }
}
