//! Stratum Core Types and Layout Generation
//!
//! This crate provides the pure layout computation behind Stratum. Given a
//! validated [`LayoutRequest`], it produces the named grid lines and levels of
//! a building-design layout without touching any document or I/O. It includes:
//!
//! - **Geometry**: Plan coordinates ([`geometry::Point`])
//! - **Grids**: Named reference lines in two families ([`grid`] module)
//! - **Levels**: Named elevation datums ([`level`] module)
//! - **Naming**: Label schemes for grids and levels ([`naming`] module)
//! - **Generator**: The layout algorithm itself ([`generator::LayoutGenerator`])
//!
//! # Example
//!
//! ```
//! use stratum_core::{LayoutGenerator, grid::Orientation};
//!
//! let generator = LayoutGenerator::default();
//! let grids = generator
//!     .generate_grids(10.0, 3, 20.0, Orientation::Vertical)
//!     .unwrap();
//!
//! let labels: Vec<&str> = grids.iter().map(|grid| grid.label()).collect();
//! assert_eq!(labels, ["1", "2", "3"]);
//! ```

pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod level;
pub mod naming;
pub mod request;

pub use error::LayoutError;
pub use generator::LayoutGenerator;
pub use layout::LayoutResult;
pub use request::{GridParams, LayoutRequest, LevelParams, MAX_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_and_sync() {
        assert_send_sync::<LayoutGenerator>();
        assert_send_sync::<LayoutRequest>();
        assert_send_sync::<LayoutResult>();
        assert_send_sync::<LayoutError>();
        assert_send_sync::<grid::GridLine>();
        assert_send_sync::<level::Level>();
        assert_send_sync::<naming::Naming>();
    }
}
