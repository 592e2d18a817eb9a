//! Rendering layouts to preview formats.

pub mod svg;

pub use self::svg::SvgPlanWriter;
