//! The output of one layout generation.

use crate::{grid::GridLine, level::Level};

/// All grids and levels produced from one [`LayoutRequest`](crate::LayoutRequest).
///
/// Each list is in creation order, first-created first.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    vertical_grids: Vec<GridLine>,
    horizontal_grids: Vec<GridLine>,
    levels: Vec<Level>,
}

impl LayoutResult {
    pub(crate) fn new(
        vertical_grids: Vec<GridLine>,
        horizontal_grids: Vec<GridLine>,
        levels: Vec<Level>,
    ) -> Self {
        Self {
            vertical_grids,
            horizontal_grids,
            levels,
        }
    }

    pub fn vertical_grids(&self) -> &[GridLine] {
        &self.vertical_grids
    }

    pub fn horizontal_grids(&self) -> &[GridLine] {
        &self.horizontal_grids
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Iterates all grids, vertical family first.
    pub fn grids(&self) -> impl Iterator<Item = &GridLine> {
        self.vertical_grids.iter().chain(self.horizontal_grids.iter())
    }

    /// Total number of entities (grids and levels).
    pub fn len(&self) -> usize {
        self.vertical_grids.len() + self.horizontal_grids.len() + self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
