use pathviz_core::{CellKind, GridModel, Point, Range};

/// Minimal grid interface consumed by the search algorithms.
///
/// The algorithms only need to know which rectangle is searchable and which
/// cells can never be traversed; everything else (start/end markers,
/// overlays) is host state.
pub trait SearchGrid {
    /// The rectangle of searchable cells.
    fn bounds(&self) -> Range;

    /// Whether the cell at `p` is a wall. Blocked cells are never expanded
    /// and never appear as neighbors.
    fn blocked(&self, p: Point) -> bool;
}

impl SearchGrid for GridModel {
    fn bounds(&self) -> Range {
        GridModel::bounds(self)
    }

    fn blocked(&self, p: Point) -> bool {
        self.kind_at(p) == CellKind::Wall
    }
}
