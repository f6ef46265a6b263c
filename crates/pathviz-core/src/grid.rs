//! The [`GridModel`] type — cell classification for the search grid.
//!
//! A `GridModel` owns a `rows × cols` rectangle of [`CellKind`] values in
//! row-major order and tracks the (at most one) start and end markers. The
//! host mutates it between runs; a finished run paints `Path`/`Visited`
//! overlays back onto it.

use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// The mutually-exclusive classification of a grid cell.
///
/// `Path` and `Visited` are presentation overlays produced by a completed
/// search run; they never survive [`GridModel::clear_path`] or a resize.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Path,
    Visited,
}

impl CellKind {
    /// Whether this kind is a post-run presentation overlay.
    #[inline]
    pub const fn is_overlay(self) -> bool {
        matches!(self, CellKind::Path | CellKind::Visited)
    }
}

// ---------------------------------------------------------------------------
// GridModel
// ---------------------------------------------------------------------------

/// An owned rectangular grid of [`CellKind`]s with start/end tracking.
///
/// Invariants:
/// - at most one cell is `Start` and at most one is `End`; [`set_cell`]
///   enforces this by demoting the previous marker to `Empty`;
/// - `start()`/`end()` always reference the unique marker cells, or `None`.
///
/// All mutation is bounds-checked: writes outside the grid are no-ops.
///
/// [`set_cell`]: GridModel::set_cell
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
    start: Option<Point>,
    end: Option<Point>,
}

impl GridModel {
    /// Create a new grid of the given dimensions, all cells `Empty`.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![CellKind::Empty; (w as usize) * (h as usize)],
            width: w,
            height: h,
            start: None,
            end: None,
        }
    }

    /// The bounding range of the grid (min at the origin).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Position of the start marker, if one is placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the end marker, if one is placed.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The kind of the cell at `p`. Out-of-bounds reads return `Empty`.
    #[inline]
    pub fn kind_at(&self, p: Point) -> CellKind {
        match self.index(p) {
            Some(i) => self.cells[i],
            None => CellKind::Empty,
        }
    }

    /// Reassign the kind of the cell at `p`. No-op if `p` is out of bounds.
    ///
    /// Setting a cell to `Start` demotes any previous start cell to `Empty`
    /// and moves the tracked reference; same for `End`. Reassigning the
    /// current start (or end) cell to another kind clears the corresponding
    /// reference.
    pub fn set_cell(&mut self, p: Point, kind: CellKind) {
        let Some(i) = self.index(p) else {
            return;
        };
        let old = self.cells[i];
        self.cells[i] = kind;

        match kind {
            CellKind::Start => {
                if let Some(prev) = self.start.filter(|&prev| prev != p) {
                    if let Some(pi) = self.index(prev) {
                        self.cells[pi] = CellKind::Empty;
                    }
                }
                self.start = Some(p);
            }
            CellKind::End => {
                if let Some(prev) = self.end.filter(|&prev| prev != p) {
                    if let Some(pi) = self.index(prev) {
                        self.cells[pi] = CellKind::Empty;
                    }
                }
                self.end = Some(p);
            }
            _ => {}
        }

        if old == CellKind::Start && kind != CellKind::Start && self.start == Some(p) {
            self.start = None;
        }
        if old == CellKind::End && kind != CellKind::End && self.end == Some(p) {
            self.end = None;
        }
    }

    /// Reset all `Path`/`Visited` overlay cells to `Empty`, leaving walls
    /// and the start/end markers untouched.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_overlay() {
                *c = CellKind::Empty;
            }
        }
    }

    /// Recreate a blank grid at the current dimensions, clearing the
    /// start/end references.
    pub fn reset(&mut self) {
        self.cells.fill(CellKind::Empty);
        self.start = None;
        self.end = None;
    }

    /// Resize the grid to the given dimensions.
    ///
    /// Wall/start/end classification is preserved for the sub-rectangle
    /// where old and new dimensions overlap; `Path`/`Visited` overlays
    /// collapse to `Empty`. Start/end references falling outside the new
    /// bounds are cleared.
    pub fn resize(&mut self, width: i32, height: i32) {
        let mut next = GridModel::new(width, height);
        for p in self.bounds().intersect(next.bounds()) {
            let kind = self.kind_at(p);
            if kind != CellKind::Empty && !kind.is_overlay() {
                if let Some(i) = next.index(p) {
                    next.cells[i] = kind;
                }
            }
        }
        next.start = self.start.filter(|&p| next.contains(p));
        next.end = self.end.filter(|&p| next.contains(p));
        *self = next;
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds().iter().map(|p| (p, self.kind_at(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = GridModel::new(4, 3);
        assert_eq!(g.bounds(), Range::new(0, 0, 4, 3));
        assert!(g.iter().all(|(_, k)| k == CellKind::Empty));
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
    }

    #[test]
    fn set_cell_out_of_bounds_is_noop() {
        let mut g = GridModel::new(2, 2);
        g.set_cell(Point::new(5, 5), CellKind::Wall);
        assert!(g.iter().all(|(_, k)| k == CellKind::Empty));
        // An out-of-bounds read falls back to Empty.
        assert_eq!(g.kind_at(Point::new(5, 5)), CellKind::Empty);
    }

    #[test]
    fn start_is_unique() {
        let mut g = GridModel::new(4, 4);
        g.set_cell(Point::new(0, 0), CellKind::Start);
        g.set_cell(Point::new(2, 2), CellKind::Start);
        assert_eq!(g.start(), Some(Point::new(2, 2)));
        assert_eq!(g.kind_at(Point::new(0, 0)), CellKind::Empty);
        assert_eq!(g.kind_at(Point::new(2, 2)), CellKind::Start);
    }

    #[test]
    fn end_is_unique() {
        let mut g = GridModel::new(4, 4);
        g.set_cell(Point::new(1, 1), CellKind::End);
        g.set_cell(Point::new(3, 0), CellKind::End);
        assert_eq!(g.end(), Some(Point::new(3, 0)));
        assert_eq!(g.kind_at(Point::new(1, 1)), CellKind::Empty);
    }

    #[test]
    fn demoting_start_clears_reference() {
        let mut g = GridModel::new(4, 4);
        g.set_cell(Point::new(1, 1), CellKind::Start);
        g.set_cell(Point::new(1, 1), CellKind::Wall);
        assert_eq!(g.start(), None);
        assert_eq!(g.kind_at(Point::new(1, 1)), CellKind::Wall);
    }

    #[test]
    fn start_over_end_moves_both_references() {
        let mut g = GridModel::new(4, 4);
        g.set_cell(Point::new(0, 0), CellKind::Start);
        g.set_cell(Point::new(1, 1), CellKind::End);
        // Place the start marker on top of the end marker.
        g.set_cell(Point::new(1, 1), CellKind::Start);
        assert_eq!(g.start(), Some(Point::new(1, 1)));
        assert_eq!(g.end(), None);
        assert_eq!(g.kind_at(Point::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn restating_start_in_place_keeps_it() {
        let mut g = GridModel::new(4, 4);
        g.set_cell(Point::new(2, 2), CellKind::Start);
        g.set_cell(Point::new(2, 2), CellKind::Start);
        assert_eq!(g.start(), Some(Point::new(2, 2)));
        assert_eq!(g.kind_at(Point::new(2, 2)), CellKind::Start);
    }

    #[test]
    fn clear_path_removes_only_overlays() {
        let mut g = GridModel::new(3, 3);
        g.set_cell(Point::new(0, 0), CellKind::Start);
        g.set_cell(Point::new(2, 2), CellKind::End);
        g.set_cell(Point::new(1, 0), CellKind::Wall);
        g.set_cell(Point::new(0, 1), CellKind::Visited);
        g.set_cell(Point::new(1, 1), CellKind::Path);
        g.clear_path();
        assert_eq!(g.kind_at(Point::new(0, 0)), CellKind::Start);
        assert_eq!(g.kind_at(Point::new(2, 2)), CellKind::End);
        assert_eq!(g.kind_at(Point::new(1, 0)), CellKind::Wall);
        assert_eq!(g.kind_at(Point::new(0, 1)), CellKind::Empty);
        assert_eq!(g.kind_at(Point::new(1, 1)), CellKind::Empty);
        assert!(g.iter().all(|(_, k)| !k.is_overlay()));
    }

    #[test]
    fn reset_blanks_everything() {
        let mut g = GridModel::new(3, 3);
        g.set_cell(Point::new(0, 0), CellKind::Start);
        g.set_cell(Point::new(1, 1), CellKind::Wall);
        g.reset();
        assert!(g.iter().all(|(_, k)| k == CellKind::Empty));
        assert_eq!(g.start(), None);
        assert_eq!(g.bounds(), Range::new(0, 0, 3, 3));
    }

    #[test]
    fn resize_preserves_overlap() {
        let mut g = GridModel::new(5, 5);
        g.set_cell(Point::new(0, 0), CellKind::Start);
        g.set_cell(Point::new(2, 2), CellKind::Wall);
        g.set_cell(Point::new(4, 4), CellKind::End);
        g.set_cell(Point::new(1, 1), CellKind::Visited);
        g.resize(3, 3);
        assert_eq!(g.bounds(), Range::new(0, 0, 3, 3));
        assert_eq!(g.kind_at(Point::new(0, 0)), CellKind::Start);
        assert_eq!(g.kind_at(Point::new(2, 2)), CellKind::Wall);
        // Overlays collapse to Empty.
        assert_eq!(g.kind_at(Point::new(1, 1)), CellKind::Empty);
        // The end marker fell outside the new bounds.
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), None);
    }

    #[test]
    fn resize_grow_keeps_markers() {
        let mut g = GridModel::new(3, 3);
        g.set_cell(Point::new(1, 1), CellKind::Start);
        g.set_cell(Point::new(2, 2), CellKind::End);
        g.resize(6, 6);
        assert_eq!(g.start(), Some(Point::new(1, 1)));
        assert_eq!(g.end(), Some(Point::new(2, 2)));
        assert_eq!(g.kind_at(Point::new(5, 5)), CellKind::Empty);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_kind_round_trip() {
        let kinds = [
            CellKind::Empty,
            CellKind::Wall,
            CellKind::Start,
            CellKind::End,
            CellKind::Path,
            CellKind::Visited,
        ];
        for k in kinds {
            let json = serde_json::to_string(&k).unwrap();
            let back: CellKind = serde_json::from_str(&json).unwrap();
            assert_eq!(k, back);
        }
    }

    #[test]
    fn grid_round_trip() {
        let mut g = GridModel::new(3, 2);
        g.set_cell(Point::new(0, 0), CellKind::Start);
        g.set_cell(Point::new(2, 1), CellKind::Wall);
        let json = serde_json::to_string(&g).unwrap();
        let back: GridModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start(), Some(Point::new(0, 0)));
        assert_eq!(back.kind_at(Point::new(2, 1)), CellKind::Wall);
    }
}
