use pathviz_core::Point;

use crate::traits::SearchGrid;

/// Cardinal direction offsets in fixed expansion order: up, down, left,
/// right. Visited-order determinism depends on this order.
pub(crate) const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Append the in-bounds, non-blocked cardinal neighbors of `p` into `buf`,
/// in [`DIRS`] order. The caller clears `buf` before calling.
pub(crate) fn cardinal<G: SearchGrid>(grid: &G, p: Point, buf: &mut Vec<Point>) {
    let bounds = grid.bounds();
    for d in DIRS {
        let n = p + d;
        if bounds.contains(n) && !grid.blocked(n) {
            buf.push(n);
        }
    }
}
