use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The admissible A* heuristic for 4-directional movement with uniform
/// edge cost 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
