use std::time::Duration;

use pathviz_core::{Point, Range};

use crate::pacer::Pacer;
use crate::traits::SearchGrid;

/// Sentinel cost meaning "not yet reached" in Dijkstra's distance scan.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Which search algorithm to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    AStar,
}

/// The outcome of a search run.
///
/// `path` is `[start, …, end]` inclusive when the end was reached, empty
/// otherwise (an unreachable end is a normal outcome, not an error).
/// `visited` is the exact order in which cells were expanded: it includes
/// the start cell, never the end cell, and never a wall.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Point>,
    pub visited: Vec<Point>,
}

impl SearchResult {
    /// Whether a path to the end was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Internal per-run scratch node
// ---------------------------------------------------------------------------

/// Search scratch for one cell, keyed by flat row-major index.
///
/// Scratch lives here, never on the grid cells: a `generation` mismatch
/// means the node was last touched by an earlier run and all its fields are
/// stale.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Owner of the per-run search scratch for a grid rectangle.
///
/// A `Searcher` holds the node arena, the A* open list and the neighbor
/// buffer, and reuses them across runs: a generation counter bumped at the
/// start of each run lazily invalidates everything the previous run wrote,
/// so stale `g`/`f`/parent values can never leak into a fresh run. The
/// `&mut self` receivers also make "at most one run at a time" a
/// compile-time fact.
pub struct Searcher {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: Vec<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl Searcher {
    /// Create a new `Searcher` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            open: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a `Searcher` sized for `grid`.
    pub fn for_grid<G: SearchGrid>(grid: &G) -> Self {
        Self::new(grid.bounds())
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Replace the underlying rectangle, reallocating the arena as needed.
    ///
    /// If the new size fits within the existing arena, the allocation is
    /// kept and the generation counter is bumped so stale entries are
    /// ignored. Otherwise the arena is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Run the selected algorithm. See [`Searcher::bfs`],
    /// [`Searcher::dijkstra`] and [`Searcher::astar`].
    pub fn search<G, P, F>(
        &mut self,
        algorithm: Algorithm,
        grid: &G,
        from: Point,
        to: Point,
        step_delay: Duration,
        pacer: &mut P,
        on_visit: F,
    ) -> SearchResult
    where
        G: SearchGrid,
        P: Pacer,
        F: FnMut(Point),
    {
        match algorithm {
            Algorithm::Bfs => self.bfs(grid, from, to, step_delay, pacer, on_visit),
            Algorithm::Dijkstra => self.dijkstra(grid, from, to, step_delay, pacer, on_visit),
            Algorithm::AStar => self.astar(grid, from, to, step_delay, pacer, on_visit),
        }
    }

    // -----------------------------------------------------------------------
    // Helpers shared by the three algorithms
    // -----------------------------------------------------------------------

    /// Bump the run generation and return it.
    pub(crate) fn begin_run(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Walk parent indices back from the cell that satisfied the end test,
    /// producing `[start, …, end]`.
    pub(crate) fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Free-function entry point
// ---------------------------------------------------------------------------

/// Run a single search with a freshly sized arena.
///
/// Expands cells from `from` toward `to` over `grid`, invoking `on_visit`
/// for every expanded cell except the start, then pausing `pacer` for
/// `step_delay` so the host can repaint. Hosts that run many searches over
/// the same grid can keep a [`Searcher`] instead and reuse its allocations.
pub fn search<G, P, F>(
    algorithm: Algorithm,
    grid: &G,
    from: Point,
    to: Point,
    step_delay: Duration,
    pacer: &mut P,
    on_visit: F,
) -> SearchResult
where
    G: SearchGrid,
    P: Pacer,
    F: FnMut(Point),
{
    Searcher::for_grid(grid).search(algorithm, grid, from, to, step_delay, pacer, on_visit)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for alg in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
            let json = serde_json::to_string(&alg).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(alg, back);
        }
    }

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            path: vec![Point::new(0, 0), Point::new(1, 0)],
            visited: vec![Point::new(0, 0)],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
