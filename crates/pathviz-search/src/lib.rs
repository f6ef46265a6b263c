//! **pathviz-search** — animated shortest-path search over a wall grid.
//!
//! Three interchangeable search algorithms operating on any [`SearchGrid`]:
//!
//! - **BFS** ([`Searcher::bfs`]) — FIFO frontier, minimum cell-count path
//! - **Dijkstra** ([`Searcher::dijkstra`]) — uniform cost 1, linear-scan frontier
//! - **A\*** ([`Searcher::astar`]) — Manhattan heuristic, fewest expansions
//!
//! Every run returns a [`SearchResult`]: the reconstructed path (empty when
//! the end is unreachable) and the exact order in which cells were expanded,
//! which drives the animation. Between expansions the algorithm invokes the
//! visit callback and then suspends via a [`Pacer`] so the host can repaint.
//!
//! Inclusion rules, identical across the three algorithms:
//!
//! | Cell | in `visited` | passed to callback |
//! |---|---|---|
//! | start | yes, exactly once | never |
//! | end | never | never |
//! | wall | never | never |
//! | other expanded | yes, in expansion order | yes |
//!
//! Frontier selection and neighbor order (up, down, left, right) are fixed,
//! so the visited order is fully deterministic for a given grid, start and
//! end. Cancellation is the host's concern: no stop signal is polled inside
//! a run; a host stops a search by discarding its result.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod neighbors;
mod pacer;
mod searcher;
mod traits;

pub use distance::manhattan;
pub use pacer::{NoPacer, Pacer, SleepPacer};
pub use searcher::{Algorithm, SearchResult, Searcher, search};
pub use traits::SearchGrid;
