use std::time::Duration;

use pathviz_core::Point;

use crate::Searcher;
use crate::neighbors;
use crate::pacer::Pacer;
use crate::searcher::{SearchResult, UNREACHABLE};
use crate::traits::SearchGrid;

impl Searcher {
    /// Dijkstra's algorithm from `from` to `to`, uniform edge cost 1.
    ///
    /// Frontier selection is a row-major linear scan over the still
    /// unvisited cells for the minimum tentative distance; the first cell
    /// scanned wins ties. The scan order is part of the visited-order
    /// contract, so it stays a scan rather than a priority heap. The run
    /// ends the instant the end cell is selected, before it is recorded in
    /// the visited list or passed to `on_visit`.
    pub fn dijkstra<G, P, F>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
        step_delay: Duration,
        pacer: &mut P,
        mut on_visit: F,
    ) -> SearchResult
    where
        G: SearchGrid,
        P: Pacer,
        F: FnMut(Point),
    {
        let mut result = SearchResult::default();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return result;
        };

        let cur_gen = self.begin_run();
        {
            let node = &mut self.nodes[start_idx];
            node.generation = cur_gen;
            node.g = 0;
            node.open = true;
            node.parent = usize::MAX;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            // Untouched cells have an implicit infinite distance, so the
            // scan only needs to consider cells relaxed this run.
            let mut best: Option<(usize, i32)> = None;
            for (i, n) in self.nodes.iter().enumerate() {
                if n.generation == cur_gen
                    && n.open
                    && best.is_none_or(|(_, best_g)| n.g < best_g)
                {
                    best = Some((i, n.g));
                }
            }

            let Some((ci, current_g)) = best else {
                break 'search None;
            };

            if ci == goal_idx {
                break 'search Some(ci);
            }

            self.nodes[ci].open = false;
            let cp = self.point(ci);
            result.visited.push(cp);
            if ci != start_idx {
                on_visit(cp);
                pacer.pause(step_delay);
            }

            nbuf.clear();
            neighbors::cardinal(grid, cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                // Already finalized this run.
                if n.generation == cur_gen && !n.open {
                    continue;
                }
                let tentative = current_g + 1;
                let old = if n.generation == cur_gen {
                    n.g
                } else {
                    UNREACHABLE
                };
                if tentative < old {
                    n.generation = cur_gen;
                    n.g = tentative;
                    n.open = true;
                    n.parent = ci;
                }
            }
        };

        self.nbuf = nbuf;

        if let Some(gi) = found {
            result.path = self.reconstruct(gi);
        }
        result
    }
}
