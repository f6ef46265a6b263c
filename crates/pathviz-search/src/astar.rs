use std::time::Duration;

use pathviz_core::Point;

use crate::Searcher;
use crate::distance::manhattan;
use crate::neighbors;
use crate::pacer::Pacer;
use crate::searcher::SearchResult;
use crate::traits::SearchGrid;

impl Searcher {
    /// A* search from `from` to `to` with the Manhattan heuristic.
    ///
    /// The open list is a plain vector, stably re-sorted by `f = g + h`
    /// before every pop so that equal-`f` cells keep their insertion order;
    /// the heuristic is admissible, so the path length matches BFS and
    /// Dijkstra, typically with fewer expansions. A neighbor already
    /// finalized is skipped; one already in the open list is updated only
    /// when the new tentative cost is a strict improvement (ties keep the
    /// earlier parent). The run ends the instant the end cell is popped,
    /// before it is recorded in the visited list or passed to `on_visit`.
    pub fn astar<G, P, F>(
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
            node.f = manhattan(from, to);
            node.open = true;
            node.parent = usize::MAX;
        }

        let mut open = std::mem::take(&mut self.open);
        open.clear();
        open.push(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            if open.is_empty() {
                break 'search None;
            }
            // Stable sort: equal-f cells stay in insertion order.
            open.sort_by_key(|&i| self.nodes[i].f);
            let ci = open.remove(0);

            if ci == goal_idx {
                break 'search Some(ci);
            }

            // Move to the closed set.
            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
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
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open {
                        // Closed this run.
                        continue;
                    }
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.open = true;
                    open.push(ni);
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
            }
        };

        self.open = open;
        self.nbuf = nbuf;

        if let Some(gi) = found {
            result.path = self.reconstruct(gi);
        }
        result
    }
}
