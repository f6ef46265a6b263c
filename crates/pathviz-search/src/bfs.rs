use std::collections::VecDeque;
use std::time::Duration;

use pathviz_core::Point;

use crate::Searcher;
use crate::neighbors;
use crate::pacer::Pacer;
use crate::searcher::SearchResult;
use crate::traits::SearchGrid;

impl Searcher {
    /// Breadth-first search from `from` to `to`.
    ///
    /// FIFO frontier with cells marked seen at enqueue time, guaranteeing a
    /// minimum cell-count path on the uniform grid. The run ends the instant
    /// the end cell is dequeued, before it is recorded in the visited list or
    /// passed to `on_visit`; the start cell is recorded but never passed to
    /// the callback.
    pub fn bfs<G, P, F>(
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
            node.parent = usize::MAX;
        }

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search None;
            };

            if ci == goal_idx {
                break 'search Some(ci);
            }

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
                if n.generation == cur_gen {
                    continue;
                }
                n.generation = cur_gen;
                n.parent = ci;
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;

        if let Some(gi) = found {
            result.path = self.reconstruct(gi);
        }
        result
    }
}
