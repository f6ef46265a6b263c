//! Terminal demo: scatter random walls and animate all three searches.
//!
//! Run with: `cargo run -p pathviz-search --example animate`

use std::io::Write;
use std::time::Duration;

use pathviz_core::{CellKind, GridModel, Point};
use pathviz_search::{Algorithm, SleepPacer, search};
use rand::RngExt;

const WIDTH: i32 = 40;
const HEIGHT: i32 = 14;
const WALL_DENSITY: f64 = 0.25;
const STEP_DELAY: Duration = Duration::from_millis(8);

fn render(grid: &GridModel) -> String {
    let mut out = String::with_capacity(((WIDTH + 1) * HEIGHT) as usize);
    for (p, kind) in grid.iter() {
        out.push(match kind {
            CellKind::Empty => ' ',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Path => 'o',
            CellKind::Visited => '.',
        });
        if p.x == WIDTH - 1 {
            out.push('\n');
        }
    }
    out
}

fn repaint(title: &str, grid: &GridModel) {
    // Clear the screen and home the cursor.
    print!("\x1b[2J\x1b[H{title}\n{}", render(grid));
    let _ = std::io::stdout().flush();
}

fn main() {
    let mut rng = rand::rng();
    let start = Point::new(1, HEIGHT / 2);
    let end = Point::new(WIDTH - 2, HEIGHT / 2);

    let mut base = GridModel::new(WIDTH, HEIGHT);
    for p in base.bounds() {
        if p != start && p != end && rng.random_bool(WALL_DENSITY) {
            base.set_cell(p, CellKind::Wall);
        }
    }
    base.set_cell(start, CellKind::Start);
    base.set_cell(end, CellKind::End);

    for alg in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
        let title = format!("{alg:?}  (S -> E, walls #, visited ., path o)");
        let mut view = base.clone();
        let mut pacer = SleepPacer;

        let result = search(alg, &base, start, end, STEP_DELAY, &mut pacer, |p| {
            view.set_cell(p, CellKind::Visited);
            repaint(&title, &view);
        });

        for &p in &result.path {
            if p != start && p != end {
                view.set_cell(p, CellKind::Path);
            }
        }
        repaint(&title, &view);
        if result.found() {
            println!(
                "{alg:?}: path of {} cells after {} expansions",
                result.path.len(),
                result.visited.len()
            );
        } else {
            println!(
                "{alg:?}: no path ({} cells reachable)",
                result.visited.len()
            );
        }
        std::thread::sleep(Duration::from_secs(1));
    }
}
