//! The classic search walkthrough: a six-node graph, a walled 30x15 grid
//! and a 10x10 grid with a costly forest, each rendered after a search.

use std::fmt::Write as _;

use waypath_core::Point;
use waypath_paths::{
    DrawStyle, GridWithWeights, NeighborOrder, SimpleGraph, SquareGrid, a_star_search,
    breadth_first_search, breadth_first_search_to, dijkstra_search, draw_grid, from_id_width,
};

/// Six nodes, `A` to `F`, with a few one-way links.
pub fn example_graph() -> SimpleGraph<char> {
    [
        ('A', vec!['B']),
        ('B', vec!['C']),
        ('C', vec!['B', 'D', 'F']),
        ('D', vec!['C', 'E']),
        ('E', vec!['F']),
        ('F', vec![]),
    ]
    .into_iter()
    .collect()
}

const WALL_IDS: [i32; 60] = [
    21, 22, 51, 52, 81, 82, 93, 94, 111, 112, 123, 124, 133, 134, 141, 142, 153, 154, 163, 164,
    171, 172, 173, 174, 175, 183, 184, 193, 194, 201, 202, 203, 204, 205, 213, 214, 223, 224, 243,
    244, 253, 254, 273, 274, 283, 284, 303, 304, 313, 314, 333, 334, 343, 344, 373, 374, 403, 404,
    433, 434,
];

/// The 30x15 grid with its walls given as row-major cell ids.
pub fn walled_grid() -> SquareGrid {
    SquareGrid::new(30, 15).with_walls(WALL_IDS.map(|id| from_id_width(id, 30)))
}

/// The 10x10 grid with a forest costing 5 per cell and a short wall.
pub fn forest_grid() -> GridWithWeights {
    let grid = SquareGrid::new(10, 10)
        .with_walls([(1, 7), (1, 8), (2, 7), (2, 8), (3, 7), (3, 8)].map(Point::from))
        .with_neighbor_order(NeighborOrder::Alternating);
    let forest = [
        (3, 4), (3, 5), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7), (4, 8),
        (5, 1), (5, 2), (5, 3), (5, 4), (5, 5), (5, 6), (5, 7), (5, 8), (6, 2), (6, 3),
        (6, 4), (6, 5), (6, 6), (6, 7), (7, 3), (7, 4), (7, 5),
    ];
    GridWithWeights::from_grid(grid).with_weights(forest.map(|p| (Point::from(p), 5)))
}

/// Nodes reachable from each node of [`example_graph`], one line per node.
pub fn reachability() -> String {
    let g = example_graph();
    let mut out = String::new();
    for from in ['A', 'B', 'C', 'D', 'E', 'F'] {
        let mut reached: Vec<char> = breadth_first_search(&g, &from).reached().copied().collect();
        reached.sort();
        let reached: String = reached.into_iter().collect();
        let _ = writeln!(out, "{from}: {reached}");
    }
    out
}

/// Every rendering of the walkthrough, separated by blank lines.
pub fn render_all() -> String {
    let mut out = reachability();
    out.push('\n');

    let walled = walled_grid();
    let start = Point::new(8, 7);
    let flood = breadth_first_search(&walled, &start);
    out.push_str(&draw_grid(&walled, &DrawStyle::new().point_to(&flood).start(start)));
    out.push('\n');

    let goal = Point::new(17, 2);
    let early = breadth_first_search_to(&walled, &start, &goal);
    log::info!(
        "bfs to {goal}: {} cells reached, full flood {}",
        early.len(),
        flood.len()
    );
    let style = DrawStyle::new().point_to(&early).start(start).goal(goal);
    out.push_str(&draw_grid(&walled, &style));
    out.push('\n');

    let forest = forest_grid();
    let (start, goal) = (Point::new(1, 4), Point::new(8, 3));
    let r = dijkstra_search(&forest, &start, &goal);
    out.push_str(&draw_grid(&forest, &DrawStyle::new().point_to(&r.came_from).start(start).goal(goal)));
    out.push('\n');
    out.push_str(&draw_grid(&forest, &DrawStyle::new().number(&r.cost_so_far).start(start).goal(goal)));
    out.push('\n');
    let path = r.path(&start, &goal);
    out.push_str(&draw_grid(&forest, &DrawStyle::new().path(&path)));
    out.push('\n');

    let a = a_star_search(&forest, &start, &goal);
    log::info!(
        "forest: dijkstra expanded {}, a* expanded {}, cost {:?}",
        r.expanded,
        a.expanded,
        a.cost_to(&goal)
    );
    let path = a.path(&start, &goal);
    out.push_str(&draw_grid(&forest, &DrawStyle::new().path(&path).start(start).goal(goal)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachability_lines() {
        let r = reachability();
        let lines: Vec<&str> = r.lines().collect();
        assert_eq!(lines[0], "A: ABCDEF");
        assert_eq!(lines[4], "E: EF");
        assert_eq!(lines[5], "F: F");
    }

    #[test]
    fn walled_grid_layout() {
        let g = walled_grid();
        assert_eq!(g.walls.len(), 60);
        assert!(g.walls.contains(&Point::new(21, 0)));
        assert!(g.walls.contains(&Point::new(14, 14)));
        assert!(g.passable(Point::new(8, 7)));
    }

    #[test]
    fn forest_route_cost() {
        let g = forest_grid();
        let (start, goal) = (Point::new(1, 4), Point::new(8, 3));
        assert_eq!(dijkstra_search(&g, &start, &goal).cost_to(&goal), Some(14));
        assert_eq!(a_star_search(&g, &start, &goal).cost_to(&goal), Some(14));
    }

    #[test]
    fn render_all_draws_every_grid() {
        let out = render_all();
        // Two walled grids and four forest grids, each framed by a rule line.
        assert_eq!(out.matches(&"~".repeat(90)).count(), 2);
        assert_eq!(out.lines().filter(|l| *l == "~".repeat(30)).count(), 4);
        assert_eq!(out.matches(" A ").count(), 5);
    }
}
