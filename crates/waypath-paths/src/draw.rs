//! ASCII rendering of grids and search results, for debugging.

use rustc_hash::{FxHashMap, FxHashSet};
use waypath_core::Point;

use crate::frontier::{CameFrom, CostSoFar};
use crate::grid::SquareGrid;

/// Overlays drawn on top of a grid by [`draw_grid`].
///
/// When several overlays cover the same cell, the later one in this list
/// wins: number, letter, arrow toward predecessor, path, start, goal, wall,
/// sand.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawStyle<'a> {
    number: Option<&'a CostSoFar<Point, i32>>,
    letter: Option<&'a FxHashMap<Point, char>>,
    point_to: Option<&'a CameFrom<Point>>,
    path: Option<&'a [Point]>,
    start: Option<Point>,
    goal: Option<Point>,
    sand: Option<&'a FxHashSet<Point>>,
    trim: bool,
    x_min: i32,
    y_min: i32,
}

impl<'a> DrawStyle<'a> {
    /// Plain style: every open cell drawn as `.`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the recorded cost of each reached cell.
    pub fn number(mut self, costs: &'a CostSoFar<Point, i32>) -> Self {
        self.number = Some(costs);
        self
    }

    /// Print a character per cell.
    pub fn letter(mut self, letters: &'a FxHashMap<Point, char>) -> Self {
        self.letter = Some(letters);
        self
    }

    /// Draw an arrow from every reached cell toward its predecessor.
    pub fn point_to(mut self, came_from: &'a CameFrom<Point>) -> Self {
        self.point_to = Some(came_from);
        self
    }

    /// Mark the cells of `path` with `@`.
    pub fn path(mut self, path: &'a [Point]) -> Self {
        self.path = Some(path);
        self
    }

    /// Mark `start` with `A`.
    pub fn start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Mark `goal` with `Z`.
    pub fn goal(mut self, goal: Point) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Mark settled sand with `o`.
    pub fn sand(mut self, sand: &'a FxHashSet<Point>) -> Self {
        self.sand = Some(sand);
        self
    }

    /// One character per cell instead of three.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// First column and row to draw.
    pub fn origin(mut self, x_min: i32, y_min: i32) -> Self {
        self.x_min = x_min;
        self.y_min = y_min;
        self
    }

    fn tile(&self, grid: &SquareGrid, id: Point) -> String {
        let mut r = String::from(" . ");
        if let Some(c) = self.number.and_then(|n| n.cost(&id)) {
            r = format!(" {c:<2}");
        }
        if let Some(ch) = self.letter.and_then(|l| l.get(&id)) {
            r = format!(" {ch} ");
        }
        if let Some(Some(to)) = self.point_to.and_then(|cf| cf.predecessor(&id)) {
            let arrow = if to.x == id.x + 1 {
                Some(" > ")
            } else if to.x == id.x - 1 {
                Some(" < ")
            } else if to.y == id.y + 1 {
                Some(" v ")
            } else if to.y == id.y - 1 {
                Some(" ^ ")
            } else {
                None
            };
            if let Some(a) = arrow {
                r = a.to_string();
            }
        }
        if self.path.is_some_and(|p| p.contains(&id)) {
            r = " @ ".to_string();
        }
        if self.start == Some(id) {
            r = " A ".to_string();
        }
        if self.goal == Some(id) {
            r = " Z ".to_string();
        }
        if grid.walls.contains(&id) {
            r = if self.trim { "#" } else { "###" }.to_string();
        }
        if self.sand.is_some_and(|s| s.contains(&id)) {
            r = if self.trim { "o" } else { "ooo" }.to_string();
        }
        if self.trim {
            r = r.trim().to_string();
        }
        r
    }
}

/// Render `grid` with the overlays of `style`.
pub fn draw_grid(grid: &impl AsRef<SquareGrid>, style: &DrawStyle<'_>) -> String {
    let grid = grid.as_ref();
    let width = grid.width.max(0) as usize;
    let rule = |c: char| -> String {
        let n = if style.trim { width } else { 3 * width };
        std::iter::repeat_n(c, n).collect()
    };

    let mut out = String::new();
    out.push_str(&rule('_'));
    out.push('\n');
    for y in style.y_min..grid.height {
        for x in style.x_min..grid.width {
            out.push_str(&style.tile(grid, Point::new(x, y)));
        }
        out.push('\n');
    }
    out.push_str(&rule('~'));
    out.push('\n');
    out
}

/// Print [`draw_grid`] output to stdout.
pub fn print_grid(grid: &impl AsRef<SquareGrid>, style: &DrawStyle<'_>) {
    print!("{}", draw_grid(grid, style));
}
