//! Heightmap climbing.
//!
//! Cells hold elevations `a`..`z`; `S` is the start (elevation `a`) and `E`
//! the summit (elevation `z`). A step may climb at most one level but can
//! drop any distance.

use rustc_hash::FxHashMap;
use waypath_core::Point;
use waypath_paths::{
    AstarGraph, DrawStyle, Graph, PathOptions, SquareGrid, WeightedGraph, a_star_search,
    breadth_first_distances, draw_grid, manhattan, parse_cells, reconstruct_path,
};

use crate::error::ParseError;

/// Climbing direction of a [`Hill`] graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climb {
    /// Edges follow the climbing rule.
    Up,
    /// Every edge reversed: used to search outward from the summit.
    Down,
}

/// Parsed heightmap.
#[derive(Debug, Clone)]
pub struct Hill {
    grid: SquareGrid,
    letters: FxHashMap<Point, char>,
    pub start: Point,
    pub goal: Point,
    climb: Climb,
}

impl Hill {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (width, height, cells) = parse_cells(input)?;
        let mut start = None;
        let mut goal = None;
        let mut letters = FxHashMap::default();
        for (pos, ch) in cells {
            let elevation = match ch {
                'S' => {
                    start = Some(pos);
                    'a'
                }
                'E' => {
                    goal = Some(pos);
                    'z'
                }
                'a'..='z' => ch,
                _ => return Err(waypath_paths::GridError::InvalidCell { ch, pos }.into()),
            };
            letters.insert(pos, elevation);
        }
        Ok(Self {
            grid: SquareGrid::new(width, height),
            letters,
            start: start.ok_or(ParseError::MissingMarker('S'))?,
            goal: goal.ok_or(ParseError::MissingMarker('E'))?,
            climb: Climb::Up,
        })
    }

    /// The same map with every edge reversed.
    pub fn descending(&self) -> Self {
        Self {
            climb: Climb::Down,
            ..self.clone()
        }
    }

    /// Elevation of `p`, 0 for `a`.
    pub fn elevation(&self, p: Point) -> Option<i32> {
        self.letters.get(&p).map(|&c| c as i32 - 'a' as i32)
    }

    /// Every cell at elevation `a`.
    pub fn lowest(&self) -> impl Iterator<Item = Point> + '_ {
        self.letters
            .iter()
            .filter(|&(_, &c)| c == 'a')
            .map(|(&p, _)| p)
    }

    /// The map with `path` marked, one character per cell.
    pub fn draw(&self, path: &[Point]) -> String {
        let style = DrawStyle::new()
            .letter(&self.letters)
            .path(path)
            .start(self.start)
            .goal(self.goal)
            .trim(true);
        draw_grid(&self.grid, &style)
    }

    fn can_step(&self, from: Point, to: Point) -> bool {
        let (Some(a), Some(b)) = (self.elevation(from), self.elevation(to)) else {
            return false;
        };
        match self.climb {
            Climb::Up => b - a <= 1,
            Climb::Down => a - b <= 1,
        }
    }
}

impl AsRef<SquareGrid> for Hill {
    fn as_ref(&self) -> &SquareGrid {
        &self.grid
    }
}

impl Graph for Hill {
    type Location = Point;

    fn neighbors(&self, id: &Point, buf: &mut Vec<Point>) {
        let first = buf.len();
        self.grid.neighbors(id, buf);
        let mut i = first;
        while i < buf.len() {
            if self.can_step(*id, buf[i]) {
                i += 1;
            } else {
                buf.swap_remove(i);
            }
        }
    }
}

impl WeightedGraph for Hill {
    type Cost = i32;

    fn cost(&self, _from: &Point, _to: &Point) -> i32 {
        1
    }
}

impl AstarGraph for Hill {
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }
}

/// Fewest steps from `S` to `E`, with the path taken.
pub fn climb(hill: &Hill) -> Option<(usize, Vec<Point>)> {
    let result = a_star_search(hill, &hill.start, &hill.goal);
    let steps = reconstruct_path(&result.came_from, &hill.start, &hill.goal, PathOptions::steps());
    if steps.is_empty() {
        return None;
    }
    let path = result.path(&hill.start, &hill.goal);
    Some((steps.len(), path))
}

/// Fewest steps to `E` from any cell at elevation `a`.
pub fn best_trailhead(hill: &Hill) -> Option<u32> {
    let down = hill.descending();
    let dist = breadth_first_distances(&down, &hill.goal);
    hill.lowest().filter_map(|p| dist.get(&p).copied()).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Sabqponm
        abcryxxl
        accszExk
        acctuvwj
        abdefghi
    "};

    #[test]
    fn parse_markers() {
        let hill = Hill::parse(EXAMPLE).unwrap();
        assert_eq!(hill.start, Point::new(0, 0));
        assert_eq!(hill.goal, Point::new(5, 2));
        assert_eq!(hill.elevation(hill.goal), Some(25));
        assert_eq!(hill.lowest().count(), 6);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Hill::parse("Sab\nabc\n"),
            Err(ParseError::MissingMarker('E'))
        ));
        assert!(matches!(Hill::parse("S#E\n"), Err(ParseError::Grid(_))));
    }

    #[test]
    fn climbing_rule() {
        let hill = Hill::parse("Sbd\nzyE\n").unwrap();
        let mut buf = Vec::new();
        hill.neighbors(&Point::new(1, 0), &mut buf);
        // b -> a (down) allowed, b -> d and b -> y too steep.
        assert_eq!(buf, vec![Point::new(0, 0)]);
        buf.clear();
        hill.descending().neighbors(&Point::new(1, 0), &mut buf);
        buf.sort();
        // Reversed: anything may be entered from below, so the cliff to y is open.
        assert_eq!(buf, vec![Point::new(0, 0), Point::new(2, 0), Point::new(1, 1)]);
    }

    #[test]
    fn part_one_example() {
        let hill = Hill::parse(EXAMPLE).unwrap();
        let (steps, path) = climb(&hill).unwrap();
        assert_eq!(steps, 31);
        assert_eq!(path.len(), 32);
        for w in path.windows(2) {
            assert!(hill.can_step(w[0], w[1]));
        }
        let drawing = hill.draw(&path);
        assert!(drawing.lines().nth(1).unwrap().starts_with('A'));
        assert_eq!(drawing.matches('@').count(), 30);
    }

    #[test]
    fn part_two_example() {
        let hill = Hill::parse(EXAMPLE).unwrap();
        assert_eq!(best_trailhead(&hill), Some(29));
    }

    #[test]
    fn walled_in_summit() {
        let hill = Hill::parse("Sz\nzE\n").unwrap();
        assert!(climb(&hill).is_none());
    }
}
