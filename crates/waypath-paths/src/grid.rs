//! Concrete grid graphs: [`SquareGrid`] (walls, uniform cost) and
//! [`GridWithWeights`] (walls plus per-cell entry cost).

use rustc_hash::{FxHashMap, FxHashSet};
use waypath_core::{Point, Range};

use crate::distance::manhattan;
use crate::error::GridError;
use crate::traits::{AstarGraph, Graph, WeightedGraph};

/// Order in which [`SquareGrid::neighbors`] emits the four candidate moves.
///
/// Only affects which of several equal-cost paths a search settles on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborOrder {
    /// Always east, west, north, south.
    #[default]
    Fixed,
    /// East, west, north, south on odd cells and the reverse on even cells
    /// (`x + y` even). Paths come out as staircases rather than L-shapes.
    Alternating,
}

/// Convert a row-major cell index into a grid coordinate.
#[inline]
pub fn from_id_width(id: i32, width: i32) -> Point {
    Point::new(id % width, id / width)
}

/// Split a rectangular character map into cells.
///
/// Returns `(width, height, cells)` with cells in row-major order. Trailing
/// empty lines are ignored; every other row must match the first row's width.
/// Spaces are cells like any other character.
pub fn parse_cells(text: &str) -> Result<(i32, i32, Vec<(Point, char)>), GridError> {
    let mut rows: Vec<&str> = text.lines().collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    let Some(first) = rows.first() else {
        return Err(GridError::Empty);
    };
    let width = first.chars().count();
    if width == 0 {
        return Err(GridError::Empty);
    }
    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(GridError::Ragged {
                row: y,
                expected: width,
                found,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            cells.push((Point::new(x as i32, y as i32), ch));
        }
    }
    Ok((width as i32, rows.len() as i32, cells))
}

// ---------------------------------------------------------------------------
// SquareGrid
// ---------------------------------------------------------------------------

/// Bounded rectangular grid with impassable walls. Every step costs 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareGrid {
    pub width: i32,
    pub height: i32,
    pub walls: FxHashSet<Point>,
    order: NeighborOrder,
}

impl SquareGrid {
    /// Create an open `width` × `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: FxHashSet::default(),
            order: NeighborOrder::default(),
        }
    }

    /// Parse a character map; cells equal to `wall` become walls.
    pub fn from_ascii(text: &str, wall: char) -> Result<Self, GridError> {
        let (width, height, cells) = parse_cells(text)?;
        let walls = cells
            .into_iter()
            .filter(|&(_, ch)| ch == wall)
            .map(|(p, _)| p);
        Ok(Self::new(width, height).with_walls(walls))
    }

    /// Add walls, builder style.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Point>) -> Self {
        self.walls.extend(walls);
        self
    }

    /// Select the neighbor emission order.
    pub fn with_neighbor_order(mut self, order: NeighborOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn neighbor_order(&self) -> NeighborOrder {
        self.order
    }

    /// Turn `p` into a wall.
    #[inline]
    pub fn add_wall(&mut self, p: Point) {
        self.walls.insert(p);
    }

    /// The grid extent as a [`Range`].
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::from_size(self.width, self.height)
    }

    /// Whether `id` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn in_bounds(&self, id: Point) -> bool {
        self.bounds().contains(id)
    }

    /// Whether `id` is not a wall.
    #[inline]
    pub fn passable(&self, id: Point) -> bool {
        !self.walls.contains(&id)
    }

    /// The candidate moves of `id` in emission order, before filtering.
    pub fn candidates(&self, id: Point) -> [Point; 4] {
        // E W N S
        let mut moves = [
            id.shift(1, 0),
            id.shift(-1, 0),
            id.shift(0, -1),
            id.shift(0, 1),
        ];
        if self.order == NeighborOrder::Alternating && id.is_even() {
            moves.reverse();
        }
        moves
    }
}

impl Graph for SquareGrid {
    type Location = Point;

    fn neighbors(&self, id: &Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.candidates(*id)
                .into_iter()
                .filter(|&p| self.in_bounds(p))
                .filter(|&p| self.passable(p)),
        );
    }
}

impl WeightedGraph for SquareGrid {
    type Cost = i32;

    #[inline]
    fn cost(&self, _from: &Point, _to: &Point) -> i32 {
        1
    }
}

impl AstarGraph for SquareGrid {
    #[inline]
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }
}

impl AsRef<SquareGrid> for SquareGrid {
    fn as_ref(&self) -> &SquareGrid {
        self
    }
}

// ---------------------------------------------------------------------------
// GridWithWeights
// ---------------------------------------------------------------------------

/// [`SquareGrid`] whose cells carry an entry cost.
///
/// The cost of a step is the weight of the cell being entered; cells without
/// an explicit weight cost 1. Weights must be positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWithWeights {
    pub grid: SquareGrid,
    pub weights: FxHashMap<Point, i32>,
}

impl GridWithWeights {
    /// Create an open grid where every cell costs 1.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(SquareGrid::new(width, height))
    }

    /// Wrap an existing grid, keeping its walls and neighbor order.
    pub fn from_grid(grid: SquareGrid) -> Self {
        Self {
            grid,
            weights: FxHashMap::default(),
        }
    }

    /// Parse a map of decimal digits; each digit is the cost of entering
    /// that cell.
    pub fn from_digits(text: &str) -> Result<Self, GridError> {
        let (width, height, cells) = parse_cells(text)?;
        let mut g = Self::new(width, height);
        for (pos, ch) in cells {
            let w = ch
                .to_digit(10)
                .filter(|&d| d > 0)
                .ok_or(GridError::InvalidCell { ch, pos })?;
            g.weights.insert(pos, w as i32);
        }
        Ok(g)
    }

    /// Add weights, builder style.
    pub fn with_weights(mut self, weights: impl IntoIterator<Item = (Point, i32)>) -> Self {
        self.weights.extend(weights);
        self
    }

    /// Set the entry cost of `p`.
    #[inline]
    pub fn set_weight(&mut self, p: Point, w: i32) {
        self.weights.insert(p, w);
    }

    /// Entry cost of `p`.
    #[inline]
    pub fn weight(&self, p: Point) -> i32 {
        self.weights.get(&p).copied().unwrap_or(1)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height
    }

    #[inline]
    pub fn in_bounds(&self, id: Point) -> bool {
        self.grid.in_bounds(id)
    }

    #[inline]
    pub fn passable(&self, id: Point) -> bool {
        self.grid.passable(id)
    }
}

impl Graph for GridWithWeights {
    type Location = Point;

    #[inline]
    fn neighbors(&self, id: &Point, buf: &mut Vec<Point>) {
        self.grid.neighbors(id, buf);
    }
}

impl WeightedGraph for GridWithWeights {
    type Cost = i32;

    #[inline]
    fn cost(&self, _from: &Point, to: &Point) -> i32 {
        self.weight(*to)
    }
}

impl AstarGraph for GridWithWeights {
    #[inline]
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }
}

impl AsRef<SquareGrid> for GridWithWeights {
    fn as_ref(&self) -> &SquareGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of<G: Graph<Location = Point>>(g: &G, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        g.neighbors(&p, &mut buf);
        buf
    }

    #[test]
    fn from_id_width_is_row_major() {
        assert_eq!(from_id_width(21, 30), Point::new(21, 0));
        assert_eq!(from_id_width(51, 30), Point::new(21, 1));
        assert_eq!(from_id_width(0, 30), Point::ZERO);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let g = SquareGrid::new(3, 3);
        assert_eq!(
            neighbors_of(&g, Point::new(0, 0)),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
        assert_eq!(neighbors_of(&g, Point::new(1, 1)).len(), 4);
        assert_eq!(neighbors_of(&g, Point::new(2, 2)).len(), 2);
    }

    #[test]
    fn neighbors_skip_walls() {
        let g = SquareGrid::new(3, 3).with_walls([Point::new(1, 0), Point::new(0, 1)]);
        assert!(neighbors_of(&g, Point::new(0, 0)).is_empty());
        let ns = neighbors_of(&g, Point::new(1, 1));
        assert_eq!(ns, vec![Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn fixed_order_is_east_west_north_south() {
        let g = SquareGrid::new(5, 5);
        let p = Point::new(2, 2);
        assert_eq!(
            neighbors_of(&g, p),
            vec![
                Point::new(3, 2),
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(2, 3)
            ]
        );
    }

    #[test]
    fn alternating_order_flips_on_even_cells() {
        let g = SquareGrid::new(5, 5).with_neighbor_order(NeighborOrder::Alternating);
        assert_eq!(
            neighbors_of(&g, Point::new(2, 2)),
            vec![
                Point::new(2, 3),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(3, 2)
            ]
        );
        assert_eq!(neighbors_of(&g, Point::new(2, 1))[0], Point::new(3, 1));
    }

    #[test]
    fn from_ascii_reads_walls() {
        let g = SquareGrid::from_ascii("..#\n.#.\n...\n", '#').unwrap();
        assert_eq!((g.width, g.height), (3, 3));
        assert_eq!(g.walls.len(), 2);
        assert!(!g.passable(Point::new(2, 0)));
        assert!(!g.passable(Point::new(1, 1)));
        assert!(g.passable(Point::new(0, 0)));
    }

    #[test]
    fn parse_rejects_ragged_and_empty() {
        assert_eq!(
            SquareGrid::from_ascii("...\n..\n", '#'),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(SquareGrid::from_ascii("\n\n", '#'), Err(GridError::Empty));
    }

    #[test]
    fn trailing_spaces_are_open_cells() {
        let g = SquareGrid::from_ascii("#. \n.  \n\n", '#').unwrap();
        assert_eq!((g.width, g.height), (3, 2));
        assert_eq!(g.walls.len(), 1);
        assert!(g.passable(Point::new(2, 1)));
        assert_eq!(neighbors_of(&g, Point::new(2, 1)).len(), 2);

        // Digit maps keep the padded row intact and reject the space itself.
        assert_eq!(
            GridWithWeights::from_digits("12\n1 \n"),
            Err(GridError::InvalidCell {
                ch: ' ',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn weighted_cost_is_destination_weight() {
        let g = GridWithWeights::new(3, 1).with_weights([(Point::new(1, 0), 5)]);
        assert_eq!(g.cost(&Point::new(0, 0), &Point::new(1, 0)), 5);
        assert_eq!(g.cost(&Point::new(2, 0), &Point::new(1, 0)), 5);
        assert_eq!(g.cost(&Point::new(1, 0), &Point::new(2, 0)), 1);
        assert_eq!(g.weight(Point::new(0, 0)), 1);
    }

    #[test]
    fn from_digits_sets_weights() {
        let g = GridWithWeights::from_digits("116\n138\n").unwrap();
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g.weight(Point::new(2, 0)), 6);
        assert_eq!(g.weight(Point::new(1, 1)), 3);
        let err = GridWithWeights::from_digits("1x\n").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                ch: 'x',
                pos: Point::new(1, 0)
            }
        );
        assert!(GridWithWeights::from_digits("10\n").is_err());
    }

    #[test]
    fn estimate_is_manhattan() {
        let g = SquareGrid::new(10, 10);
        assert_eq!(g.estimate(&Point::new(0, 0), &Point::new(3, 4)), 7);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn neighbor_order_round_trip() {
        let json = serde_json::to_string(&NeighborOrder::Alternating).unwrap();
        assert_eq!(json, r#""Alternating""#);
        let back: NeighborOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NeighborOrder::Alternating);
    }
}
