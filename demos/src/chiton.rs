//! Lowest-risk route across a cave whose cells carry risk levels 1 to 9.

use waypath_core::Point;
use waypath_paths::{GridWithWeights, a_star_search, dijkstra_search};

use crate::error::ParseError;

/// Parse the cave map; each digit is the risk of entering that cell.
pub fn parse(input: &str) -> Result<GridWithWeights, ParseError> {
    Ok(GridWithWeights::from_digits(input)?)
}

fn corners(cave: &GridWithWeights) -> (Point, Point) {
    (Point::ZERO, Point::new(cave.width() - 1, cave.height() - 1))
}

/// Total risk from the top-left to the bottom-right corner.
pub fn lowest_risk(cave: &GridWithWeights) -> Option<i32> {
    let (start, goal) = corners(cave);
    let result = dijkstra_search(cave, &start, &goal);
    log::debug!("dijkstra expanded {} cells", result.expanded);
    result.cost_to(&goal)
}

/// The cave repeated `times` times in each direction. Each repetition to
/// the right or down adds one to every risk level, wrapping 9 back to 1.
pub fn tile(cave: &GridWithWeights, times: i32) -> GridWithWeights {
    let (w, h) = (cave.width(), cave.height());
    let mut big = GridWithWeights::new(w * times, h * times);
    for ty in 0..times {
        for tx in 0..times {
            for p in cave.grid.bounds() {
                let risk = (cave.weight(p) - 1 + tx + ty) % 9 + 1;
                big.set_weight(p.shift(tx * w, ty * h), risk);
            }
        }
    }
    big
}

/// [`lowest_risk`] on the five-fold tiled cave, searched with A*.
pub fn lowest_risk_tiled(cave: &GridWithWeights) -> Option<i32> {
    let big = tile(cave, 5);
    let (start, goal) = corners(&big);
    let result = a_star_search(&big, &start, &goal);
    log::debug!("a* expanded {} cells", result.expanded);
    result.cost_to(&goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1163751742
        1381373672
        2136511328
        3694931569
        7463417111
        1319128137
        1359912421
        3125421639
        1293138521
        2311944581
    "};

    #[test]
    fn part_one_example() {
        let cave = parse(EXAMPLE).unwrap();
        assert_eq!(lowest_risk(&cave), Some(40));
    }

    #[test]
    fn tiling_wraps_risk() {
        let cave = parse("8\n").unwrap();
        let big = tile(&cave, 5);
        assert_eq!((big.width(), big.height()), (5, 5));
        let row: Vec<i32> = (0..5).map(|x| big.weight(Point::new(x, 0))).collect();
        assert_eq!(row, [8, 9, 1, 2, 3]);
        assert_eq!(big.weight(Point::new(4, 4)), 7);
    }

    #[test]
    fn part_two_example() {
        let cave = parse(EXAMPLE).unwrap();
        assert_eq!(lowest_risk_tiled(&cave), Some(315));
    }

    #[test]
    fn astar_agrees_with_dijkstra() {
        let cave = tile(&parse(EXAMPLE).unwrap(), 2);
        let (start, goal) = corners(&cave);
        let d = dijkstra_search(&cave, &start, &goal);
        let a = a_star_search(&cave, &start, &goal);
        assert_eq!(d.cost_to(&goal), a.cost_to(&goal));
        assert!(a.expanded <= d.expanded);
    }

    #[test]
    fn rejects_zero_risk() {
        assert!(matches!(parse("120\n"), Err(ParseError::Grid(_))));
    }
}
