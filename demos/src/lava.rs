//! Surface area of a lava droplet made of unit cubes.

use rustc_hash::FxHashSet;
use waypath_core::Point3;
use waypath_paths::{CameFrom, Graph, breadth_first_search};

use crate::error::ParseError;

/// Parse one `x,y,z` cube per line.
pub fn parse(input: &str) -> Result<FxHashSet<Point3>, ParseError> {
    let mut cubes = FxHashSet::default();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let coords: Vec<&str> = line.split(',').collect();
        let [x, y, z] = coords[..] else {
            return Err(ParseError::BadLine {
                line: i + 1,
                text: line.to_string(),
            });
        };
        cubes.insert(Point3::new(x.trim().parse()?, y.trim().parse()?, z.trim().parse()?));
    }
    Ok(cubes)
}

/// Faces not shared with another cube, air pockets included.
pub fn surface_area(cubes: &FxHashSet<Point3>) -> usize {
    cubes
        .iter()
        .flat_map(|c| c.neighbors_6())
        .filter(|n| !cubes.contains(n))
        .count()
}

/// Open air around the droplet, confined to its bounding box grown by one
/// cell on every side so the outside stays connected.
pub struct Steam<'a> {
    lava: &'a FxHashSet<Point3>,
    lo: Point3,
    hi: Point3,
}

impl<'a> Steam<'a> {
    pub fn around(lava: &'a FxHashSet<Point3>) -> Self {
        let one = Point3::new(1, 1, 1);
        let (lo, hi) = lava
            .iter()
            .fold(None, |acc: Option<(Point3, Point3)>, &c| match acc {
                None => Some((c, c)),
                Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
            })
            .unwrap_or_default();
        Self {
            lava,
            lo: lo - one,
            hi: hi + one,
        }
    }

    /// A corner of the box, always outside the droplet.
    pub fn corner(&self) -> Point3 {
        self.lo
    }

    fn inside(&self, p: Point3) -> bool {
        (self.lo.x..=self.hi.x).contains(&p.x)
            && (self.lo.y..=self.hi.y).contains(&p.y)
            && (self.lo.z..=self.hi.z).contains(&p.z)
    }
}

impl Graph for Steam<'_> {
    type Location = Point3;

    fn neighbors(&self, id: &Point3, buf: &mut Vec<Point3>) {
        buf.extend(
            id.neighbors_6()
                .into_iter()
                .filter(|&n| self.inside(n) && !self.lava.contains(&n)),
        );
    }
}

/// Faces reachable by steam flowing in from outside the droplet.
pub fn exterior_area(cubes: &FxHashSet<Point3>) -> usize {
    let steam = Steam::around(cubes);
    let outside: CameFrom<Point3> = breadth_first_search(&steam, &steam.corner());
    log::debug!("steam filled {} cells", outside.len());
    cubes
        .iter()
        .flat_map(|c| c.neighbors_6())
        .filter(|n| outside.contains(n))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        2,2,2
        1,2,2
        3,2,2
        2,1,2
        2,3,2
        2,2,1
        2,2,3
        2,2,4
        2,2,6
        1,2,5
        3,2,5
        2,1,5
        2,3,5
    "};

    #[test]
    fn two_cubes_share_a_face() {
        let cubes = parse("1,1,1\n2,1,1\n").unwrap();
        assert_eq!(surface_area(&cubes), 10);
        assert_eq!(exterior_area(&cubes), 10);
    }

    #[test]
    fn part_one_example() {
        let cubes = parse(EXAMPLE).unwrap();
        assert_eq!(cubes.len(), 13);
        assert_eq!(surface_area(&cubes), 64);
    }

    #[test]
    fn part_two_example() {
        let cubes = parse(EXAMPLE).unwrap();
        assert_eq!(exterior_area(&cubes), 58);
    }

    #[test]
    fn steam_stays_in_the_box() {
        let cubes = parse("0,0,0\n").unwrap();
        let steam = Steam::around(&cubes);
        let reached = breadth_first_search(&steam, &steam.corner());
        // 3x3x3 box minus the cube itself.
        assert_eq!(reached.len(), 26);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            parse("1,2\n"),
            Err(ParseError::BadLine { line: 1, .. })
        ));
        assert!(matches!(parse("1,a,2\n"), Err(ParseError::BadNumber(_))));
    }

    #[test]
    fn empty_input() {
        let cubes = parse("").unwrap();
        assert_eq!(surface_area(&cubes), 0);
        assert_eq!(exterior_area(&cubes), 0);
    }
}
