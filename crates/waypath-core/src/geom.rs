//! Geometry primitives: [`Point`], [`Point3`] and [`Range`].
//!
//! Grid coordinates grow right along `x` and down along `y`, so "north" is
//! `y - 1` and "south" is `y + 1`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

/// Unit steps north, east, south, west.
const DIRS_4: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Unit steps clockwise from north, diagonals included.
const DIRS_8: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A cell coordinate on a 2D grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Checkerboard colour: `x + y` is even. Holds for negative coordinates
    /// too.
    #[inline]
    pub const fn is_even(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 0
    }

    /// North, east, south and west of this point.
    pub fn neighbors_4(self) -> [Point; 4] {
        DIRS_4.map(|(dx, dy)| self.shift(dx, dy))
    }

    /// The eight surrounding points, clockwise from north.
    pub fn neighbors_8(self) -> [Point; 8] {
        DIRS_8.map(|(dx, dy)| self.shift(dx, dy))
    }
}

/// Row-major: by `y`, then by `x`.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A voxel coordinate in 3D space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The six points sharing a face with this one: +x, -x, +y, -y, +z, -z.
    pub fn neighbors_6(self) -> [Point3; 6] {
        [
            Self::new(1, 0, 0),
            Self::new(-1, 0, 0),
            Self::new(0, 1, 0),
            Self::new(0, -1, 0),
            Self::new(0, 0, 1),
            Self::new(0, 0, -1),
        ]
        .map(|d| self + d)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Component-wise `Add`/`Sub` with another point and `Mul`/`Div` by a scalar.
macro_rules! coord_ops {
    ($t:ident { $($f:ident),+ }) => {
        impl Add for $t {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $t {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul<i32> for $t {
            type Output = Self;
            #[inline]
            fn mul(self, k: i32) -> Self {
                Self { $($f: self.$f * k),+ }
            }
        }

        impl Div<i32> for $t {
            type Output = Self;
            #[inline]
            fn div(self, k: i32) -> Self {
                Self { $($f: self.$f / k),+ }
            }
        }
    };
}

coord_ops!(Point { x, y });
coord_ops!(Point3 { x, y, z });

/// Half-open rectangle: `min` is the first cell inside, `max` the first
/// cell past the end on each axis.
///
/// A range with no area is empty; all empty ranges are equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanned by two corners given in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `[0, width) x [0, height)`; negative sizes give an empty range.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width.max(0), height.max(0))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// `(width, height)` as a point.
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of cells inside.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells inside both ranges. Disjoint ranges give `Range::default()`.
    pub fn intersect(self, other: Range) -> Self {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        let r = Self { min, max };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Smallest range holding both. Empty ranges are ignored.
    pub fn union(self, other: Range) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => other,
            (_, true) => self,
            _ => Self {
                min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
                max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
            },
        }
    }

    /// Every cell in row-major order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            origin: self.min,
            width: self.width().max(0) as usize,
            next: 0,
            end: self.len(),
        }
    }

    fn canonical(self) -> (Point, Point) {
        if self.is_empty() {
            (Point::ZERO, Point::ZERO)
        } else {
            (self.min, self.max)
        }
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`Range`], created by
/// [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    origin: Point,
    width: usize,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(self.origin.shift((i % self.width) as i32, (i / self.width) as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn geometry_through_json() {
        let p = Point3::new(1, -2, 3);
        let back: Point3 = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);

        let r = Range::new(0, 0, 8, 5);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
    }
}
