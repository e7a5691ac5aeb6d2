use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::Zero;

/// Key identifying one node of a search space.
///
/// Grid cells use [`Point`](waypath_core::Point); node graphs can use any
/// hashable name such as `&str` or `String`.
pub trait Location: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Location for T {}

/// Scalar accumulated along a path. Must be totally ordered so it can key
/// the priority queue.
pub trait Cost: Copy + Ord + Add<Output = Self> + Zero + Debug {}

impl<T: Copy + Ord + Add<Output = T> + Zero + Debug> Cost for T {}

/// Minimal search interface: neighbor enumeration.
///
/// Implementations must not change while a search borrowing them runs.
pub trait Graph {
    type Location: Location;

    /// Append neighbors of `id` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, id: &Self::Location, buf: &mut Vec<Self::Location>);
}

/// Graph with positive traversal costs.
pub trait WeightedGraph: Graph {
    type Cost: Cost;

    /// Cost of stepping from `from` into adjacent `to`. Must be > 0.
    fn cost(&self, from: &Self::Location, to: &Self::Location) -> Self::Cost;
}

/// Weighted graph that also knows an admissible heuristic.
pub trait AstarGraph: WeightedGraph {
    /// Estimated remaining cost from `from` to `to`.
    /// Must never overestimate the true cost.
    fn estimate(&self, from: &Self::Location, to: &Self::Location) -> Self::Cost;
}
