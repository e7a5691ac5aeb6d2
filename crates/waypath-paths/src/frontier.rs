//! Per-search bookkeeping returned to the caller: the predecessor map
//! ([`CameFrom`]), the cumulative cost map ([`CostSoFar`]) and the bundle of
//! both produced by weighted searches ([`SearchResult`]).

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::path::{PathOptions, reconstruct_path};
use crate::traits::{Cost, Location};

/// Predecessor of every node reached by a search. The start node maps to
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameFrom<L: Location> {
    map: FxHashMap<L, Option<L>>,
}

impl<L: Location> Default for CameFrom<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Location> CameFrom<L> {
    /// Empty map, with no root yet.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Map seeded with `start` as the root.
    pub fn rooted_at(start: L) -> Self {
        let mut cf = Self::new();
        cf.map.insert(start, None);
        cf
    }

    /// Record `prev` as the predecessor of `id`, replacing any earlier one.
    #[inline]
    pub fn set(&mut self, id: L, prev: L) {
        self.map.insert(id, Some(prev));
    }

    /// Record `prev` only if `id` has not been reached yet. Returns whether
    /// the entry was new.
    #[inline]
    pub fn discover(&mut self, id: L, prev: L) -> bool {
        match self.map.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(Some(prev));
                true
            }
        }
    }

    /// `None` if `id` was never reached, `Some(None)` for the root,
    /// `Some(Some(prev))` otherwise.
    #[inline]
    pub fn predecessor(&self, id: &L) -> Option<Option<&L>> {
        self.map.get(id).map(Option::as_ref)
    }

    /// Whether `id` was reached.
    #[inline]
    pub fn contains(&self, id: &L) -> bool {
        self.map.contains_key(id)
    }

    /// Number of reached nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All reached nodes, in no particular order.
    pub fn reached(&self) -> impl Iterator<Item = &L> {
        self.map.keys()
    }

    /// Every `(node, predecessor)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&L, Option<&L>)> {
        self.map.iter().map(|(k, v)| (k, v.as_ref()))
    }

    /// Number of edges from the root to `id`, if reached.
    pub fn depth(&self, id: &L) -> Option<usize> {
        let mut depth = 0;
        let mut cur = id;
        loop {
            match self.predecessor(cur)? {
                None => return Some(depth),
                Some(prev) => {
                    depth += 1;
                    cur = prev;
                    if depth > self.map.len() {
                        return None;
                    }
                }
            }
        }
    }
}

impl<L: Location> FromIterator<(L, Option<L>)> for CameFrom<L> {
    fn from_iter<I: IntoIterator<Item = (L, Option<L>)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Best known cumulative cost from the start to every node reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostSoFar<L: Location, C: Cost> {
    map: FxHashMap<L, C>,
}

impl<L: Location, C: Cost> Default for CostSoFar<L, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Location, C: Cost> CostSoFar<L, C> {
    /// Empty map.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Cost recorded for `id`, `None` if it was never reached.
    #[inline]
    pub fn cost(&self, id: &L) -> Option<C> {
        self.map.get(id).copied()
    }

    /// Store `cost` for `id` if it improves on the recorded one (or none is
    /// recorded). Returns whether the map changed.
    #[inline]
    pub fn relax(&mut self, id: L, cost: C) -> bool {
        match self.map.entry(id) {
            Entry::Occupied(mut o) => {
                if cost < *o.get() {
                    o.insert(cost);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(v) => {
                v.insert(cost);
                true
            }
        }
    }

    #[inline]
    pub fn contains(&self, id: &L) -> bool {
        self.map.contains_key(id)
    }

    /// Number of nodes with a recorded cost.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Every `(node, cost)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &C)> {
        self.map.iter()
    }
}

/// Output of [`dijkstra_search`](crate::dijkstra_search) and
/// [`a_star_search`](crate::a_star_search).
#[derive(Debug, Clone)]
pub struct SearchResult<L: Location, C: Cost> {
    pub came_from: CameFrom<L>,
    pub cost_so_far: CostSoFar<L, C>,
    /// Nodes popped from the frontier and expanded.
    pub expanded: usize,
}

impl<L: Location, C: Cost> SearchResult<L, C> {
    /// Total cost of the best path to `goal`, `None` if unreachable.
    #[inline]
    pub fn cost_to(&self, goal: &L) -> Option<C> {
        self.cost_so_far.cost(goal)
    }

    /// Whether `goal` was reached.
    #[inline]
    pub fn reached(&self, goal: &L) -> bool {
        self.came_from.contains(goal)
    }

    /// Path from `start` to `goal`, both inclusive. Empty if unreachable.
    pub fn path(&self, start: &L, goal: &L) -> Vec<L> {
        reconstruct_path(&self.came_from, start, goal, PathOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn came_from_root_and_discovery() {
        let mut cf = CameFrom::rooted_at('a');
        assert_eq!(cf.predecessor(&'a'), Some(None));
        assert!(cf.discover('b', 'a'));
        assert!(!cf.discover('b', 'c'));
        assert_eq!(cf.predecessor(&'b'), Some(Some(&'a')));
        assert_eq!(cf.predecessor(&'z'), None);
        assert_eq!(cf.len(), 2);
    }

    #[test]
    fn came_from_depth() {
        let mut cf = CameFrom::rooted_at(0);
        cf.set(1, 0);
        cf.set(2, 1);
        cf.set(3, 1);
        assert_eq!(cf.depth(&0), Some(0));
        assert_eq!(cf.depth(&2), Some(2));
        assert_eq!(cf.depth(&3), Some(2));
        assert_eq!(cf.depth(&9), None);
    }

    #[test]
    fn came_from_depth_stops_on_cycles() {
        let cf: CameFrom<u8> = [(1, Some(2)), (2, Some(1))].into_iter().collect();
        assert_eq!(cf.depth(&1), None);
    }

    #[test]
    fn cost_so_far_relaxes_only_on_improvement() {
        let mut c = CostSoFar::new();
        assert!(c.relax("x", 10));
        assert!(!c.relax("x", 10));
        assert!(!c.relax("x", 12));
        assert!(c.relax("x", 4));
        assert_eq!(c.cost(&"x"), Some(4));
        assert_eq!(c.cost(&"y"), None);
    }
}
