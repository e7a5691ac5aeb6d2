//! Exhaustive enumeration driven by an explicit worklist.
//!
//! Both iterators keep their pending branches on a heap-allocated stack, so
//! deep searches cannot overflow the call stack, and each result is handed
//! out as soon as it is discovered.

use crate::table::DistanceTable;
use crate::traits::{Graph, Location};

/// Every simple path (no repeated node) that starts at a given node.
///
/// Created by [`simple_paths`]. The trivial path `[start]` is yielded first;
/// paths are produced in depth-first order.
pub struct SimplePaths<'g, G: Graph> {
    graph: &'g G,
    stack: Vec<Vec<G::Location>>,
    max_len: Option<usize>,
    nbuf: Vec<G::Location>,
}

/// Enumerate simple paths from `start` in `graph`.
pub fn simple_paths<G: Graph>(graph: &G, start: G::Location) -> SimplePaths<'_, G> {
    SimplePaths {
        graph,
        stack: vec![vec![start]],
        max_len: None,
        nbuf: Vec::new(),
    }
}

impl<G: Graph> SimplePaths<'_, G> {
    /// Stop extending paths once they hold `max_len` nodes.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

impl<G: Graph> Iterator for SimplePaths<'_, G> {
    type Item = Vec<G::Location>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.stack.pop()?;
        if self.max_len.is_none_or(|m| path.len() < m) {
            if let Some(last) = path.last() {
                self.nbuf.clear();
                self.graph.neighbors(last, &mut self.nbuf);
                // Reverse so the first neighbor is explored first.
                for next in self.nbuf.iter().rev() {
                    if path.contains(next) {
                        continue;
                    }
                    let mut longer = Vec::with_capacity(path.len() + 1);
                    longer.extend_from_slice(&path);
                    longer.push(next.clone());
                    self.stack.push(longer);
                }
            }
        }
        Some(path)
    }
}

/// One stop of a [`Tours`] result: the target and the budget left after
/// travelling there and spending one unit at it.
pub type Stop<L> = (L, u32);

struct TourState<L> {
    at: L,
    budget: u32,
    chosen: Vec<Stop<L>>,
}

/// Budgeted visiting orders over a [`DistanceTable`].
///
/// From the current node, any target not yet chosen may be visited next if
/// reaching it (`distance` steps) and working at it (one more unit) leaves
/// at least 2 units of budget. Every partial tour is yielded, including the
/// empty one.
pub struct Tours<'t, L: Location> {
    distances: &'t DistanceTable<L>,
    targets: Vec<L>,
    stack: Vec<TourState<L>>,
}

/// Enumerate tours that start at `start` with `budget` units to spend.
pub fn tours<L: Location>(
    distances: &DistanceTable<L>,
    start: L,
    targets: impl IntoIterator<Item = L>,
    budget: u32,
) -> Tours<'_, L> {
    Tours {
        distances,
        targets: targets.into_iter().collect(),
        stack: vec![TourState {
            at: start,
            budget,
            chosen: Vec::new(),
        }],
    }
}

impl<L: Location> Iterator for Tours<'_, L> {
    type Item = Vec<Stop<L>>;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.stack.pop()?;
        for target in &self.targets {
            if state.chosen.iter().any(|(t, _)| t == target) {
                continue;
            }
            let Some(d) = self.distances.get(&state.at, target) else {
                continue;
            };
            let left = match state.budget.checked_sub(d + 1) {
                Some(left) if left >= 2 => left,
                _ => continue,
            };
            let mut chosen = state.chosen.clone();
            chosen.push((target.clone(), left));
            self.stack.push(TourState {
                at: target.clone(),
                budget: left,
                chosen,
            });
        }
        Some(state.chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SquareGrid;
    use crate::simple::SimpleGraph;
    use waypath_core::Point;

    #[test]
    fn simple_paths_on_a_triangle() {
        let mut g = SimpleGraph::new();
        g.add_undirected_edge('a', 'b');
        g.add_undirected_edge('b', 'c');
        g.add_undirected_edge('a', 'c');
        let mut paths: Vec<String> = simple_paths(&g, 'a').map(|p| p.into_iter().collect()).collect();
        paths.sort();
        assert_eq!(paths, vec!["a", "ab", "abc", "ac", "acb"]);
    }

    #[test]
    fn simple_paths_never_repeat_nodes() {
        let g = SquareGrid::new(3, 3);
        let mut count = 0;
        for path in simple_paths(&g, Point::new(0, 0)) {
            let mut seen = path.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), path.len());
            count += 1;
        }
        assert!(count > 9);
    }

    #[test]
    fn simple_paths_respect_max_len() {
        let g = SquareGrid::new(4, 4);
        let paths: Vec<_> = simple_paths(&g, Point::new(0, 0)).max_len(2).collect();
        // [start] plus one path per neighbor.
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.len() <= 2));
    }

    #[test]
    fn tours_respect_budget() {
        let mut t = DistanceTable::new();
        for (a, b, d) in [("s", "x", 1), ("s", "y", 2), ("x", "y", 1), ("y", "x", 1)] {
            t.insert(a, b, d);
        }
        let mut all: Vec<Vec<Stop<&str>>> = tours(&t, "s", ["x", "y"], 6).collect();
        all.sort();
        assert_eq!(
            all,
            vec![
                vec![],
                vec![("x", 4)],
                vec![("x", 4), ("y", 2)],
                vec![("y", 3)],
            ]
        );
    }

    #[test]
    fn tours_skip_unreachable_targets() {
        let mut t = DistanceTable::new();
        t.insert("s", "x", 1);
        let all: Vec<_> = tours(&t, "s", ["x", "nowhere"], 10).collect();
        assert_eq!(all.len(), 2);
    }
}
