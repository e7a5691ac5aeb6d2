//! All-pairs step counts, computed once and owned by the caller.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::bfs::breadth_first_distances;
use crate::traits::{Graph, Location};

/// Cache of shortest edge counts between pairs of nodes.
///
/// Only pairs whose endpoints were both listed at construction are stored;
/// unreachable pairs are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable<L: Location> {
    dist: FxHashMap<L, FxHashMap<L, u32>>,
}

impl<L: Location> Default for DistanceTable<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Location> DistanceTable<L> {
    pub fn new() -> Self {
        Self {
            dist: FxHashMap::default(),
        }
    }

    /// One full breadth-first search per node of `nodes`.
    pub fn from_bfs<G>(graph: &G, nodes: impl IntoIterator<Item = L>) -> Self
    where
        G: Graph<Location = L>,
    {
        let nodes: Vec<L> = nodes.into_iter().collect();
        let wanted: FxHashSet<&L> = nodes.iter().collect();
        let mut table = Self::new();
        for src in &nodes {
            let row = breadth_first_distances(graph, src)
                .into_iter()
                .filter(|(dst, _)| wanted.contains(dst))
                .collect();
            table.dist.insert(src.clone(), row);
        }
        log::debug!("distance table: {} sources via bfs", table.dist.len());
        table
    }

    /// Floyd-Warshall over the subgraph induced by `nodes`, every edge
    /// counting as one step.
    ///
    /// Paths that leave the listed nodes are not considered, so for a full
    /// node list this agrees with [`from_bfs`](Self::from_bfs).
    pub fn floyd_warshall<G>(graph: &G, nodes: impl IntoIterator<Item = L>) -> Self
    where
        G: Graph<Location = L>,
    {
        let nodes: Vec<L> = nodes.into_iter().collect();
        let index: FxHashMap<&L, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();
        let n = nodes.len();
        let mut d: Vec<Vec<Option<u32>>> = vec![vec![None; n]; n];

        let mut nbuf = Vec::new();
        for (i, node) in nodes.iter().enumerate() {
            d[i][i] = Some(0);
            nbuf.clear();
            graph.neighbors(node, &mut nbuf);
            for next in &nbuf {
                if let Some(&j) = index.get(next) {
                    if i != j {
                        d[i][j] = Some(1);
                    }
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(ik) = d[i][k] else { continue };
                for j in 0..n {
                    let Some(kj) = d[k][j] else { continue };
                    let via = ik + kj;
                    if d[i][j].is_none_or(|cur| via < cur) {
                        d[i][j] = Some(via);
                    }
                }
            }
        }

        let mut table = Self::new();
        for (i, src) in nodes.iter().enumerate() {
            let row = nodes
                .iter()
                .enumerate()
                .filter_map(|(j, dst)| d[i][j].map(|v| (dst.clone(), v)))
                .collect();
            table.dist.insert(src.clone(), row);
        }
        log::debug!("distance table: {n} nodes via floyd-warshall");
        table
    }

    /// Steps from `a` to `b`, `None` if unknown or unreachable.
    #[inline]
    pub fn get(&self, a: &L, b: &L) -> Option<u32> {
        self.dist.get(a)?.get(b).copied()
    }

    /// Record a distance explicitly.
    pub fn insert(&mut self, a: L, b: L, steps: u32) {
        self.dist.entry(a).or_default().insert(b, steps);
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.dist.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source nodes with a row in the table.
    pub fn sources(&self) -> impl Iterator<Item = &L> {
        self.dist.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple::SimpleGraph;

    fn valves() -> SimpleGraph<&'static str> {
        [
            ("AA", vec!["DD", "II", "BB"]),
            ("BB", vec!["CC", "AA"]),
            ("CC", vec!["DD", "BB"]),
            ("DD", vec!["CC", "AA", "EE"]),
            ("EE", vec!["FF", "DD"]),
            ("FF", vec!["EE", "GG"]),
            ("GG", vec!["FF", "HH"]),
            ("HH", vec!["GG"]),
            ("II", vec!["AA", "JJ"]),
            ("JJ", vec!["II"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn bfs_table() {
        let g = valves();
        let t = DistanceTable::from_bfs(&g, g.nodes().copied());
        assert_eq!(t.len(), 100);
        assert_eq!(t.get(&"AA", &"AA"), Some(0));
        assert_eq!(t.get(&"AA", &"HH"), Some(5));
        assert_eq!(t.get(&"JJ", &"HH"), Some(7));
        assert_eq!(t.get(&"CC", &"EE"), Some(2));
        assert_eq!(t.get(&"AA", &"ZZ"), None);
    }

    #[test]
    fn floyd_warshall_agrees_with_bfs() {
        let g = valves();
        let nodes: Vec<_> = g.nodes().copied().collect();
        let a = DistanceTable::from_bfs(&g, nodes.iter().copied());
        let b = DistanceTable::floyd_warshall(&g, nodes.iter().copied());
        assert_eq!(a, b);
    }

    #[test]
    fn restricted_sources_only_keep_listed_targets() {
        let g = valves();
        let t = DistanceTable::from_bfs(&g, ["AA", "HH"]);
        assert_eq!(t.len(), 4);
        assert_eq!(t.get(&"HH", &"AA"), Some(5));
        assert_eq!(t.get(&"AA", &"DD"), None);
        let mut sources: Vec<_> = t.sources().copied().collect();
        sources.sort();
        assert_eq!(sources, ["AA", "HH"]);
        assert!(DistanceTable::<&str>::new().sources().next().is_none());
    }

    #[test]
    fn directed_unreachable_pairs_are_absent() {
        let mut g = SimpleGraph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        let t = DistanceTable::floyd_warshall(&g, [1, 2, 3]);
        assert_eq!(t.get(&1, &3), Some(2));
        assert_eq!(t.get(&3, &1), None);
        let mut manual = DistanceTable::new();
        manual.insert(3, 1, 9);
        assert_eq!(manual.get(&3, &1), Some(9));
    }
}
