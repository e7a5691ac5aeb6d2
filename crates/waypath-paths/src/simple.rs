use rustc_hash::FxHashMap;

use crate::traits::{Graph, Location, WeightedGraph};

/// Explicit adjacency-list graph over arbitrary node keys.
///
/// Edges are directed. An edge without an explicit cost costs 1. Nodes that
/// were never added have no neighbors.
#[derive(Debug, Clone)]
pub struct SimpleGraph<L: Location> {
    edges: FxHashMap<L, Vec<L>>,
    costs: FxHashMap<(L, L), i32>,
}

impl<L: Location> Default for SimpleGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Location> SimpleGraph<L> {
    /// Create a graph with no nodes.
    pub fn new() -> Self {
        Self {
            edges: FxHashMap::default(),
            costs: FxHashMap::default(),
        }
    }

    /// Register `id` as a node without adding edges.
    pub fn add_node(&mut self, id: L) {
        self.edges.entry(id).or_default();
    }

    /// Add the directed edge `from -> to` with cost 1.
    pub fn add_edge(&mut self, from: L, to: L) {
        self.add_node(to.clone());
        self.edges.entry(from).or_default().push(to);
    }

    /// Add the directed edge `from -> to` with an explicit positive cost.
    pub fn add_weighted_edge(&mut self, from: L, to: L, cost: i32) {
        self.costs.insert((from.clone(), to.clone()), cost);
        self.add_edge(from, to);
    }

    /// Add edges in both directions.
    pub fn add_undirected_edge(&mut self, a: L, b: L) {
        self.add_edge(a.clone(), b.clone());
        self.add_edge(b, a);
    }

    /// All known nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &L> {
        self.edges.keys()
    }

    /// Outgoing edges of `id`, empty for unknown nodes.
    pub fn edges(&self, id: &L) -> &[L] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of known nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<L: Location> FromIterator<(L, Vec<L>)> for SimpleGraph<L> {
    fn from_iter<I: IntoIterator<Item = (L, Vec<L>)>>(iter: I) -> Self {
        let mut g = Self::new();
        for (from, tos) in iter {
            g.add_node(from.clone());
            for to in tos {
                g.add_edge(from.clone(), to);
            }
        }
        g
    }
}

impl<L: Location> Graph for SimpleGraph<L> {
    type Location = L;

    fn neighbors(&self, id: &L, buf: &mut Vec<L>) {
        buf.extend_from_slice(self.edges(id));
    }
}

impl<L: Location> WeightedGraph for SimpleGraph<L> {
    type Cost = i32;

    fn cost(&self, from: &L, to: &L) -> i32 {
        // Unit-cost graphs skip the key clones.
        if self.costs.is_empty() {
            return 1;
        }
        self.costs
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(1)
    }
}
