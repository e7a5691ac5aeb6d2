use crate::dijkstra::best_first;
use crate::frontier::SearchResult;
use crate::traits::{AstarGraph, WeightedGraph};

/// A* search from `start` to `goal` using the graph's own
/// [`estimate`](AstarGraph::estimate) as heuristic.
///
/// Same contract as [`dijkstra_search`](crate::dijkstra_search); with an
/// admissible estimate the cost found is identical, usually after
/// expanding fewer nodes.
pub fn a_star_search<G: AstarGraph>(
    graph: &G,
    start: &G::Location,
    goal: &G::Location,
) -> SearchResult<G::Location, G::Cost> {
    best_first(graph, start, goal, |n, g| graph.estimate(n, g), "a*")
}

/// A* search with a caller-supplied heuristic.
///
/// The heuristic is not checked: one that overestimates can return a
/// suboptimal cost for `goal`.
pub fn a_star_search_with<G, H>(
    graph: &G,
    start: &G::Location,
    goal: &G::Location,
    heuristic: H,
) -> SearchResult<G::Location, G::Cost>
where
    G: WeightedGraph,
    H: Fn(&G::Location, &G::Location) -> G::Cost,
{
    best_first(graph, start, goal, heuristic, "a*")
}
