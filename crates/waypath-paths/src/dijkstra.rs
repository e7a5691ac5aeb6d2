use num_traits::Zero;

use crate::frontier::{CameFrom, CostSoFar, SearchResult};
use crate::queue::PriorityQueue;
use crate::traits::WeightedGraph;

/// Minimum-cost search from `start`, stopping once `goal` is popped.
///
/// When `goal` is reachable, `cost_so_far` holds its true minimum cost and
/// `came_from` leads back along a minimum-cost path. Otherwise the whole
/// reachable component is explored and `goal` is absent from both maps.
/// Step costs must be positive.
pub fn dijkstra_search<G: WeightedGraph>(
    graph: &G,
    start: &G::Location,
    goal: &G::Location,
) -> SearchResult<G::Location, G::Cost> {
    best_first(graph, start, goal, |_, _| G::Cost::zero(), "dijkstra")
}

/// Shared loop for Dijkstra and A*: the frontier is ordered by
/// `g + heuristic(node, goal)`.
pub(crate) fn best_first<G, H>(
    graph: &G,
    start: &G::Location,
    goal: &G::Location,
    heuristic: H,
    name: &str,
) -> SearchResult<G::Location, G::Cost>
where
    G: WeightedGraph,
    H: Fn(&G::Location, &G::Location) -> G::Cost,
{
    let zero = G::Cost::zero();
    let mut frontier: PriorityQueue<(G::Location, G::Cost), G::Cost> = PriorityQueue::new();
    frontier.put((start.clone(), zero), zero);
    let mut came_from = CameFrom::rooted_at(start.clone());
    let mut cost_so_far = CostSoFar::new();
    cost_so_far.relax(start.clone(), zero);

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;
    let mut found = false;

    while let Some((current, current_g)) = frontier.get() {
        if &current == goal {
            found = true;
            break;
        }
        // Skip stale entries superseded by a cheaper relaxation.
        if cost_so_far.cost(&current).is_some_and(|best| current_g > best) {
            continue;
        }
        expanded += 1;
        log::trace!("{name}: expanding {current:?} at {current_g:?}");

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            let new_cost = current_g + graph.cost(&current, &next);
            if cost_so_far.relax(next.clone(), new_cost) {
                let priority = new_cost + heuristic(&next, goal);
                came_from.set(next.clone(), current.clone());
                frontier.put((next, new_cost), priority);
            }
        }
    }

    log::debug!(
        "{name} {start:?} -> {goal:?}: found={found}, expanded {expanded}, reached {}",
        cost_so_far.len()
    );
    SearchResult {
        came_from,
        cost_so_far,
        expanded,
    }
}

/// Panics unless every consecutive pair of `path` is an edge of `g`.
#[cfg(test)]
pub(crate) fn assert_valid_path<G: crate::traits::Graph>(g: &G, path: &[G::Location]) {
    let mut buf = Vec::new();
    for w in path.windows(2) {
        buf.clear();
        g.neighbors(&w[0], &mut buf);
        assert!(buf.contains(&w[1]), "{:?} -> {:?} is not an edge", w[0], w[1]);
    }
}
