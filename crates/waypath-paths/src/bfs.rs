use rustc_hash::FxHashMap;

use crate::frontier::CameFrom;
use crate::queue::Queue;
use crate::traits::Graph;

/// Breadth-first search from `start` over the whole reachable component.
///
/// Following `came_from` back from any reached node gives a path with the
/// fewest possible edges.
pub fn breadth_first_search<G: Graph>(graph: &G, start: &G::Location) -> CameFrom<G::Location> {
    explore(graph, start, None)
}

/// Breadth-first search that stops as soon as `goal` is discovered.
///
/// The predecessor chain of `goal` is identical to the one a full
/// [`breadth_first_search`] would produce.
pub fn breadth_first_search_to<G: Graph>(
    graph: &G,
    start: &G::Location,
    goal: &G::Location,
) -> CameFrom<G::Location> {
    explore(graph, start, Some(goal))
}

/// Edge count from `start` to every reachable node.
pub fn breadth_first_distances<G: Graph>(
    graph: &G,
    start: &G::Location,
) -> FxHashMap<G::Location, u32> {
    let mut dist = FxHashMap::default();
    dist.insert(start.clone(), 0);
    let mut frontier = Queue::new();
    frontier.put(start.clone());
    let mut nbuf = Vec::new();

    while let Some(current) = frontier.get() {
        let d = dist[&current];
        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            if dist.contains_key(&next) {
                continue;
            }
            dist.insert(next.clone(), d + 1);
            frontier.put(next);
        }
    }
    dist
}

fn explore<G: Graph>(
    graph: &G,
    start: &G::Location,
    goal: Option<&G::Location>,
) -> CameFrom<G::Location> {
    let mut frontier = Queue::new();
    frontier.put(start.clone());
    let mut came_from = CameFrom::rooted_at(start.clone());
    if goal == Some(start) {
        return came_from;
    }
    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    'search: while let Some(current) = frontier.get() {
        expanded += 1;
        log::trace!("bfs: visiting {current:?}");
        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            if came_from.discover(next.clone(), current.clone()) {
                if goal == Some(&next) {
                    break 'search;
                }
                frontier.put(next);
            }
        }
    }

    log::debug!(
        "bfs from {start:?}: expanded {expanded}, reached {}",
        came_from.len()
    );
    came_from
}
