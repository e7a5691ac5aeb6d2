//! Graph search over grids and node graphs.
//!
//! This crate provides the classic trio of shortest-path searches plus the
//! pieces needed to use them:
//!
//! - **BFS** fewest-edges predecessor maps ([`breadth_first_search`])
//! - **Dijkstra** minimum-cost search ([`dijkstra_search`])
//! - **A\*** heuristic-guided search ([`a_star_search`], [`a_star_search_with`])
//! - **Path reconstruction** from predecessor maps ([`reconstruct_path`])
//! - **Distance tables** of all-pairs step counts ([`DistanceTable`])
//! - **Enumeration** of simple paths and budgeted tours ([`simple_paths`], [`tours`])
//! - **ASCII rendering** for debugging ([`draw_grid`])
//!
//! Searches are single calls with no state carried between them; the graph
//! is only borrowed and must not change while a search runs.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | BFS, distance tables, enumeration |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra, A* with a custom heuristic |
//! | [`AstarGraph`] : [`WeightedGraph`] | A* with the graph's own estimate |
//!
//! [`SquareGrid`] and [`GridWithWeights`] implement all three;
//! [`SimpleGraph`] implements the first two.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod draw;
mod enumerate;
mod error;
mod frontier;
mod grid;
mod path;
mod queue;
mod simple;
mod table;
mod traits;

pub use astar::{a_star_search, a_star_search_with};
pub use bfs::{breadth_first_distances, breadth_first_search, breadth_first_search_to};
pub use dijkstra::dijkstra_search;
pub use distance::{chebyshev, manhattan};
pub use draw::{DrawStyle, draw_grid, print_grid};
pub use enumerate::{SimplePaths, Stop, Tours, simple_paths, tours};
pub use error::GridError;
pub use frontier::{CameFrom, CostSoFar, SearchResult};
pub use grid::{GridWithWeights, NeighborOrder, SquareGrid, from_id_width, parse_cells};
pub use path::{PathOptions, reconstruct_path};
pub use queue::{PriorityQueue, Queue};
pub use simple::SimpleGraph;
pub use table::DistanceTable;
pub use traits::{AstarGraph, Cost, Graph, Location, WeightedGraph};
