//! Puzzle solvers that drive the `waypath-paths` searches.
//!
//! Each module parses one puzzle's text input into a concrete graph, runs a
//! search and turns the result into an answer:
//!
//! - [`hill`]: heightmap climbing with A* and reverse BFS
//! - [`volcano`]: valve network tours over a BFS distance table
//! - [`lava`]: droplet surface area via a 3D flood fill
//! - [`chiton`]: digit-weighted grid with Dijkstra and A*
//! - [`diagrams`]: the classic search walkthrough rendered as ASCII

pub mod chiton;
pub mod diagrams;
pub mod error;
pub mod hill;
pub mod lava;
pub mod volcano;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub use error::ParseError;

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` level; `log` records from the search crates are forwarded.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the puzzle input named by the first command-line argument.
pub fn input_from_args(bin: &str) -> anyhow::Result<String> {
    let path = std::env::args()
        .nth(1)
        .with_context(|| format!("usage: {bin} <input-file>"))?;
    std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))
}
