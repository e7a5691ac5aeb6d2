use std::num::ParseIntError;

use thiserror::Error;
use waypath_paths::GridError;

/// Errors raised while turning puzzle input into a graph.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("input has no `{0}` marker")]
    MissingMarker(char),
    #[error("input has no valve `{0}`")]
    MissingValve(String),
    #[error("{found} valves have a flow rate, at most {max} are supported")]
    TooManyValves { found: usize, max: usize },
    #[error("line {line}: cannot parse `{text}`")]
    BadLine { line: usize, text: String },
    #[error("bad number: {0}")]
    BadNumber(#[from] ParseIntError),
}
