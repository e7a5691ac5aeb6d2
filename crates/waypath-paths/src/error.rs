use thiserror::Error;
use waypath_core::Point;

/// Errors raised while building a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input has no rows.
    #[error("grid: empty input")]
    Empty,
    /// A row is wider or narrower than the first one.
    #[error("grid: row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that the parser does not accept.
    #[error("grid: invalid cell `{ch}` at {pos}")]
    InvalidCell { ch: char, pos: Point },
}
