//! Error types
//!
//! Only structurally invalid input is an error. Walking off the grid or a
//! lookup with no match is an ordinary `None`, never a `GridError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// A row's width differs from the first row's width.
    #[error("malformed grid: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Requested dimensions overflow the index or position range.
    #[error("grid of {rows}x{cols} cells is too large")]
    Oversized { rows: u64, cols: u64 },

    #[error("unknown heading glyph {0:?}")]
    UnknownHeading(char),

    #[error("unknown rotation {0:?} (expected \"CW\" or \"CCW\")")]
    UnknownRotation(String),

    #[error("invalid grid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GridResult<T> = Result<T, GridError>;
