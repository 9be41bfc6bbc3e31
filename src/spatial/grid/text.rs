//! Line-oriented text format
//!
//! One row per line, one char per cell, rows separated by a single `\n`.
//! `\r\n` line endings and a single trailing newline are accepted on parse;
//! serialization never writes a trailing newline.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use tracing::debug;

use super::*;

impl Grid<char> {
    pub fn parse(text: &str) -> GridResult<Self> {
        let grid = Grid::from_rows(text.lines().map(str::chars))?;
        debug!(
            rows = grid.row_count(),
            cols = grid.col_count(),
            "parsed grid from text"
        );
        Ok(grid)
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

/// Rows joined by `\n`, each value written with its `Display`.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
