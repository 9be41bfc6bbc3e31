//! Grid - rectangular table of cell values
//!
//! One contiguous row-major `Vec<T>` holds every value:
//!
//!   index = row * col_count + col
//!
//! The grid is the single source of truth. `Cell` handles only carry a
//! position and a borrow of the grid, so every read goes back to `cells`.
//!
//! Split by concern the same way the rest of the engine is:
//! - `indexing`   dimensions, bounds, position <-> index
//! - `accessors`  lookup, search and in-place mutation
//! - `iter`       row-major cell iteration
//! - `text`       line-oriented text parse / serialize
//! - `transform`  rotate, transpose, flip (new grids)
//! - `snapshot`   serde support

use crate::error::{GridError, GridResult};

mod accessors;
mod indexing;
mod iter;
mod snapshot;
mod text;
mod transform;

pub use iter::Cells;
pub use transform::TransformValue;
pub(crate) use indexing::in_bounds;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    row_count: usize,
    col_count: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Uniform grid with every cell set to `fill`.
    pub fn filled(row_count: usize, col_count: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self::from_parts(row_count, col_count, vec![fill; row_count * col_count])
    }

    /// Grid whose value at each position is produced by `f`, row-major.
    pub fn from_fn(row_count: usize, col_count: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(row_count * col_count);
        for row in 0..row_count {
            for col in 0..col_count {
                cells.push(f(row, col));
            }
        }
        Self::from_parts(row_count, col_count, cells)
    }

    /// Build from rows of values. Every row must have the width of the first.
    ///
    /// `[[], []]` and `[]` both give the empty grid.
    pub fn from_rows<I, R>(rows: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut row_count = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow { row, expected, found });
                }
                Some(_) => {}
            }
            row_count += 1;
        }

        Ok(Self::from_parts(row_count, width.unwrap_or(0), cells))
    }

    /// Every constructor funnels through here. A shape with a zero
    /// dimension holds no cells and collapses to 0x0.
    pub(crate) fn from_parts(row_count: usize, col_count: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(
            cells.len(),
            row_count * col_count,
            "from_parts: {} cells for a {}x{} grid",
            cells.len(),
            row_count,
            col_count
        );
        debug_assert!(
            row_count <= i32::MAX as usize && col_count <= i32::MAX as usize,
            "from_parts: {}x{} exceeds GridPos range",
            row_count,
            col_count
        );
        if row_count == 0 || col_count == 0 {
            return Self { row_count: 0, col_count: 0, cells };
        }
        Self { row_count, col_count, cells }
    }

    /// Same shape, every value passed through `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid::from_parts(self.row_count, self.col_count, self.cells.iter().map(f).collect())
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        // max(1): chunks(0) panics, and an empty grid has no cells anyway
        self.cells.chunks(self.col_count.max(1))
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.row_count {
            return None;
        }
        let start = row * self.col_count;
        Some(&self.cells[start..start + self.col_count])
    }

    /// Values of one column, top to bottom. Empty when `col` is out of range.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        let take = if col < self.col_count { self.row_count } else { 0 };
        self.cells.iter().skip(col).step_by(self.col_count.max(1)).take(take)
    }

    /// Raw row-major storage.
    pub fn values(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn values_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn into_values(self) -> Vec<T> {
        self.cells
    }
}
