//! Rotate / transpose / flip
//!
//! Every transform builds a brand-new grid; the source is only read.
//! Each one is a remap: for every destination (row, col), which source
//! index supplies the value. With the `parallel` feature the destination
//! buffer is filled with Rayon, which is why the value bound tightens to
//! `Send + Sync` under that feature only.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::*;
use crate::spatial::direction::Rotation;

/// Values a grid transform can copy into a new buffer.
#[cfg(feature = "parallel")]
pub trait TransformValue: Clone + Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Clone + Send + Sync> TransformValue for T {}

/// Values a grid transform can copy into a new buffer.
#[cfg(not(feature = "parallel"))]
pub trait TransformValue: Clone {}
#[cfg(not(feature = "parallel"))]
impl<T: Clone> TransformValue for T {}

impl<T: TransformValue> Grid<T> {
    /// Rotate by `turns` quarter turns in the given sense. Turns are taken
    /// mod 4, so four turns either way reproduce the source.
    pub fn rotate(&self, turns: u32, rotation: Rotation) -> Grid<T> {
        let quarter = turns % 4;
        let clockwise = match rotation {
            Rotation::Clockwise => quarter,
            Rotation::CounterClockwise => (4 - quarter) % 4,
        };
        debug!(turns, ?rotation, clockwise, "rotating grid");
        match clockwise {
            0 => self.clone(),
            1 => self.rotate_cw(),
            2 => self.rotate_half(),
            _ => self.rotate_ccw(),
        }
    }

    /// Old (r, c) of an R x C grid lands on (c, R-1-r) of the C x R result.
    pub fn rotate_cw(&self) -> Grid<T> {
        let (rows, cols) = (self.row_count, self.col_count);
        self.remap(cols, rows, |r, c| (rows - 1 - c) * cols + r)
    }

    /// Inverse of `rotate_cw`: old (r, c) lands on (C-1-c, r).
    pub fn rotate_ccw(&self) -> Grid<T> {
        let (rows, cols) = (self.row_count, self.col_count);
        self.remap(cols, rows, |r, c| c * cols + (cols - 1 - r))
    }

    pub fn rotate_half(&self) -> Grid<T> {
        let (rows, cols) = (self.row_count, self.col_count);
        self.remap(rows, cols, |r, c| (rows - 1 - r) * cols + (cols - 1 - c))
    }

    /// Swap rows and columns without reflection: old (r, c) lands on (c, r).
    pub fn transpose(&self) -> Grid<T> {
        let (rows, cols) = (self.row_count, self.col_count);
        debug!(rows, cols, "transposing grid");
        self.remap(cols, rows, |r, c| c * cols + r)
    }

    /// Mirror left-right.
    pub fn flip_horizontal(&self) -> Grid<T> {
        let (rows, cols) = (self.row_count, self.col_count);
        self.remap(rows, cols, |r, c| r * cols + (cols - 1 - c))
    }

    /// Mirror top-bottom.
    pub fn flip_vertical(&self) -> Grid<T> {
        let (rows, cols) = (self.row_count, self.col_count);
        self.remap(rows, cols, |r, c| (rows - 1 - r) * cols + c)
    }

    /// `source(row, col)` gives the source index for each destination cell.
    fn remap(
        &self,
        row_count: usize,
        col_count: usize,
        source: impl Fn(usize, usize) -> usize + Send + Sync,
    ) -> Grid<T> {
        let len = row_count * col_count;

        #[cfg(feature = "parallel")]
        let cells: Vec<T> = (0..len)
            .into_par_iter()
            .map(|i| self.cells[source(i / col_count, i % col_count)].clone())
            .collect();

        #[cfg(not(feature = "parallel"))]
        let cells: Vec<T> = (0..len)
            .map(|i| self.cells[source(i / col_count, i % col_count)].clone())
            .collect();

        Grid::from_parts(row_count, col_count, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::pos::GridPos;

    fn sample() -> Grid<char> {
        // 2 x 3
        Grid::parse("abc\ndef").unwrap()
    }

    #[test]
    fn clockwise_quarter_turn() {
        let rotated = sample().rotate_cw();
        assert_eq!(rotated.to_string(), "da\neb\nfc");
        assert_eq!(rotated.row_count(), 3);
        assert_eq!(rotated.col_count(), 2);
    }

    #[test]
    fn clockwise_maps_r_c_to_c_r_minus() {
        let grid = sample();
        let rotated = grid.rotate(1, Rotation::Clockwise);
        let rows = grid.row_count() as i32;
        for cell in grid.iter() {
            let target = GridPos::new(cell.col(), rows - 1 - cell.row());
            assert_eq!(rotated.value(target), Some(cell.value()));
        }
    }

    #[test]
    fn counter_clockwise_undoes_clockwise() {
        let grid = sample();
        assert_eq!(grid.rotate_ccw().to_string(), "cf\nbe\nad");
        assert_eq!(grid.rotate_cw().rotate_ccw(), grid);
        assert_eq!(grid.rotate(1, Rotation::CounterClockwise), grid.rotate(3, Rotation::Clockwise));
    }

    #[test]
    fn four_turns_are_identity_either_way() {
        let grid = sample();
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let mut g = grid.clone();
            for _ in 0..4 {
                g = g.rotate(1, rotation);
            }
            assert_eq!(g.to_string(), grid.to_string());
        }
        assert_eq!(grid.rotate(4, Rotation::Clockwise), grid);
        assert_eq!(grid.rotate(6, Rotation::Clockwise), grid.rotate_half());
    }

    #[test]
    fn half_turn_and_flips() {
        let grid = sample();
        assert_eq!(grid.rotate_half().to_string(), "fed\ncba");
        assert_eq!(grid.flip_horizontal().to_string(), "cba\nfed");
        assert_eq!(grid.flip_vertical().to_string(), "def\nabc");
        assert_eq!(grid.flip_horizontal().flip_vertical(), grid.rotate_half());
    }

    #[test]
    fn transpose_swaps_axes_without_reflection() {
        let grid = sample();
        let t = grid.transpose();
        assert_eq!(t.to_string(), "ad\nbe\ncf");
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn transforms_leave_source_untouched() {
        let grid = sample();
        let before = grid.to_string();
        let _ = grid.rotate_cw();
        let _ = grid.transpose();
        let _ = grid.flip_vertical();
        assert_eq!(grid.to_string(), before);
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn serial_transforms_accept_non_sync_values() {
        use std::rc::Rc;

        let grid = Grid::from_fn(2, 3, |r, c| Rc::new(r * 3 + c));
        let rotated = grid.rotate_cw();
        let values: Vec<usize> = rotated.values().iter().map(|v| **v).collect();
        assert_eq!(values, vec![3, 0, 4, 1, 5, 2]);
        assert!(Rc::ptr_eq(&rotated.values()[1], &grid.values()[0]));
    }

    #[test]
    fn empty_grid_transforms_to_empty() {
        let grid = Grid::<char>::parse("").unwrap();
        assert!(grid.rotate_cw().is_empty());
        assert!(grid.transpose().is_empty());
    }
}
