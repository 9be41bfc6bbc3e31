use super::*;
use crate::spatial::pos::GridPos;

impl<T> Grid<T> {
    // === Dimensions ===
    #[inline]
    pub fn row_count(&self) -> usize { self.row_count }

    #[inline]
    pub fn col_count(&self) -> usize { self.col_count }

    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    // === Bounds checking ===
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        in_bounds(self.row_count, self.col_count, pos)
    }

    // === Index conversion ===
    /// Row-major index of `pos`, or `None` when it lies outside the grid.
    #[inline]
    pub fn index(&self, pos: GridPos) -> Option<usize> {
        if self.contains(pos) {
            Some(self.index_unchecked(pos))
        } else {
            None
        }
    }

    #[inline]
    pub fn position(&self, idx: usize) -> GridPos {
        debug_assert!(idx < self.cells.len(), "position: index {} out of range", idx);
        GridPos::new((idx / self.col_count) as i32, (idx % self.col_count) as i32)
    }

    /// Index without bounds check; only for positions already known inside.
    #[inline(always)]
    pub(crate) fn index_unchecked(&self, pos: GridPos) -> usize {
        debug_assert!(
            self.contains(pos),
            "index_unchecked: out of bounds {} for {}x{} grid",
            pos,
            self.row_count,
            self.col_count
        );
        pos.row as usize * self.col_count + pos.col as usize
    }
}

/// `[0, row_count) x [0, col_count)` test shared with walks that hold the
/// grid mutably and can't call `contains`.
#[inline]
pub(crate) fn in_bounds(row_count: usize, col_count: usize, pos: GridPos) -> bool {
    pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < row_count && (pos.col as usize) < col_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_position_round_trip() {
        let grid = Grid::filled(3, 4, 0u8);
        for idx in 0..grid.len() {
            let pos = grid.position(idx);
            assert_eq!(grid.index(pos), Some(idx));
        }
        assert_eq!(grid.index(GridPos::new(2, 3)), Some(11));
    }

    #[test]
    fn out_of_bounds_positions_have_no_index() {
        let grid = Grid::filled(3, 4, 0u8);
        for pos in [
            GridPos::new(-1, 0),
            GridPos::new(0, -1),
            GridPos::new(3, 0),
            GridPos::new(0, 4),
        ] {
            assert!(!grid.contains(pos));
            assert_eq!(grid.index(pos), None);
        }
    }
}
