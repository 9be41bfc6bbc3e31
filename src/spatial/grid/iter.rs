use std::iter::FusedIterator;

use super::*;
use crate::spatial::cell::Cell;

/// Every cell of a grid, row-major, each exactly once.
pub struct Cells<'g, T> {
    grid: &'g Grid<T>,
    front: usize,
    back: usize,
}

impl<'g, T> Iterator for Cells<'g, T> {
    type Item = Cell<'g, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.grid.position(self.front);
        self.front += 1;
        Some(Cell::new(self.grid, pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Cells<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Cell::new(self.grid, self.grid.position(self.back)))
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}

impl<T> FusedIterator for Cells<'_, T> {}

impl<T> Grid<T> {
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { grid: self, front: 0, back: self.cells.len() }
    }
}

impl<'g, T> IntoIterator for &'g Grid<T> {
    type Item = Cell<'g, T>;
    type IntoIter = Cells<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::pos::GridPos;

    #[test]
    fn iteration_visits_each_cell_once_in_row_major_order() {
        let grid = Grid::parse("ab\ncd\nef").unwrap();
        let values: String = grid.iter().map(|c| *c.value()).collect();
        assert_eq!(values, "abcdef");
        assert_eq!(grid.iter().len(), 6);

        let positions: Vec<_> = (&grid).into_iter().map(|c| c.pos()).collect();
        assert_eq!(positions[0], GridPos::new(0, 0));
        assert_eq!(positions[1], GridPos::new(0, 1));
        assert_eq!(positions[2], GridPos::new(1, 0));
        assert_eq!(positions[5], GridPos::new(2, 1));
    }

    #[test]
    fn iteration_runs_backwards_too() {
        let grid = Grid::parse("ab\ncd").unwrap();
        let values: String = grid.iter().rev().map(|c| *c.value()).collect();
        assert_eq!(values, "dcba");

        let mut it = grid.iter();
        assert_eq!(it.next().map(|c| *c.value()), Some('a'));
        assert_eq!(it.next_back().map(|c| *c.value()), Some('d'));
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn empty_grid_yields_nothing() {
        let grid = Grid::<char>::parse("").unwrap();
        assert_eq!(grid.iter().count(), 0);
    }
}
