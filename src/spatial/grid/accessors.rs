use super::*;
use crate::spatial::cell::{Cell, CellMut};
use crate::spatial::pos::GridPos;

impl<T> Grid<T> {
    // === Value access ===
    #[inline]
    pub fn value(&self, pos: GridPos) -> Option<&T> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    #[inline]
    pub fn value_mut(&mut self, pos: GridPos) -> Option<&mut T> {
        self.index(pos).map(move |idx| &mut self.cells[idx])
    }

    /// Write `value` at `pos` and return what was there. Out of bounds
    /// writes nothing and returns `None`.
    #[inline]
    pub fn set(&mut self, pos: GridPos, value: T) -> Option<T> {
        self.value_mut(pos).map(|slot| std::mem::replace(slot, value))
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    // === Cell handles ===
    #[inline]
    pub fn cell(&self, pos: GridPos) -> Option<Cell<'_, T>> {
        if self.contains(pos) {
            Some(Cell::new(self, pos))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell_mut(&mut self, pos: GridPos) -> Option<CellMut<'_, T>> {
        if self.contains(pos) {
            Some(CellMut::new(self, pos))
        } else {
            None
        }
    }

    // === Search (row-major order) ===
    /// First cell holding `value`.
    pub fn find(&self, value: &T) -> Option<Cell<'_, T>>
    where
        T: PartialEq,
    {
        self.iter().find(|cell| cell.value() == value)
    }

    /// First cell accepted by `pred`.
    pub fn find_by(&self, mut pred: impl FnMut(Cell<'_, T>) -> bool) -> Option<Cell<'_, T>> {
        self.iter().find(|cell| pred(*cell))
    }

    /// Every cell holding `value`, row-major. Callers pairing cells up
    /// depend on this order being stable.
    pub fn find_all(&self, value: &T) -> Vec<Cell<'_, T>>
    where
        T: PartialEq,
    {
        self.iter().filter(|cell| cell.value() == value).collect()
    }

    pub fn find_all_by(&self, mut pred: impl FnMut(Cell<'_, T>) -> bool) -> Vec<Cell<'_, T>> {
        self.iter().filter(|cell| pred(*cell)).collect()
    }

    pub fn positions_of(&self, value: &T) -> Vec<GridPos>
    where
        T: PartialEq,
    {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(idx, _)| self.position(idx))
            .collect()
    }

    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.cells.iter().filter(|v| *v == value).count()
    }

    pub fn count_by(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(v)).count()
    }
}
