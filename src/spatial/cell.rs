//! Cell handles
//!
//! A `Cell` is a position plus a shared borrow of the grid that produced
//! it. It never stores the value: `value()` reads the grid every time, so
//! a handle can't go stale, and the borrow checker keeps it from
//! outliving the grid or overlapping a mutation.
//!
//! `CellMut` is the exclusive counterpart, handed out by `Grid::cell_mut`
//! and to movement callbacks that mark cells as they walk.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::adjacency::Adjacency;
use super::direction::{dir, Heading};
use super::grid::Grid;
use super::pos::GridPos;

pub struct Cell<'g, T> {
    grid: &'g Grid<T>,
    pos: GridPos,
}

impl<'g, T> Cell<'g, T> {
    /// Caller guarantees `pos` is inside `grid`.
    #[inline]
    pub(crate) fn new(grid: &'g Grid<T>, pos: GridPos) -> Self {
        debug_assert!(grid.contains(pos), "Cell::new: {} outside grid", pos);
        Self { grid, pos }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    #[inline]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// Row-major index in the owning grid.
    #[inline]
    pub fn index(&self) -> usize {
        self.grid.index_unchecked(self.pos)
    }

    #[inline]
    pub fn value(&self) -> &'g T {
        &self.grid.values()[self.index()]
    }

    // === Single steps ===
    /// Cell at `self + delta`, or `None` off the grid.
    #[inline]
    pub fn step(&self, delta: GridPos) -> Option<Cell<'g, T>> {
        self.grid.cell(self.pos + delta)
    }

    #[inline]
    pub fn toward(&self, heading: Heading) -> Option<Cell<'g, T>> {
        self.step(heading.delta())
    }

    pub fn north(&self) -> Option<Cell<'g, T>> { self.step(dir::N) }
    pub fn south(&self) -> Option<Cell<'g, T>> { self.step(dir::S) }
    pub fn east(&self) -> Option<Cell<'g, T>> { self.step(dir::E) }
    pub fn west(&self) -> Option<Cell<'g, T>> { self.step(dir::W) }
    pub fn north_east(&self) -> Option<Cell<'g, T>> { self.step(dir::NE) }
    pub fn north_west(&self) -> Option<Cell<'g, T>> { self.step(dir::NW) }
    pub fn south_east(&self) -> Option<Cell<'g, T>> { self.step(dir::SE) }
    pub fn south_west(&self) -> Option<Cell<'g, T>> { self.step(dir::SW) }

    // === Neighbors ===
    /// Existing neighbors allowed by `adjacency`, in the fixed order
    /// N, NE, E, SE, S, SW, W, NW.
    pub fn neighbors(&self, adjacency: Adjacency) -> Vec<Cell<'g, T>> {
        adjacency.headings().filter_map(|h| self.toward(h)).collect()
    }

    /// One slot per allowed heading, `None` where the neighbor would be
    /// off the grid.
    pub fn neighbor_slots(&self, adjacency: Adjacency) -> Vec<(Heading, Option<Cell<'g, T>>)> {
        adjacency.headings().map(|h| (h, self.toward(h))).collect()
    }

    /// On the outermost ring of the grid.
    pub fn is_border(&self) -> bool {
        self.row() == 0
            || self.col() == 0
            || self.row() as usize == self.grid.row_count() - 1
            || self.col() as usize == self.grid.col_count() - 1
    }
}

impl<T> Clone for Cell<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

/// Same grid (by identity) and same position.
impl<T> PartialEq for Cell<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid) && self.pos == other.pos
    }
}

impl<T> Eq for Cell<'_, T> {}

impl<T> Hash for Cell<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.grid, state);
        self.pos.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("pos", &self.pos)
            .field("value", self.value())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.pos, self.value())
    }
}

pub struct CellMut<'g, T> {
    grid: &'g mut Grid<T>,
    pos: GridPos,
}

impl<'g, T> CellMut<'g, T> {
    #[inline]
    pub(crate) fn new(grid: &'g mut Grid<T>, pos: GridPos) -> Self {
        debug_assert!(grid.contains(pos), "CellMut::new: {} outside grid", pos);
        Self { grid, pos }
    }

    #[inline]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn value(&self) -> &T {
        let idx = self.grid.index_unchecked(self.pos);
        &self.grid.values()[idx]
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        let idx = self.grid.index_unchecked(self.pos);
        &mut self.grid.values_mut()[idx]
    }

    /// Overwrite the value; returns the old one. Visible to every later read
    /// of this position.
    #[inline]
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(self.value_mut(), value)
    }

    /// Value at `self + delta` without moving, `None` off the grid.
    #[inline]
    pub fn peek(&self, delta: GridPos) -> Option<&T> {
        self.grid.value(self.pos + delta)
    }

    /// Read-only view of the same position.
    #[inline]
    pub fn as_cell(&self) -> Cell<'_, T> {
        Cell::new(&*self.grid, self.pos)
    }

    #[inline]
    pub fn grid(&self) -> &Grid<T> {
        &*self.grid
    }
}

impl<T: fmt::Debug> fmt::Debug for CellMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellMut")
            .field("pos", &self.pos)
            .field("value", self.value())
            .finish()
    }
}
