//! Movement - repeated directional stepping
//!
//! A walk applies a list of deltas one after another, cycling back to the
//! first once the list is exhausted. It stops when
//!   - a step leaves the grid: the walk returns `None`
//!   - the per-step callback rejects a candidate: the walk returns the
//!     last accepted cell (the start cell if the first candidate is
//!     rejected)
//!
//! Callbacks on `Grid::repeat_movements` get a `CellMut` and may write to
//! it, e.g. to mark visited cells while the walk is still running.
//! A callback that never says stop on a delta cycle that stays inside the
//! grid (say `[N, S]`) walks forever.

use super::cell::{Cell, CellMut};
use super::grid::{in_bounds, Grid};
use super::pos::GridPos;

/// Shared stepping loop. `accept` sees every in-bounds candidate once.
fn walk_positions(
    start: GridPos,
    deltas: &[GridPos],
    contains: impl Fn(GridPos) -> bool,
    mut accept: impl FnMut(GridPos) -> bool,
) -> Option<GridPos> {
    if !contains(start) {
        return None;
    }
    let mut current = start;
    for &delta in deltas.iter().cycle() {
        let candidate = current + delta;
        if !contains(candidate) {
            return None;
        }
        if !accept(candidate) {
            return Some(current);
        }
        current = candidate;
    }
    // only reachable with an empty delta list
    Some(current)
}

impl<'g, T> Cell<'g, T> {
    /// Apply each delta once, in order. `None` as soon as a step leaves the
    /// grid; an empty list returns this cell.
    pub fn repeat_movements(&self, deltas: &[GridPos]) -> Option<Cell<'g, T>> {
        let grid = self.grid();
        let mut pos = self.pos();
        for &delta in deltas {
            pos += delta;
            if !grid.contains(pos) {
                return None;
            }
        }
        grid.cell(pos)
    }

    /// Cycle through `deltas` while `keep_going` accepts each candidate.
    /// Read-only counterpart of `Grid::repeat_movements`.
    pub fn walk_while(
        &self,
        deltas: &[GridPos],
        mut keep_going: impl FnMut(Cell<'g, T>) -> bool,
    ) -> Option<Cell<'g, T>> {
        let grid = self.grid();
        let end = walk_positions(
            self.pos(),
            deltas,
            |pos| grid.contains(pos),
            |pos| keep_going(Cell::new(grid, pos)),
        )?;
        grid.cell(end)
    }

    /// Cells along `delta` starting one step away, up to the grid edge.
    pub fn ray(&self, delta: GridPos) -> impl Iterator<Item = Cell<'g, T>> {
        std::iter::successors(self.step(delta), move |cell| cell.step(delta))
    }
}

impl<T> Grid<T> {
    /// Walk from `start`, cycling through `deltas`. `count` is invoked once
    /// per successful step with the candidate cell and may mutate it;
    /// returning `false` ends the walk on the previous cell.
    ///
    /// Returns `None` when a step leaves the grid or `start` is outside it.
    pub fn repeat_movements(
        &mut self,
        start: GridPos,
        deltas: &[GridPos],
        mut count: impl FnMut(CellMut<'_, T>) -> bool,
    ) -> Option<Cell<'_, T>> {
        let (rows, cols) = (self.row_count(), self.col_count());
        let end = walk_positions(
            start,
            deltas,
            |pos| in_bounds(rows, cols, pos),
            |pos| count(CellMut::new(&mut *self, pos)),
        )?;
        self.cell(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::direction::dir;

    fn open_field() -> Grid<char> {
        Grid::parse(".....\n.....\n.....").unwrap()
    }

    #[test]
    fn single_delta_moves_once() {
        let grid = open_field();
        let start = grid.cell(GridPos::new(1, 1)).unwrap();
        assert_eq!(start.repeat_movements(&[dir::E]).map(|c| c.pos()), Some(GridPos::new(1, 2)));
        assert_eq!(start.repeat_movements(&[]).map(|c| c.pos()), Some(GridPos::new(1, 1)));
        assert_eq!(
            start.repeat_movements(&[dir::E, dir::E, dir::S]).map(|c| c.pos()),
            Some(GridPos::new(2, 3))
        );
    }

    #[test]
    fn arbitrary_deltas_are_allowed() {
        let grid = open_field();
        let start = grid.cell(GridPos::new(0, 0)).unwrap();
        let jump = GridPos::new(2, 3);
        assert_eq!(start.repeat_movements(&[jump]).map(|c| c.pos()), Some(jump));
        assert!(start.repeat_movements(&[jump, jump]).is_none());
    }

    #[test]
    fn leaving_grid_midway_is_none() {
        let grid = open_field();
        let start = grid.cell(GridPos::new(0, 0)).unwrap();
        // second step is off-grid even though the third would come back
        assert!(start.repeat_movements(&[dir::E, dir::N, dir::S]).is_none());
    }

    #[test]
    fn always_true_callback_walks_off_edge_and_sees_each_cell_once() {
        let mut grid = open_field();
        let mut seen = Vec::new();
        let end = grid.repeat_movements(GridPos::new(1, 0), &[dir::E], |cell| {
            seen.push(cell.pos());
            true
        });
        assert!(end.is_none());
        assert_eq!(
            seen,
            vec![
                GridPos::new(1, 1),
                GridPos::new(1, 2),
                GridPos::new(1, 3),
                GridPos::new(1, 4)
            ]
        );
    }

    #[test]
    fn rejecting_callback_returns_last_accepted_cell() {
        let mut grid = Grid::parse("..#..").unwrap();
        let end = grid
            .repeat_movements(GridPos::new(0, 0), &[dir::E], |cell| *cell.value() != '#')
            .map(|c| c.pos());
        assert_eq!(end, Some(GridPos::new(0, 1)));

        // first candidate rejected: the start cell comes back
        let end = grid
            .repeat_movements(GridPos::new(0, 1), &[dir::E], |cell| *cell.value() != '#')
            .map(|c| c.pos());
        assert_eq!(end, Some(GridPos::new(0, 1)));
    }

    #[test]
    fn callback_may_mark_cells_during_walk() {
        let mut grid = Grid::parse("....#").unwrap();
        let end = grid
            .repeat_movements(GridPos::new(0, 0), &[dir::E], |mut cell| {
                if *cell.value() == '#' {
                    return false;
                }
                cell.set_value('X');
                true
            })
            .map(|c| c.pos());
        assert_eq!(end, Some(GridPos::new(0, 3)));
        assert_eq!(grid.to_string(), ".XXX#");
    }

    #[test]
    fn deltas_cycle_until_stopped() {
        let mut grid = Grid::filled(4, 4, '.');
        let mut steps = 0;
        let end = grid
            .repeat_movements(GridPos::new(0, 0), &[dir::E, dir::S], |_| {
                steps += 1;
                steps < 5
            })
            .map(|c| c.pos());
        // E S E S accepted, fifth step (E) rejected
        assert_eq!(end, Some(GridPos::new(2, 2)));
        assert_eq!(steps, 5);
    }

    #[test]
    fn degenerate_walks() {
        let mut grid = open_field();
        let mut called = false;
        let end = grid
            .repeat_movements(GridPos::new(1, 1), &[], |_| {
                called = true;
                true
            })
            .map(|c| c.pos());
        assert_eq!(end, Some(GridPos::new(1, 1)));
        assert!(!called);

        assert!(grid.repeat_movements(GridPos::new(9, 9), &[dir::E], |_| true).is_none());
    }

    #[test]
    fn walk_while_is_read_only_variant() {
        let grid = Grid::parse("abc#e").unwrap();
        let start = grid.cell(GridPos::new(0, 0)).unwrap();
        let end = start.walk_while(&[dir::E], |c| *c.value() != '#');
        assert_eq!(end.map(|c| *c.value()), Some('c'));
        assert!(start.walk_while(&[dir::E], |_| true).is_none());
    }

    #[test]
    fn ray_runs_to_the_edge() {
        let grid = Grid::parse("abc\ndef\nghi").unwrap();
        let a = grid.cell(GridPos::new(0, 0)).unwrap();
        let diag: String = a.ray(dir::SE).map(|c| *c.value()).collect();
        assert_eq!(diag, "ei");
        assert_eq!(a.ray(dir::N).count(), 0);
    }
}
