//! TextGrid - `Grid<char>` exposed to JS
//!
//! Positions cross the boundary as flat `[row, col, row, col, ...]`
//! arrays (`Int32Array` on the JS side). Construction errors surface as
//! string `JsValue`s.

use wasm_bindgen::prelude::*;

use crate::error::GridError;
use crate::spatial::{Adjacency, Cell, Grid, GridPos, Heading, Rotation};

fn to_js(err: GridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `(rows, cols)` as `usize`, rejecting shapes whose cell count or
/// coordinates would overflow on the host.
fn dimensions(row_count: u32, col_count: u32) -> Result<(usize, usize), GridError> {
    let oversized = || GridError::Oversized { rows: row_count.into(), cols: col_count.into() };
    let rows = usize::try_from(row_count).map_err(|_| oversized())?;
    let cols = usize::try_from(col_count).map_err(|_| oversized())?;
    let fits = |n: usize| n <= i32::MAX as usize;
    match rows.checked_mul(cols) {
        Some(_) if fits(rows) && fits(cols) => Ok((rows, cols)),
        _ => Err(oversized()),
    }
}

fn flatten<'g>(cells: impl IntoIterator<Item = Cell<'g, char>>) -> Vec<i32> {
    cells
        .into_iter()
        .flat_map(|c| [c.row(), c.col()])
        .collect()
}

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct TextGrid {
    grid: Grid<char>,
}

#[wasm_bindgen]
impl TextGrid {
    /// Parse newline-separated rows of equal width
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Result<TextGrid, JsValue> {
        Grid::parse(text).map(Self::from).map_err(to_js)
    }

    pub fn filled(row_count: u32, col_count: u32, fill: char) -> Result<TextGrid, JsValue> {
        let (rows, cols) = dimensions(row_count, col_count).map_err(to_js)?;
        Ok(Grid::filled(rows, cols, fill).into())
    }

    #[wasm_bindgen(getter = rowCount)]
    pub fn row_count(&self) -> u32 { self.grid.row_count() as u32 }

    #[wasm_bindgen(getter = colCount)]
    pub fn col_count(&self) -> u32 { self.grid.col_count() as u32 }

    /// `undefined` off the grid
    pub fn value(&self, row: i32, col: i32) -> Option<char> {
        self.grid.value(GridPos::new(row, col)).copied()
    }

    /// `false` (and no change) off the grid
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, row: i32, col: i32, value: char) -> bool {
        self.grid.set(GridPos::new(row, col), value).is_some()
    }

    /// First occurrence in row-major order; empty when absent
    pub fn find(&self, value: char) -> Vec<i32> {
        flatten(self.grid.find(&value))
    }

    #[wasm_bindgen(js_name = findAll)]
    pub fn find_all(&self, value: char) -> Vec<i32> {
        flatten(self.grid.find_all(&value))
    }

    /// Same-value flood fill from (row, col)
    pub fn cluster(&self, row: i32, col: i32, diagonal: bool, horizontal: bool, vertical: bool) -> Vec<i32> {
        let adjacency = Adjacency::new(diagonal, horizontal, vertical);
        let Some(seed) = self.grid.cell(GridPos::new(row, col)) else {
            return Vec::new();
        };
        let value = *seed.value();
        flatten(seed.find_cluster(adjacency, |c| *c.value() == value))
    }

    /// Step from (row, col) toward `heading` (N/E/S/W, U/R/D/L or ^>v<)
    /// until the next cell holds `stop`. Returns the last cell reached,
    /// or an empty array when the walk leaves the grid first.
    pub fn walk(&self, row: i32, col: i32, heading: char, stop: char) -> Result<Vec<i32>, JsValue> {
        let heading = Heading::try_from(heading).map_err(to_js)?;
        let end = self
            .grid
            .cell(GridPos::new(row, col))
            .and_then(|start| start.walk_while(&[heading.delta()], |c| *c.value() != stop));
        Ok(flatten(end))
    }

    /// `turns` quarter turns, taken modulo 4
    pub fn rotate(&self, turns: u32, clockwise: bool) -> TextGrid {
        let rotation = if clockwise { Rotation::Clockwise } else { Rotation::CounterClockwise };
        self.grid.rotate(turns, rotation).into()
    }

    pub fn transpose(&self) -> TextGrid {
        self.grid.transpose().into()
    }

    /// Independent copy; edits to either side stay on that side
    pub fn copy(&self) -> TextGrid {
        self.clone()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_text(&self) -> String {
        self.grid.to_string()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.grid.to_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(json: &str) -> Result<TextGrid, JsValue> {
        Grid::from_json(json).map(Self::from).map_err(to_js)
    }
}

impl TextGrid {
    pub fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<char> {
        self.grid
    }
}

impl From<Grid<char>> for TextGrid {
    fn from(grid: Grid<char>) -> Self {
        Self { grid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> TextGrid {
        TextGrid::new("..#.\n....\n#..#").unwrap()
    }

    #[test]
    fn dimensions_and_lookup() {
        let grid = maze();
        assert_eq!((grid.row_count(), grid.col_count()), (3, 4));
        assert_eq!(grid.value(0, 2), Some('#'));
        assert_eq!(grid.value(3, 0), None);
        assert_eq!(grid.value(-1, 0), None);
    }

    #[test]
    fn set_value_is_bounds_checked() {
        let mut grid = maze();
        assert!(grid.set_value(1, 1, 'X'));
        assert!(!grid.set_value(9, 9, 'X'));
        assert_eq!(grid.to_text(), "..#.\n.X..\n#..#");
    }

    #[test]
    fn positions_are_flat_pairs() {
        let grid = maze();
        assert_eq!(grid.find('#'), vec![0, 2]);
        assert_eq!(grid.find('@'), Vec::<i32>::new());
        assert_eq!(grid.find_all('#'), vec![0, 2, 2, 0, 2, 3]);
    }

    #[test]
    fn cluster_uses_seed_value() {
        let grid = maze();
        let open = grid.cluster(0, 0, false, true, true);
        assert_eq!(open.len() / 2, 9);
        assert_eq!(&open[..2], &[0, 0]);
        assert_eq!(grid.cluster(0, 2, false, true, true), vec![0, 2]);
        assert!(grid.cluster(5, 5, true, true, true).is_empty());
    }

    #[test]
    fn walk_stops_before_obstacle() {
        let grid = maze();
        assert_eq!(grid.walk(0, 0, '>', '#').unwrap(), vec![0, 1]);
        assert_eq!(grid.walk(1, 3, 'v', '#').unwrap(), vec![1, 3]);
        assert!(grid.walk(1, 0, 'E', '#').unwrap().is_empty());
    }

    #[test]
    fn transforms_return_new_grids() {
        let grid = TextGrid::new("ab\ncd").unwrap();
        assert_eq!(grid.rotate(1, true).to_text(), "ca\ndb");
        assert_eq!(grid.rotate(1, false).to_text(), "bd\nac");
        assert_eq!(grid.transpose().to_text(), "ac\nbd");
        assert_eq!(grid.to_text(), "ab\ncd");
    }

    #[test]
    fn copy_is_independent() {
        let source = maze();
        let mut copy = source.copy();
        assert!(copy.set_value(0, 0, '@'));
        assert_eq!(copy.value(0, 0), Some('@'));
        assert_eq!(source.value(0, 0), Some('.'));
        assert_eq!(source.to_text(), "..#.\n....\n#..#");
    }

    #[test]
    fn filled_checks_dimensions() {
        let grid = TextGrid::filled(2, 3, '.').unwrap();
        assert_eq!(grid.to_text(), "...\n...");
        assert_eq!(dimensions(0, 7).unwrap(), (0, 7));
        assert!(matches!(dimensions(u32::MAX, 1), Err(GridError::Oversized { .. })));
        assert!(matches!(dimensions(1, 1 << 31), Err(GridError::Oversized { .. })));
        #[cfg(target_pointer_width = "32")]
        assert!(dimensions(1 << 20, 1 << 20).is_err());
        #[cfg(target_pointer_width = "64")]
        assert!(dimensions(1 << 20, 1 << 20).is_ok());
    }

    #[test]
    fn json_round_trip() {
        let grid = maze();
        let json = grid.to_json().unwrap();
        assert_eq!(json, r##"[[".",".","#","."],[".",".",".","."],["#",".",".","#"]]"##);
        let back = TextGrid::from_json(&json).unwrap();
        assert_eq!(back.grid(), grid.grid());
    }
}
