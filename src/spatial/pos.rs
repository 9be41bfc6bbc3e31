//! GridPos - (row, col) coordinates and deltas
//!
//! Row grows downward, column grows rightward, (0, 0) is the top-left cell.
//! The same type doubles as a movement delta: a direction is just a GridPos
//! added to a position.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos::new(0, 0);

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Quarter turn of a delta, clockwise on screen: N -> E -> S -> W.
    #[inline]
    pub const fn rotate_cw(self) -> Self {
        Self::new(self.col, -self.row)
    }

    /// Quarter turn of a delta, counter-clockwise on screen: N -> W -> S -> E.
    #[inline]
    pub const fn rotate_ccw(self) -> Self {
        Self::new(-self.col, self.row)
    }

    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True for the eight 8-connected unit steps.
    #[inline]
    pub fn is_unit_step(self) -> bool {
        self != Self::ORIGIN && self.row.abs() <= 1 && self.col.abs() <= 1
    }
}

impl From<(i32, i32)> for GridPos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<GridPos> for (i32, i32) {
    #[inline]
    fn from(pos: GridPos) -> Self {
        (pos.row, pos.col)
    }
}

impl Add for GridPos {
    type Output = GridPos;

    #[inline]
    fn add(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for GridPos {
    #[inline]
    fn add_assign(&mut self, rhs: GridPos) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for GridPos {
    type Output = GridPos;

    #[inline]
    fn sub(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl SubAssign for GridPos {
    #[inline]
    fn sub_assign(&mut self, rhs: GridPos) {
        self.row -= rhs.row;
        self.col -= rhs.col;
    }
}

impl Neg for GridPos {
    type Output = GridPos;

    #[inline]
    fn neg(self) -> GridPos {
        GridPos::new(-self.row, -self.col)
    }
}

impl Mul<i32> for GridPos {
    type Output = GridPos;

    #[inline]
    fn mul(self, k: i32) -> GridPos {
        GridPos::new(self.row * k, self.col * k)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}
