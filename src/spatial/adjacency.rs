//! Adjacency policy
//!
//! Which neighbors count as connected. Flood fill and neighbor enumeration
//! both read this one record instead of taking loose booleans.

use serde::{Deserialize, Serialize};

use super::direction::Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjacency {
    pub diagonal: bool,
    /// East / west steps.
    pub horizontal: bool,
    /// North / south steps.
    pub vertical: bool,
}

impl Adjacency {
    /// 4-connected.
    pub const ORTHOGONAL: Adjacency = Adjacency::new(false, true, true);
    /// 8-connected.
    pub const ALL: Adjacency = Adjacency::new(true, true, true);
    pub const HORIZONTAL: Adjacency = Adjacency::new(false, true, false);
    pub const VERTICAL: Adjacency = Adjacency::new(false, false, true);
    pub const DIAGONAL: Adjacency = Adjacency::new(true, false, false);

    pub const fn new(diagonal: bool, horizontal: bool, vertical: bool) -> Self {
        Self { diagonal, horizontal, vertical }
    }

    /// Orthogonal steps plus diagonals when `diagonal` is set.
    pub const fn with_diagonal(diagonal: bool) -> Self {
        Self::new(diagonal, true, true)
    }

    #[inline]
    pub const fn allows(&self, heading: Heading) -> bool {
        if heading.is_diagonal() {
            self.diagonal
        } else if heading.is_horizontal() {
            self.horizontal
        } else {
            self.vertical
        }
    }

    /// Allowed headings in canonical order (N, NE, E, SE, S, SW, W, NW).
    pub fn headings(self) -> impl Iterator<Item = Heading> {
        Heading::ALL.into_iter().filter(move |h| self.allows(*h))
    }

    pub fn is_empty(&self) -> bool {
        !(self.diagonal || self.horizontal || self.vertical)
    }
}

impl Default for Adjacency {
    fn default() -> Self {
        Self::ORTHOGONAL
    }
}
