//! Direction vectors and headings
//!
//! `dir` holds the eight unit deltas as plain `GridPos` constants, for
//! callers that do arithmetic on directions. `Heading` is the closed
//! enumeration used wherever a direction is named by a glyph ("N", "^",
//! "R", ...) so the glyph table lives in exactly one match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pos::GridPos;
use crate::error::GridError;

/// Unit deltas, plus the U/D/L/R aliases some inputs use.
pub mod dir {
    use super::GridPos;

    pub const N: GridPos = GridPos::new(-1, 0);
    pub const S: GridPos = GridPos::new(1, 0);
    pub const E: GridPos = GridPos::new(0, 1);
    pub const W: GridPos = GridPos::new(0, -1);
    pub const NE: GridPos = GridPos::new(-1, 1);
    pub const NW: GridPos = GridPos::new(-1, -1);
    pub const SE: GridPos = GridPos::new(1, 1);
    pub const SW: GridPos = GridPos::new(1, -1);

    pub const U: GridPos = N;
    pub const D: GridPos = S;
    pub const L: GridPos = W;
    pub const R: GridPos = E;

    /// Canonical order: clockwise starting at north.
    pub const ALL: [GridPos; 8] = [N, NE, E, SE, S, SW, W, NW];
    pub const ORTHOGONAL: [GridPos; 4] = [N, E, S, W];
    pub const DIAGONAL: [GridPos; 4] = [NE, SE, SW, NW];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    /// Same order as `dir::ALL`; neighbor enumeration relies on it.
    pub const ALL: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    pub const ORTHOGONAL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[inline]
    pub const fn delta(self) -> GridPos {
        match self {
            Heading::North => dir::N,
            Heading::NorthEast => dir::NE,
            Heading::East => dir::E,
            Heading::SouthEast => dir::SE,
            Heading::South => dir::S,
            Heading::SouthWest => dir::SW,
            Heading::West => dir::W,
            Heading::NorthWest => dir::NW,
        }
    }

    /// Position in `Heading::ALL`.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Heading::NorthEast | Heading::SouthEast | Heading::SouthWest | Heading::NorthWest
        )
    }

    /// A change of row without a change of column.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Heading::North | Heading::South)
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Heading::East | Heading::West)
    }

    /// 90 degrees clockwise.
    #[inline]
    pub fn turn_right(self) -> Heading {
        Self::ALL[(self.ordinal() + 2) % 8]
    }

    /// 90 degrees counter-clockwise.
    #[inline]
    pub fn turn_left(self) -> Heading {
        Self::ALL[(self.ordinal() + 6) % 8]
    }

    #[inline]
    pub fn opposite(self) -> Heading {
        Self::ALL[(self.ordinal() + 4) % 8]
    }

    /// Inverse of `delta` for the eight unit steps.
    pub fn from_delta(delta: GridPos) -> Option<Heading> {
        Self::ALL.into_iter().find(|h| h.delta() == delta)
    }

    /// Compass letter of the heading ("N", "NE", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::NorthEast => "NE",
            Heading::East => "E",
            Heading::SouthEast => "SE",
            Heading::South => "S",
            Heading::SouthWest => "SW",
            Heading::West => "W",
            Heading::NorthWest => "NW",
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = GridError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        match glyph {
            'N' | 'U' | '^' => Ok(Heading::North),
            'S' | 'D' | 'v' => Ok(Heading::South),
            'E' | 'R' | '>' => Ok(Heading::East),
            'W' | 'L' | '<' => Ok(Heading::West),
            other => Err(GridError::UnknownHeading(other)),
        }
    }
}

impl FromStr for Heading {
    type Err = GridError;

    /// Accepts the single glyphs of `TryFrom<char>` and the two-letter
    /// diagonal labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NE" => return Ok(Heading::NorthEast),
            "SE" => return Ok(Heading::SouthEast),
            "SW" => return Ok(Heading::SouthWest),
            "NW" => return Ok(Heading::NorthWest),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => Heading::try_from(glyph),
            (Some(glyph), Some(_)) => Err(GridError::UnknownHeading(glyph)),
            (None, _) => Err(GridError::UnknownHeading('\0')),
        }
    }
}

impl From<Heading> for GridPos {
    #[inline]
    fn from(heading: Heading) -> Self {
        heading.delta()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rotational sense for grid rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    #[inline]
    pub fn reversed(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

impl FromStr for Rotation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CW" | "cw" => Ok(Rotation::Clockwise),
            "CCW" | "ccw" => Ok(Rotation::CounterClockwise),
            other => Err(GridError::UnknownRotation(other.to_string())),
        }
    }
}
