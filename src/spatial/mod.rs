//! Spatial layer: positions, directions, the grid and its cell handles
//!
//! - `pos`        signed (row, col) coordinates and deltas
//! - `direction`  named deltas, `Heading`, `Rotation`
//! - `adjacency`  which neighbor directions count
//! - `grid`       storage, text form, transforms
//! - `cell`       read-only and mutable cell handles
//! - `walk`       repeated stepping
//! - `cluster`    flood fill and region partitioning

pub mod adjacency;
pub mod cell;
pub mod cluster;
pub mod direction;
pub mod grid;
pub mod pos;
pub mod walk;

pub(crate) mod visited;

pub use adjacency::Adjacency;
pub use cell::{Cell, CellMut};
pub use cluster::{cluster_key, perimeter};
pub use direction::{dir, Heading, Rotation};
pub use grid::{Cells, Grid, TransformValue};
pub use pos::GridPos;
