//! Cellgrid Engine - 2D character grids for puzzle-style traversal
//!
//! Parse a block of text into a rectangular grid, then walk it: step
//! between neighboring cells, repeat movement patterns, flood fill
//! connected regions, rotate and transpose whole grids.
//!
//! Architecture:
//! - spatial/  - positions, directions, grid storage and cell handles
//! - error     - typed construction errors
//! - api/      - wasm-bindgen facade for JS hosts

pub mod api;
pub mod error;
pub mod spatial;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel transform path in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Cellgrid WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::TextGrid;
pub use error::{GridError, GridResult};
pub use spatial::{cluster_key, dir, perimeter, Adjacency, Cell, CellMut, Grid, GridPos, Heading, Rotation};
