//! Public API for JS hosts

pub mod wasm;
