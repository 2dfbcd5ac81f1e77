//! Unopinionated standalone utilities.

mod geom;
pub use geom::{bresenham_line, VecExt, DIR_4};

mod grid;
pub use grid::Grid;

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;
