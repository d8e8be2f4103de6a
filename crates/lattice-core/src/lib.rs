//! **lattice-core**: foundational types for grid graph analysis.
//!
//! This crate provides geometry primitives, the immutable integer [`Grid`]
//! parsed from blocks of digits, and the [`TiledGrid`] virtual enlargement
//! used by extended shortest-path searches.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tiled;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use tiled::{STRETCH, TiledGrid, tiled_value};
