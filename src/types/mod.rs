//! Data types for grid layout.

mod geometry;
mod grid;

pub use geometry::*;
pub use grid::*;
