//! Layout engine for uniform grids.
//!
//! This module handles:
//! - Column/row to pixel to linear index mapping, with padding and major order
//! - Building one cell or enumerating every cell of a grid
//! - Closest-cell and hit-testing queries
//! - Ranges, bounds, scaling, equality and shifting cell collections
//!
//! Every function is a pure computation over its arguments; functions taking
//! an `out` parameter write only into that caller-owned value.

mod cells;
mod mapping;
mod query;
mod range;
mod shift;
mod transform;

pub use cells::{
    cell, cell_for_index, cell_for_index_into, cell_for_position, cell_for_position_into,
    cell_into, cells, cells_into, CellKey,
};
pub use mapping::{
    cell_height, cell_index, cell_position, cell_position_of, cell_width, positions, x_for_column,
    y_for_row, CellLookup,
};
pub use query::{
    cells_intersect, closest_cell, closest_cell_index, closest_cell_position, contains,
    intersects_cell, intersects_cell_index, intersects_cell_position, CellSource,
};
pub use range::{
    bounds, bounds_into, cells_merged, cells_merged_into, cells_range, is_in_range,
    num_cells_in_range,
};
pub use shift::{shift_cells, sort_by_grid_position, ShiftParams};
pub use transform::{equals, scale, scale_into, Shape};
