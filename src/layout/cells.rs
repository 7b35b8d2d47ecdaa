//! Building cell rectangles for grid slots.
//!
//! The `_into` variants write into caller-owned storage so scanning loops can
//! run without allocating. The output is exclusively borrowed for the call.

use super::mapping::{cell_height, cell_position, cell_width, positions, x_for_column, y_for_row};
use crate::types::{Cell, Grid, Position};

/// A slot named either by linear index or by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKey {
    Index(i64),
    Position(Position),
}

impl From<i64> for CellKey {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<Position> for CellKey {
    fn from(position: Position) -> Self {
        Self::Position(position)
    }
}

/// Cell at `position`; the position need not lie inside the grid.
pub fn cell_for_position(grid: &Grid, position: impl Into<Position>) -> Cell {
    let mut cell = Cell::default();
    cell_for_position_into(grid, position, &mut cell);
    cell
}

pub fn cell_for_position_into(grid: &Grid, position: impl Into<Position>, out: &mut Cell) {
    let Position { column, row } = position.into();
    out.x = x_for_column(grid, column);
    out.y = y_for_row(grid, row);
    out.width = cell_width(grid);
    out.height = cell_height(grid);
    out.column = column;
    out.row = row;
}

pub fn cell_for_index(grid: &Grid, index: i64) -> Cell {
    cell_for_position(grid, cell_position(grid, index))
}

pub fn cell_for_index_into(grid: &Grid, index: i64, out: &mut Cell) {
    cell_for_position_into(grid, cell_position(grid, index), out);
}

/// Cell for either an index or a position.
pub fn cell(grid: &Grid, key: impl Into<CellKey>) -> Cell {
    let mut out = Cell::default();
    cell_into(grid, key, &mut out);
    out
}

pub fn cell_into(grid: &Grid, key: impl Into<CellKey>, out: &mut Cell) {
    match key.into() {
        CellKey::Index(index) => cell_for_index_into(grid, index, out),
        CellKey::Position(position) => cell_for_position_into(grid, position, out),
    }
}

/// Every cell of the grid, in the order set by `row_major`.
///
/// `cells(grid)[i]` is the cell at linear index `i`.
pub fn cells(grid: &Grid) -> Vec<Cell> {
    let mut out = Vec::with_capacity(grid.cell_count());
    cells_into(grid, &mut out);
    out
}

/// Like [`cells`], reusing `out`.
///
/// Entries beyond the grid's cell count are dropped first so a smaller grid
/// does not leave cells from a previous, larger one behind.
pub fn cells_into(grid: &Grid, out: &mut Vec<Cell>) {
    let total = grid.cell_count();
    tracing::trace!(
        "Laying out {} cells ({} reused)",
        total,
        out.len().min(total)
    );

    out.truncate(total);
    out.reserve(total - out.len());

    for (i, position) in positions(grid).enumerate() {
        match out.get_mut(i) {
            Some(slot) => cell_for_position_into(grid, position, slot),
            None => out.push(cell_for_position(grid, position)),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::layout::cell_index;

    #[test]
    fn test_cell_for_position() {
        let grid = Grid::new(4, 5).unwrap().with_size(8.0, 10.0);
        let cell = cell_for_position(&grid, Position::new(3, 2));
        assert_eq!(cell.x, 6.0);
        assert_eq!(cell.y, 4.0);
        assert_eq!(cell.width, 2.0);
        assert_eq!(cell.height, 2.0);
        assert_eq!(cell.position(), Position::new(3, 2));
    }

    #[test]
    fn test_cell_for_position_into_reuses_output() {
        let grid = Grid::new(4, 5).unwrap().with_size(8.0, 10.0);
        let mut out = Cell::default();
        cell_for_position_into(&grid, (1_i64, 1_i64), &mut out);
        assert_eq!((out.x, out.y), (2.0, 2.0));

        cell_for_position_into(&grid, (0_i64, 4_i64), &mut out);
        assert_eq!((out.x, out.y), (0.0, 8.0));
        assert_eq!((out.column, out.row), (0, 4));
    }

    #[test]
    fn test_cell_by_index_or_position() {
        let grid = Grid::new(6, 4).unwrap();

        let mut out = Cell::default();
        cell_into(&grid, 4_i64, &mut out);
        assert!(out.x >= 0.0 && out.y >= 0.0 && out.width > 0.0 && out.height > 0.0);
        assert_eq!(out.position(), Position::new(4, 0));

        cell_into(&grid, Position::new(1, 2), &mut out);
        assert_eq!(out, cell_for_position(&grid, Position::new(1, 2)));

        assert_eq!(cell(&grid, 13_i64), cell(&grid, Position::new(1, 2)));
    }

    #[test]
    fn test_cell_for_index_column_major() {
        let grid = Grid::new(6, 4).unwrap().with_row_major(false);
        assert_eq!(cell_for_index(&grid, 5).position(), Position::new(1, 1));
    }

    #[test]
    fn test_cells_matches_index_formula() {
        let grid = Grid::new(4, 5).unwrap().with_size(4.0, 5.0);
        let all = cells(&grid);
        assert_eq!(all.len(), 20);

        let cell = all[usize::try_from(cell_index(&grid, Position::new(3, 2))).unwrap()];
        assert_eq!(cell.x, 3.0);
        assert_eq!(cell.y, 2.0);
    }

    #[test]
    fn test_cells_into_truncates_stale_entries() {
        let mut out = cells(&Grid::new(5, 5).unwrap());
        assert_eq!(out.len(), 25);

        let small = Grid::new(2, 3).unwrap().with_size(2.0, 3.0);
        cells_into(&small, &mut out);
        assert_eq!(out.len(), 6);
        assert_eq!(out[5].position(), Position::new(1, 2));
        assert_eq!((out[5].x, out[5].y), (1.0, 2.0));

        let big = Grid::new(3, 3).unwrap();
        cells_into(&big, &mut out);
        assert_eq!(out.len(), 9);
        assert_eq!(out[8].position(), Position::new(2, 2));
    }
}
