//! Column/row to pixel to linear index conversions.
//!
//! `row_major` is read by exactly two formulas here ([`cell_index`] and
//! [`cell_position`]) and by the enumeration order in [`positions`]; the three
//! must stay mirror images of each other.

use serde::{Deserialize, Serialize};

use crate::types::{Grid, Position, Rectangular};

/// Width of a single cell in the grid
pub fn cell_width(grid: &Grid) -> f64 {
    let padding = grid.padding_left() + grid.padding_right();
    let columns = f64::from(grid.columns());

    let mut total_padding = padding * columns;
    if !grid.outer_padding() {
        total_padding -= padding;
    }

    (grid.width() - total_padding) / columns
}

/// Height of a single cell in the grid
pub fn cell_height(grid: &Grid) -> f64 {
    let padding = grid.padding_top() + grid.padding_bottom();
    let rows = f64::from(grid.rows());

    let mut total_padding = padding * rows;
    if !grid.outer_padding() {
        total_padding -= padding;
    }

    (grid.height() - total_padding) / rows
}

/// Left edge of column `column`.
///
/// Not bounds-checked: `column == grid.columns()` gives the right edge of the
/// last column.
pub fn x_for_column(grid: &Grid, column: i64) -> f64 {
    let pl = grid.padding_left();
    let pr = grid.padding_right();
    let n = column as f64;

    let mut x = grid.x() + pl + cell_width(grid) * n + (pl + pr) * n;
    if !grid.outer_padding() {
        x -= pl;
    }
    x
}

/// Top edge of row `row`; see [`x_for_column`].
pub fn y_for_row(grid: &Grid, row: i64) -> f64 {
    let pt = grid.padding_top();
    let pb = grid.padding_bottom();
    let n = row as f64;

    let mut y = grid.y() + pt + cell_height(grid) * n + (pt + pb) * n;
    if !grid.outer_padding() {
        y -= pt;
    }
    y
}

/// Linear index of a position: `columns * row + column` when row-major,
/// `rows * column + row` otherwise.
///
/// Saturates at the `i64` limits for positions that far outside the grid.
pub fn cell_index(grid: &Grid, position: impl Into<Position>) -> i64 {
    let Position { column, row } = position.into();
    if grid.row_major() {
        i64::from(grid.columns())
            .saturating_mul(row)
            .saturating_add(column)
    } else {
        i64::from(grid.rows())
            .saturating_mul(column)
            .saturating_add(row)
    }
}

/// Inverse of [`cell_index`].
///
/// Euclidean division keeps the round trip exact for negative indices too.
pub fn cell_position(grid: &Grid, index: i64) -> Position {
    if grid.row_major() {
        let columns = i64::from(grid.columns());
        Position::new(index.rem_euclid(columns), index.div_euclid(columns))
    } else {
        let rows = i64::from(grid.rows());
        Position::new(index.div_euclid(rows), index.rem_euclid(rows))
    }
}

/// Result of looking a rectangle up by its coordinates; each axis is `None`
/// when no column/row edge matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellLookup {
    pub column: Option<i64>,
    pub row: Option<i64>,
}

impl CellLookup {
    /// The position, if both axes matched
    pub fn position(&self) -> Option<Position> {
        Some(Position::new(self.column?, self.row?))
    }
}

/// Find the column and row whose top-left corner sits exactly at `cell`'s.
///
/// Matching is exact: a rectangle that went through any rounding
/// transformation will miss.
#[allow(clippy::float_cmp)]
pub fn cell_position_of(grid: &Grid, cell: &impl Rectangular) -> CellLookup {
    let rect = cell.rect();
    let column = (0..i64::from(grid.columns())).find(|&c| x_for_column(grid, c) == rect.x);
    let row = (0..i64::from(grid.rows())).find(|&r| y_for_row(grid, r) == rect.y);
    CellLookup { column, row }
}

/// Every position of the grid in enumeration order: rows outer and columns
/// inner when row-major, columns outer and rows inner otherwise.
///
/// The n-th item is always `cell_position(grid, n)`.
pub fn positions(grid: &Grid) -> impl Iterator<Item = Position> {
    let columns = i64::from(grid.columns());
    let rows = i64::from(grid.rows());
    let row_major = grid.row_major();

    (0..columns * rows).map(move |i| {
        if row_major {
            Position::new(i % columns, i / columns)
        } else {
            Position::new(i / rows, i % rows)
        }
    })
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
    use crate::types::Rect;

    #[test]
    fn test_cell_index_saturates_far_outside() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(cell_index(&grid, (0_i64, i64::MAX / 2)), i64::MAX);
        assert_eq!(cell_index(&grid, (-1_i64, i64::MIN / 2)), i64::MIN);

        let column_major = grid.with_row_major(false);
        assert_eq!(cell_index(&column_major, (i64::MAX, 2_i64)), i64::MAX);
    }

    #[test]
    fn test_cell_width_minimal() {
        assert_eq!(cell_width(&Grid::new(4, 3).unwrap()), 0.25);
        assert_eq!(cell_width(&Grid::new(4, 3).unwrap().with_width(4.0)), 1.0);
    }

    #[test]
    fn test_padding_fills_width() {
        let grid = Grid::new(4, 2)
            .unwrap()
            .with_size(100.0, 50.0)
            .with_padding(2.0, 3.0, 1.0, 4.0);

        // 4 * (2 + 3) = 20 of padding
        assert_eq!(cell_width(&grid), 20.0);
        assert_eq!(cell_width(&grid) * 4.0 + 20.0, 100.0);
        assert_eq!(cell_height(&grid), 20.0);

        let inner = grid.with_outer_padding(false);
        // 3 gutters of 5
        assert_eq!(cell_width(&inner), 21.25);
        assert_eq!(cell_height(&inner), 22.5);
    }

    #[test]
    fn test_x_for_column_minimal() {
        assert_eq!(x_for_column(&Grid::new(4, 1).unwrap(), 2), 0.5);
        assert_eq!(x_for_column(&Grid::new(4, 1).unwrap().with_width(2.0), 2), 1.0);
    }

    #[test]
    fn test_x_for_column_with_padding() {
        let grid = Grid::new(4, 1)
            .unwrap()
            .with_origin(10.0, 0.0)
            .with_size(100.0, 1.0)
            .with_padding(2.0, 3.0, 0.0, 0.0);

        assert_eq!(x_for_column(&grid, 0), 12.0);
        assert_eq!(x_for_column(&grid, 1), 37.0);
        // one past the end: right edge of the last cell plus its gutter
        assert_eq!(x_for_column(&grid, 4), 112.0);

        let inner = grid.with_outer_padding(false);
        assert_eq!(x_for_column(&inner, 0), 10.0);
        assert_eq!(x_for_column(&inner, 1), 10.0 + 21.25 + 5.0);
    }

    #[test]
    fn test_y_for_row() {
        let grid = Grid::new(1, 5).unwrap().with_origin(0.0, 2.0).with_height(10.0);
        assert_eq!(y_for_row(&grid, 0), 2.0);
        assert_eq!(y_for_row(&grid, 3), 8.0);
    }

    #[test]
    fn test_cell_index_row_and_column_major() {
        let grid = Grid::new(4, 3).unwrap();
        let p = Position::new(3, 2);
        assert_eq!(cell_index(&grid, p), 4 * 2 + 3);

        let grid = grid.with_row_major(false);
        assert_eq!(cell_index(&grid, p), 3 * 3 + 2);
    }

    #[test]
    fn test_formulas_mirror_each_other() {
        // A row-major grid indexes like its transpose in column-major order
        let row_major = Grid::new(5, 3).unwrap();
        let column_major = Grid::new(3, 5).unwrap().with_row_major(false);

        for column in 0..5 {
            for row in 0..3 {
                assert_eq!(
                    cell_index(&row_major, Position::new(column, row)),
                    cell_index(&column_major, Position::new(row, column))
                );
            }
        }
        for i in 0..15 {
            let p = cell_position(&row_major, i);
            let q = cell_position(&column_major, i);
            assert_eq!((p.column, p.row), (q.row, q.column));
        }
    }

    #[test]
    fn test_cell_position() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(cell_position(&grid, 0), Position::new(0, 0));
        assert_eq!(cell_position(&grid, 6), Position::new(2, 1));

        let grid = grid.with_row_major(false);
        assert_eq!(cell_position(&grid, 0), Position::new(0, 0));
        assert_eq!(cell_position(&grid, 6), Position::new(2, 0));
    }

    #[test]
    fn test_negative_index_round_trips() {
        let grid = Grid::new(4, 3).unwrap();
        let p = cell_position(&grid, -1);
        assert_eq!(p, Position::new(3, -1));
        assert_eq!(cell_index(&grid, p), -1);
    }

    #[test]
    fn test_cell_position_of_exact_match() {
        let grid = Grid::new(4, 3).unwrap().with_size(8.0, 6.0);
        let rect = Rect::new(6.0, 2.0, 2.0, 2.0);
        let lookup = cell_position_of(&grid, &rect);
        assert_eq!(lookup.position(), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_cell_position_of_misses_per_axis() {
        let grid = Grid::new(4, 3).unwrap().with_size(8.0, 6.0);
        let lookup = cell_position_of(&grid, &Rect::new(6.5, 4.0, 2.0, 2.0));
        assert_eq!(lookup.column, None);
        assert_eq!(lookup.row, Some(2));
        assert_eq!(lookup.position(), None);
    }

    #[test]
    fn test_positions_order() {
        let grid = Grid::new(3, 2).unwrap();
        let order: Vec<_> = positions(&grid).map(|p| (p.column, p.row)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);

        let grid = grid.with_row_major(false);
        let order: Vec<_> = positions(&grid).map(|p| (p.column, p.row)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }
}
