//! Rectangular position ranges and bounding boxes.
//!
//! A range is given by any two opposite corners; the corners need not be
//! sorted.

use super::cells::cell_for_position;
use super::query::CellSource;
use crate::types::{Cell, Grid, Position, Rect, Rectangular};

/// Inclusive (min, max) column and row bounds of the rectangle spanned by `a` and `b`
fn span(a: Position, b: Position) -> (Position, Position) {
    (
        Position::new(a.column.min(b.column), a.row.min(b.row)),
        Position::new(a.column.max(b.column), a.row.max(b.row)),
    )
}

/// Every cell in the rectangle spanned by `start` and `stop`, in the grid's
/// enumeration order.
pub fn cells_range(grid: &Grid, start: impl Into<Position>, stop: impl Into<Position>) -> Vec<Cell> {
    let (min, max) = span(start.into(), stop.into());
    let mut out = Vec::new();

    if grid.row_major() {
        for row in min.row..=max.row {
            for column in min.column..=max.column {
                out.push(cell_for_position(grid, Position::new(column, row)));
            }
        }
    } else {
        for column in min.column..=max.column {
            for row in min.row..=max.row {
                out.push(cell_for_position(grid, Position::new(column, row)));
            }
        }
    }
    out
}

/// Is `position` inside the rectangle spanned by `a` and `b`, bounds included?
pub fn is_in_range(position: Position, a: Position, b: Position) -> bool {
    let (min, max) = span(a, b);
    (min.column..=max.column).contains(&position.column) && (min.row..=max.row).contains(&position.row)
}

/// Number of cells [`cells_range`] yields for the same corners.
///
/// Saturates at `u64::MAX` for spans too wide to count.
pub fn num_cells_in_range(a: Position, b: Position) -> u64 {
    let columns = a.column.abs_diff(b.column).saturating_add(1);
    let rows = a.row.abs_diff(b.row).saturating_add(1);
    columns.saturating_mul(rows)
}

/// Bounding rectangle of a rectangle list. An empty list yields an empty
/// rectangle at the origin.
fn rects_bounds<'a, R: Rectangular + 'a>(rects: impl IntoIterator<Item = &'a R>) -> Rect {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for r in rects {
        // width/height may be negative, so look at both corners
        let tl = r.top_left();
        let br = r.bottom_right();
        min_x = min_x.min(tl.x).min(br.x);
        min_y = min_y.min(tl.y).min(br.y);
        max_x = max_x.max(tl.x).max(br.x);
        max_y = max_y.max(tl.y).max(br.y);
    }

    if min_x > max_x || min_y > max_y {
        return Rect::default();
    }
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Area covered by cells, without the outer padding when it applies
fn grid_bounds(grid: &Grid) -> Rect {
    let mut left = grid.x();
    let mut right = left + grid.width();
    let mut top = grid.y();
    let mut bottom = top + grid.height();

    if grid.outer_padding() {
        left += grid.padding_left();
        right -= grid.padding_right();
        top += grid.padding_top();
        bottom -= grid.padding_bottom();
    }

    Rect::new(left, top, right - left, bottom - top)
}

/// Bounds of a grid's cell area, or of an explicit cell list.
pub fn bounds<'a>(source: impl Into<CellSource<'a>>) -> Rect {
    let mut out = Rect::default();
    bounds_into(source, &mut out);
    out
}

pub fn bounds_into<'a>(source: impl Into<CellSource<'a>>, out: &mut Rect) {
    *out = match source.into() {
        CellSource::Grid(grid) => grid_bounds(grid),
        CellSource::Cells(cells) => rects_bounds(cells),
    };
}

/// One rectangle covering the grid range from `start` to `stop`.
pub fn cells_merged(grid: &Grid, start: impl Into<Position>, stop: impl Into<Position>) -> Rect {
    let mut out = Rect::default();
    cells_merged_into(grid, start, stop, &mut out);
    out
}

pub fn cells_merged_into(
    grid: &Grid,
    start: impl Into<Position>,
    stop: impl Into<Position>,
    out: &mut Rect,
) {
    let corners = [cell_for_position(grid, start), cell_for_position(grid, stop)];
    *out = rects_bounds(&corners);
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
    use test_case::test_case;

    #[test_case((0, 0), (2, 2), 9 ; "sorted corners")]
    #[test_case((2, 2), (0, 0), 9 ; "reversed corners")]
    #[test_case((3, 0), (0, 1), 8 ; "mixed corners")]
    #[test_case((1, 1), (1, 1), 1 ; "single cell")]
    fn test_range_count_matches_cells(a: (i64, i64), b: (i64, i64), expected: u64) {
        let grid = Grid::new(4, 4).unwrap();
        let a = Position::from(a);
        let b = Position::from(b);

        assert_eq!(num_cells_in_range(a, b), expected);
        assert_eq!(cells_range(&grid, a, b).len() as u64, expected);
    }

    #[test]
    fn test_num_cells_in_range_saturates() {
        let wide = num_cells_in_range(Position::new(i64::MIN, 0), Position::new(i64::MAX, 0));
        assert_eq!(wide, u64::MAX);
        let huge = num_cells_in_range(Position::new(0, 0), Position::new(i64::MAX, i64::MAX));
        assert_eq!(huge, u64::MAX);
    }

    #[test]
    fn test_cells_range_order_follows_row_major() {
        let grid = Grid::new(4, 4).unwrap();
        let order: Vec<_> = cells_range(&grid, Position::new(2, 1), Position::new(1, 2))
            .iter()
            .map(|c| (c.column, c.row))
            .collect();
        assert_eq!(order, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);

        let grid = grid.with_row_major(false);
        let order: Vec<_> = cells_range(&grid, Position::new(2, 1), Position::new(1, 2))
            .iter()
            .map(|c| (c.column, c.row))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_is_in_range() {
        let a = Position::new(3, 1);
        let b = Position::new(1, 4);
        assert!(is_in_range(Position::new(1, 1), a, b));
        assert!(is_in_range(Position::new(3, 4), a, b));
        assert!(is_in_range(Position::new(2, 2), a, b));
        assert!(!is_in_range(Position::new(0, 2), a, b));
        assert!(!is_in_range(Position::new(2, 5), a, b));
    }

    #[test]
    fn test_bounds_of_cells() {
        let grid = Grid::new(4, 4).unwrap();
        let range = cells_range(&grid, Position::new(0, 0), Position::new(2, 2));

        let mut out = Rect::default();
        bounds_into(&range, &mut out);
        assert_eq!(out, Rect::new(0.0, 0.0, 0.75, 0.75));
    }

    #[test]
    fn test_bounds_of_grid() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(bounds(&grid), Rect::new(0.0, 0.0, 1.0, 1.0));

        let padded = Grid::new(2, 2)
            .unwrap()
            .with_size(20.0, 10.0)
            .with_padding(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bounds(&padded), Rect::new(1.0, 3.0, 17.0, 3.0));

        let inner = padded.with_outer_padding(false);
        assert_eq!(bounds(&inner), Rect::new(0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn test_bounds_handles_negative_coordinates() {
        let rects = [
            Cell {
                x: -5.0,
                y: -2.0,
                width: 1.0,
                height: 1.0,
                ..Cell::default()
            },
            Cell {
                x: -1.0,
                y: -8.0,
                width: 0.5,
                height: 2.0,
                ..Cell::default()
            },
        ];
        assert_eq!(bounds(rects.as_slice()), Rect::new(-5.0, -8.0, 4.5, 7.0));
        let empty: [Cell; 0] = [];
        assert_eq!(bounds(empty.as_slice()), Rect::default());
    }

    #[test]
    fn test_cells_merged() {
        let grid = Grid::new(4, 4).unwrap().with_size(8.0, 8.0);
        let merged = cells_merged(&grid, Position::new(3, 1), Position::new(1, 2));
        assert_eq!(merged, Rect::new(2.0, 2.0, 6.0, 4.0));
        assert_eq!(
            merged,
            bounds(&cells_range(&grid, Position::new(3, 1), Position::new(1, 2)))
        );
    }
}
