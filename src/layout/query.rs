//! Point queries: closest cell, containment and hit testing.
//!
//! Scans are linear in columns + rows (closest) or in cells (hit testing),
//! which is fine at the sizes uniform grids are used for.

use super::cells::{cell_for_position, cell_for_position_into};
use super::mapping::{cell_height, cell_index, cell_width, x_for_column, y_for_row};
use crate::types::{Cell, Grid, Point, Position, Rectangular};

/// Where cells come from: generated from a grid, or an explicit list
#[derive(Debug, Clone, Copy)]
pub enum CellSource<'a> {
    Grid(&'a Grid),
    Cells(&'a [Cell]),
}

impl<'a> From<&'a Grid> for CellSource<'a> {
    fn from(grid: &'a Grid) -> Self {
        Self::Grid(grid)
    }
}

impl<'a> From<&'a [Cell]> for CellSource<'a> {
    fn from(cells: &'a [Cell]) -> Self {
        Self::Cells(cells)
    }
}

impl<'a> From<&'a Vec<Cell>> for CellSource<'a> {
    fn from(cells: &'a Vec<Cell>) -> Self {
        Self::Cells(cells.as_slice())
    }
}

/// Index of the entry in `centers` nearest to `target`; the lower index wins ties.
fn nearest(centers: impl Iterator<Item = f64>, target: f64) -> i64 {
    let mut best = 0;
    let mut min_distance = f64::INFINITY;
    for (i, center) in (0_i64..).zip(centers) {
        let distance = (target - center).abs();
        if distance < min_distance {
            min_distance = distance;
            best = i;
        }
    }
    best
}

/// Column and row whose centers are nearest to `point`, chosen per axis.
///
/// Points outside the grid resolve to the nearest edge column/row.
pub fn closest_cell_position(grid: &Grid, point: Point) -> Position {
    let half_width = cell_width(grid) / 2.0;
    let half_height = cell_height(grid) / 2.0;

    let column = nearest(
        (0..i64::from(grid.columns())).map(|c| x_for_column(grid, c) + half_width),
        point.x,
    );
    let row = nearest(
        (0..i64::from(grid.rows())).map(|r| y_for_row(grid, r) + half_height),
        point.y,
    );

    Position::new(column, row)
}

pub fn closest_cell(grid: &Grid, point: Point) -> Cell {
    cell_for_position(grid, closest_cell_position(grid, point))
}

pub fn closest_cell_index(grid: &Grid, point: Point) -> i64 {
    cell_index(grid, closest_cell_position(grid, point))
}

/// Does `target` contain `point`? Edges count as inside.
pub fn contains(target: &impl Rectangular, point: Point) -> bool {
    let r = target.rect();
    point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height
}

/// Do two rectangles overlap? Rectangles that only share an edge do not.
pub fn cells_intersect(a: &impl Rectangular, b: &impl Rectangular) -> bool {
    let a = a.rect();
    let b = b.rect();
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// First cell (scanning rows, then columns) that contains `point`, or `None`
/// when the point is outside every cell.
pub fn intersects_cell_position(grid: &Grid, point: Point) -> Option<Position> {
    let mut cell = Cell::default();

    for row in 0..i64::from(grid.rows()) {
        for column in 0..i64::from(grid.columns()) {
            cell_for_position_into(grid, Position::new(column, row), &mut cell);
            if contains(&cell, point) {
                return Some(Position::new(column, row));
            }
        }
    }
    None
}

/// Cell containing `point`.
pub fn intersects_cell<'a>(source: impl Into<CellSource<'a>>, point: Point) -> Option<Cell> {
    match source.into() {
        CellSource::Grid(grid) => {
            intersects_cell_position(grid, point).map(|p| cell_for_position(grid, p))
        }
        CellSource::Cells(cells) => cells.iter().find(|c| contains(*c, point)).copied(),
    }
}

/// Index of the cell containing `point`: the linear index for a grid, the
/// slice index for a cell list. Either way it indexes the matching `cells()`
/// vector.
pub fn intersects_cell_index<'a>(source: impl Into<CellSource<'a>>, point: Point) -> Option<usize> {
    match source.into() {
        CellSource::Grid(grid) => intersects_cell_position(grid, point)
            .and_then(|p| usize::try_from(cell_index(grid, p)).ok()),
        CellSource::Cells(cells) => cells.iter().position(|c| contains(c, point)),
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
    use crate::layout::{bounds, cells};
    use crate::types::Rect;

    #[test]
    fn test_closest_cell_position() {
        let grid = Grid::new(11, 5).unwrap();

        assert_eq!(closest_cell_position(&grid, Point::new(0.0, 0.0)), Position::new(0, 0));
        assert_eq!(closest_cell_position(&grid, Point::new(0.5, 0.5)), Position::new(5, 2));
        assert_eq!(closest_cell_position(&grid, Point::new(2.0, 2.0)), Position::new(10, 4));
    }

    #[test]
    fn test_closest_cell_tie_prefers_lower_index() {
        // The boundary between column 0 and 1 is equidistant from both centers
        let grid = Grid::new(2, 1).unwrap().with_width(2.0);
        assert_eq!(closest_cell_position(&grid, Point::new(1.0, 0.5)).column, 0);
    }

    #[test]
    fn test_closest_cell_and_index() {
        let grid = Grid::new(4, 4).unwrap().with_size(4.0, 4.0);
        let point = Point::new(2.2, 3.9);
        let cell = closest_cell(&grid, point);
        assert_eq!(cell.position(), Position::new(2, 3));
        assert_eq!(closest_cell_index(&grid, point), 14);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let cell = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains(&cell, Point::new(10.0, 5.0)));
        assert!(contains(&cell, Point::new(0.0, 0.0)));
        assert!(!contains(&cell, Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_shared_edge_is_contained_but_not_intersecting() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!cells_intersect(&a, &b));

        let on_edge = Point::new(10.0, 5.0);
        assert!(contains(&a, on_edge));
        assert!(contains(&b, on_edge));

        let c = Rect::new(9.0, 9.0, 5.0, 5.0);
        assert!(cells_intersect(&a, &c));
        assert!(cells_intersect(&c, &b));
    }

    #[test]
    fn test_intersects_cell_position() {
        let grid = Grid::new(11, 5).unwrap();

        assert_eq!(
            intersects_cell_position(&grid, Point::new(0.0, 0.0)),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            intersects_cell_position(&grid, Point::new(0.5, 0.5)),
            Some(Position::new(5, 2))
        );
        assert_eq!(intersects_cell_position(&grid, Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn test_intersects_gutter_is_a_miss() {
        let grid = Grid::new(2, 1)
            .unwrap()
            .with_size(12.0, 10.0)
            .with_padding(1.0, 1.0, 0.0, 0.0);
        // cells span [1, 5] and [7, 11]
        assert_eq!(intersects_cell_position(&grid, Point::new(6.0, 5.0)), None);
        assert_eq!(
            intersects_cell_position(&grid, Point::new(7.0, 5.0)),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn test_grid_contains_its_outer_padding() {
        let grid = Grid::new(2, 1)
            .unwrap()
            .with_size(12.0, 10.0)
            .with_padding(1.0, 1.0, 0.0, 0.0);
        // left padding strip, outside the cell area [1, 11]
        let point = Point::new(0.5, 5.0);

        assert!(contains(&grid, point));
        assert!(!contains(&bounds(&grid), point));
        assert_eq!(intersects_cell(&grid, point), None);
        assert!(!contains(&grid, Point::new(12.5, 5.0)));
    }

    #[test]
    fn test_intersects_grid_and_cell_list_agree() {
        let grid = Grid::new(3, 3).unwrap().with_size(30.0, 30.0).with_row_major(false);
        let all = cells(&grid);
        let point = Point::new(15.0, 25.0);

        let from_grid = intersects_cell_index(&grid, point).unwrap();
        let from_list = intersects_cell_index(&all, point).unwrap();
        assert_eq!(from_grid, from_list);
        assert_eq!(all[from_grid].position(), Position::new(1, 2));

        assert_eq!(intersects_cell(&grid, point), intersects_cell(&all, point));
        assert_eq!(intersects_cell(&all, Point::new(-1.0, 0.0)), None);
        assert_eq!(intersects_cell_index(&grid, Point::new(31.0, 0.0)), None);
    }
}
