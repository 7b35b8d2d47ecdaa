//! Whole-grid transforms and comparisons.

use crate::types::{Cell, Grid, Rect, Rectangular};

/// Multiply the grid's geometry in place.
///
/// `width`/`height` are always written (defaulted if unset). Origin and
/// paddings are only scaled when they were set; unset ones stay unset.
fn rescale(grid: &mut Grid, scale_x: f64, scale_y: f64) {
    grid.width = Some(grid.width() * scale_x);
    grid.height = Some(grid.height() * scale_y);

    for value in [&mut grid.x, &mut grid.padding_left, &mut grid.padding_right] {
        *value = value.map(|v| v * scale_x);
    }
    for value in [&mut grid.y, &mut grid.padding_top, &mut grid.padding_bottom] {
        *value = value.map(|v| v * scale_y);
    }
}

/// A copy of `grid` scaled by `scale_x` horizontally and `scale_y`
/// vertically. Column and row counts are unchanged.
pub fn scale(grid: &Grid, scale_x: f64, scale_y: f64) -> Grid {
    let mut scaled = grid.clone();
    rescale(&mut scaled, scale_x, scale_y);
    tracing::debug!(
        "Scaled {}x{} grid by ({}, {})",
        grid.columns(),
        grid.rows(),
        scale_x,
        scale_y
    );
    scaled
}

/// Like [`scale`], overwriting `out`.
pub fn scale_into(grid: &Grid, scale_x: f64, scale_y: f64, out: &mut Grid) {
    out.clone_from(grid);
    rescale(out, scale_x, scale_y);
}

/// Operand of [`equals`]
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Grid(&'a Grid),
    Rect(Rect),
}

impl Shape<'_> {
    fn rect(&self) -> Rect {
        match self {
            Shape::Grid(grid) => grid.rect(),
            Shape::Rect(rect) => *rect,
        }
    }
}

impl<'a> From<&'a Grid> for Shape<'a> {
    fn from(grid: &'a Grid) -> Self {
        Self::Grid(grid)
    }
}

impl From<Rect> for Shape<'_> {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<&Rect> for Shape<'_> {
    fn from(rect: &Rect) -> Self {
        Self::Rect(*rect)
    }
}

impl From<&Cell> for Shape<'_> {
    fn from(cell: &Cell) -> Self {
        Self::Rect(cell.rect())
    }
}

/// Same geometry (`x`, `y`, `width`, `height`), and when both sides are
/// grids, also the same counts, paddings and flags.
///
/// Grids compare by resolved values, so an unset padding equals an explicit 0.
pub fn equals<'a, 'b>(a: impl Into<Shape<'a>>, b: impl Into<Shape<'b>>) -> bool {
    let a = a.into();
    let b = b.into();

    match (a, b) {
        (Shape::Grid(a), Shape::Grid(b)) => a.normalize() == b.normalize(),
        _ => a.rect() == b.rect(),
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

    #[test]
    fn test_scale_minimal_grid() {
        let scaled = scale(&Grid::new(10, 10).unwrap(), 100.0, 200.0);

        assert_eq!(scaled.columns(), 10);
        assert_eq!(scaled.rows(), 10);
        assert_eq!(scaled.x, None);
        assert_eq!(scaled.width, Some(100.0));
        assert_eq!(scaled.height, Some(200.0));
    }

    #[test]
    fn test_scale_only_what_is_set() {
        let mut grid = Grid::new(10, 10)
            .unwrap()
            .with_origin(2.0, 2.0)
            .with_size(10.0, 5.0);
        grid.padding_left = Some(5.0);

        let scaled = scale(&grid, 100.0, 200.0);
        assert_eq!(scaled.columns(), 10);
        assert_eq!(scaled.rows(), 10);
        assert_eq!(scaled.x, Some(200.0));
        assert_eq!(scaled.y, Some(400.0));
        assert_eq!(scaled.width, Some(1000.0));
        assert_eq!(scaled.height, Some(1000.0));
        assert_eq!(scaled.padding_left, Some(500.0));
        assert_eq!(scaled.padding_right, None);
        assert_eq!(scaled.padding_top, None);
    }

    #[test]
    fn test_scale_into_replaces_output() {
        let grid = Grid::new(2, 2).unwrap();
        let mut out = Grid::new(7, 7).unwrap().with_origin(1.0, 1.0);
        scale_into(&grid, 3.0, 4.0, &mut out);

        assert_eq!(out.columns(), 2);
        assert_eq!(out.x, None);
        assert_eq!((out.width, out.height), (Some(3.0), Some(4.0)));
    }

    #[test]
    fn test_grid_equals_copy() {
        let mut grid = Grid::new(4, 4).unwrap().with_width(10.0).with_outer_padding(false);
        grid.padding_left = Some(5.0);

        let mut copy = grid.clone();
        assert!(equals(&grid, &copy));

        copy.padding_right = Some(1.0);
        assert!(!equals(&grid, &copy));
    }

    #[test]
    fn test_grid_equals_uses_resolved_values() {
        let mut a = Grid::new(4, 4).unwrap();
        let b = Grid::new(4, 4).unwrap();
        a.padding_top = Some(0.0);
        assert!(equals(&a, &b));

        assert!(!equals(&a, &Grid::new(4, 5).unwrap()));
        assert!(!equals(&a, &Grid::new(4, 4).unwrap().with_row_major(false)));
    }

    #[test]
    fn test_cell_equality_is_geometry_only() {
        let a = Cell {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
            column: 0,
            row: 0,
        };
        let b = Cell {
            column: 5,
            row: 9,
            ..a
        };
        assert!(equals(&a, &b));
        assert!(equals(&a, Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert!(!equals(&a, Rect::new(1.0, 2.0, 3.0, 5.0)));

        // a grid against a plain rectangle compares its extent only
        let grid = Grid::new(8, 8).unwrap().with_padding(1.0, 1.0, 1.0, 1.0);
        assert!(equals(&grid, Rect::new(0.0, 0.0, 1.0, 1.0)));
    }
}
