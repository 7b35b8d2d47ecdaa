use serde::{Deserialize, Serialize};

use super::Grid;

/// A location in continuous 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `x`, `y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Zero-based discrete grid coordinate.
///
/// Signed so that intermediate results (shifts, one-past-the-end edges) can
/// fall outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub column: i64,
    pub row: i64,
}

impl Position {
    pub const fn new(column: i64, row: i64) -> Self {
        Self { column, row }
    }
}

impl From<(i64, i64)> for Position {
    fn from((column, row): (i64, i64)) -> Self {
        Self { column, row }
    }
}

/// One grid slot's rectangle, tagged with the slot it came from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub column: i64,
    pub row: i64,
}

impl Cell {
    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }
}

/// Anything with an axis-aligned extent.
pub trait Rectangular {
    fn rect(&self) -> Rect;

    fn top_left(&self) -> Point {
        let r = self.rect();
        Point::new(r.x, r.y)
    }

    fn top_right(&self) -> Point {
        let r = self.rect();
        Point::new(r.x + r.width, r.y)
    }

    fn bottom_left(&self) -> Point {
        let r = self.rect();
        Point::new(r.x, r.y + r.height)
    }

    fn bottom_right(&self) -> Point {
        let r = self.rect();
        Point::new(r.x + r.width, r.y + r.height)
    }

    fn center(&self) -> Point {
        let r = self.rect();
        Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }
}

impl Rectangular for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

impl Rectangular for Cell {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The grid's full outer extent, padding included
impl Rectangular for Grid {
    fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }
}

/// Anything that occupies a grid slot.
pub trait GridSlot {
    fn slot(&self) -> Position;
}

impl GridSlot for Position {
    fn slot(&self) -> Position {
        *self
    }
}

impl GridSlot for Cell {
    fn slot(&self) -> Position {
        self.position()
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
    fn test_corners() {
        let r = Rect::new(1.0, 2.0, 10.0, 4.0);
        assert_eq!(r.top_left(), Point::new(1.0, 2.0));
        assert_eq!(r.top_right(), Point::new(11.0, 2.0));
        assert_eq!(r.bottom_left(), Point::new(1.0, 6.0));
        assert_eq!(r.bottom_right(), Point::new(11.0, 6.0));
        assert_eq!(r.center(), Point::new(6.0, 4.0));
    }

    #[test]
    fn test_grid_extent_uses_defaults() {
        let grid = Grid::new(3, 3).unwrap().with_width(6.0);
        assert_eq!(grid.rect(), Rect::new(0.0, 0.0, 6.0, 1.0));
        assert_eq!(grid.center(), Point::new(3.0, 0.5));
    }

    #[test]
    fn test_cell_slot() {
        let cell = Cell {
            column: 2,
            row: 5,
            ..Cell::default()
        };
        assert_eq!(cell.slot(), Position::new(2, 5));
        assert_eq!(Position::from((2_i64, 5_i64)), cell.position());
    }
}
