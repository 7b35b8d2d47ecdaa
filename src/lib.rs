//! grid2d - layout geometry for uniform 2D grids
//!
//! Given column/row counts and an optional origin, size and padding, derive:
//! - Per-cell rectangles, linear indices and positions (row- or column-major)
//! - Closest-cell and point-in-cell queries
//! - Ranges, bounds, scaling, equality and shifting of cell collections
//!
//! Drawing is left to the caller: the crate only hands out rectangles.
//!
//! # Usage
//!
//! ```
//! use grid2d::layout::{cells, closest_cell_position};
//! use grid2d::{Grid, Point, Position};
//!
//! let grid = Grid::new(11, 5)?.with_size(110.0, 50.0);
//! assert_eq!(cells(&grid).len(), 55);
//! assert_eq!(
//!     closest_cell_position(&grid, Point::new(55.0, 25.0)),
//!     Position::new(5, 2)
//! );
//! # Ok::<(), grid2d::error::GridError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { grid_cells } from 'grid2d';
//! await init();
//! const cells = JSON.parse(grid_cells(JSON.stringify({ columns: 4, rows: 3, width: 400 })));
//! ```

pub mod error;
pub mod json;
pub mod layout;
pub mod types;

use wasm_bindgen::prelude::*;

pub use error::GridError;
pub use types::*;

use json::{run_json, Query};

fn js_error(e: &GridError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Every cell of the grid as a JSON array
///
/// # Errors
/// Returns an error if `grid_json` is not a valid grid.
#[wasm_bindgen]
pub fn grid_cells(grid_json: &str) -> Result<String, JsValue> {
    run_json(grid_json, &Query::Cells).map_err(|e| js_error(&e))
}

/// The grid with every default filled in, as JSON
///
/// # Errors
/// Returns an error if `grid_json` is not a valid grid.
#[wasm_bindgen]
pub fn grid_normalize(grid_json: &str) -> Result<String, JsValue> {
    run_json(grid_json, &Query::Normalize).map_err(|e| js_error(&e))
}

/// Bounds of the grid's cell area, as JSON
///
/// # Errors
/// Returns an error if `grid_json` is not a valid grid.
#[wasm_bindgen]
pub fn grid_bounds(grid_json: &str) -> Result<String, JsValue> {
    run_json(grid_json, &Query::Bounds).map_err(|e| js_error(&e))
}

/// The cell nearest to (`x`, `y`), as JSON
///
/// # Errors
/// Returns an error if `grid_json` is not a valid grid.
#[wasm_bindgen]
pub fn grid_closest_cell(grid_json: &str, x: f64, y: f64) -> Result<String, JsValue> {
    run_json(grid_json, &Query::Closest(Point::new(x, y))).map_err(|e| js_error(&e))
}

/// The cell containing (`x`, `y`) as JSON, or `"null"`
///
/// # Errors
/// Returns an error if `grid_json` is not a valid grid.
#[wasm_bindgen]
pub fn grid_intersects_cell(
    grid_json: &str,
    x: f64,
    y: f64,
) -> Result<String, JsValue> {
    run_json(grid_json, &Query::Intersects(Point::new(x, y))).map_err(|e| js_error(&e))
}

/// Cells between two corner positions, as JSON
///
/// # Errors
/// Returns an error if `grid_json` is not a valid grid.
#[wasm_bindgen]
pub fn grid_cells_range(
    grid_json: &str,
    start_column: i32,
    start_row: i32,
    stop_column: i32,
    stop_row: i32,
) -> Result<String, JsValue> {
    let query = Query::Range(
        Position::new(i64::from(start_column), i64::from(start_row)),
        Position::new(i64::from(stop_column), i64::from(stop_row)),
    );
    run_json(grid_json, &query).map_err(|e| js_error(&e))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
