//! Tests for the JavaScript-facing exports.
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use grid2d::{
    grid_bounds, grid_cells, grid_cells_range, grid_closest_cell, grid_intersects_cell,
    grid_normalize, version, Cell, CompleteGrid, Rect,
};
use wasm_bindgen_test::wasm_bindgen_test;

const GRID_JSON: &str = r#"{"columns": 4, "rows": 3, "width": 400, "height": 300}"#;

#[wasm_bindgen_test]
fn test_grid_cells() {
    let cells: Vec<Cell> = serde_json::from_str(&grid_cells(GRID_JSON).unwrap()).unwrap();
    assert_eq!(cells.len(), 12);
    assert_eq!((cells[1].x, cells[1].width), (100.0, 100.0));
}

#[wasm_bindgen_test]
fn test_grid_queries() {
    let rect: Rect = serde_json::from_str(&grid_bounds(GRID_JSON).unwrap()).unwrap();
    assert_eq!(rect, Rect::new(0.0, 0.0, 400.0, 300.0));

    let complete: CompleteGrid =
        serde_json::from_str(&grid_normalize(GRID_JSON).unwrap()).unwrap();
    assert!(complete.outer_padding);

    let closest: Cell =
        serde_json::from_str(&grid_closest_cell(GRID_JSON, 390.0, 10.0).unwrap()).unwrap();
    assert_eq!((closest.column, closest.row), (3, 0));

    assert_eq!(
        grid_intersects_cell(GRID_JSON, -1.0, -1.0).unwrap(),
        "null"
    );

    let range: Vec<Cell> =
        serde_json::from_str(&grid_cells_range(GRID_JSON, 0, 0, 1, 1).unwrap()).unwrap();
    assert_eq!(range.len(), 4);
}

#[wasm_bindgen_test]
fn test_invalid_grid_is_an_error() {
    assert!(grid_cells(r#"{"columns": 0, "rows": 1}"#).is_err());
    assert!(grid_cells("not json").is_err());
}

#[wasm_bindgen_test]
fn test_version() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}
