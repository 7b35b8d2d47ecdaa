//! Common test utilities and assertion helpers.
//!
//! Grid builders covering every padding / major-order combination, plus
//! float comparison helpers for derived geometry.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use grid2d::{Grid, Rect};

/// Tolerance for geometry that went through division
pub const EPSILON: f64 = 1e-9;

/// A `columns` x `rows` grid with every other property defaulted.
#[must_use]
pub fn grid(columns: u32, rows: u32) -> Grid {
    Grid::new(columns, rows).expect("non-empty grid")
}

/// A grid with an offset origin, explicit size and uneven paddings.
#[must_use]
pub fn padded_grid(columns: u32, rows: u32, outer_padding: bool, row_major: bool) -> Grid {
    grid(columns, rows)
        .with_origin(10.0, -20.0)
        .with_size(400.0, 300.0)
        .with_padding(2.0, 3.0, 1.0, 4.0)
        .with_outer_padding(outer_padding)
        .with_row_major(row_major)
}

/// One grid per (outer padding, row major) combination.
#[must_use]
pub fn grid_variants(columns: u32, rows: u32) -> Vec<Grid> {
    let mut variants = Vec::new();
    for outer_padding in [true, false] {
        for row_major in [true, false] {
            variants.push(padded_grid(columns, rows, outer_padding, row_major));
        }
    }
    variants
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_rect_close(actual: Rect, expected: Rect) {
    assert_close(actual.x, expected.x);
    assert_close(actual.y, expected.y);
    assert_close(actual.width, expected.width);
    assert_close(actual.height, expected.height);
}
