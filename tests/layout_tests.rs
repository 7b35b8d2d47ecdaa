//! Layout property tests
//!
//! Checks that hold for every grid regardless of padding and major order:
//! index/position round trips, complete enumeration, tiling, ranges,
//! scaling, hit testing and shifting.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::collections::HashSet;

use common::{assert_close, assert_rect_close, grid, grid_variants, padded_grid};
use grid2d::layout::{
    bounds, cell_for_index, cell_for_position, cell_index, cell_position, cell_position_of,
    cell_width, cells, cells_intersect, cells_merged, cells_range, closest_cell,
    closest_cell_index, closest_cell_position, contains, equals, intersects_cell,
    intersects_cell_index, is_in_range, num_cells_in_range, positions, scale, shift_cells,
    sort_by_grid_position, ShiftParams,
};
use grid2d::{Point, Position, Rect, Rectangular};
use test_case::test_case;

// ============================================================================
// Index <-> position
// ============================================================================

#[test_case(1, 1, true ; "single cell")]
#[test_case(11, 5, true ; "wide row major")]
#[test_case(11, 5, false ; "wide column major")]
#[test_case(3, 7, false ; "tall column major")]
fn test_index_position_round_trip(columns: u32, rows: u32, row_major: bool) {
    let grid = grid(columns, rows).with_row_major(row_major);

    for position in positions(&grid) {
        assert_eq!(cell_position(&grid, cell_index(&grid, position)), position);
    }

    let total = i64::from(columns * rows);
    for index in -5..total + 5 {
        assert_eq!(cell_index(&grid, cell_position(&grid, index)), index);
    }
}

#[test]
fn test_enumeration_is_complete_and_unique() {
    for grid in grid_variants(5, 4) {
        let all = cells(&grid);
        assert_eq!(all.len(), 20);

        let slots: HashSet<Position> = all.iter().map(|c| c.position()).collect();
        assert_eq!(slots.len(), 20);
        assert!(slots
            .iter()
            .all(|p| (0..5).contains(&p.column) && (0..4).contains(&p.row)));

        for (i, cell) in (0_i64..).zip(&all) {
            assert_eq!(*cell, cell_for_index(&grid, i));
            assert_eq!(cell_index(&grid, cell.position()), i);
        }
    }
}

#[test]
fn test_cell_position_of_finds_every_cell() {
    for grid in grid_variants(4, 3) {
        for cell in cells(&grid) {
            assert_eq!(cell_position_of(&grid, &cell).position(), Some(cell.position()));
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_cells_tile_the_grid() {
    for grid in grid_variants(4, 3) {
        let edge = |padding: f64| if grid.outer_padding() { padding } else { 0.0 };
        let first = cell_for_position(&grid, (0_i64, 0_i64));
        let last = cell_for_position(&grid, (3_i64, 2_i64));

        assert_close(first.x, grid.x() + edge(grid.padding_left()));
        assert_close(first.y, grid.y() + edge(grid.padding_top()));
        assert_close(
            last.x + last.width,
            grid.x() + grid.width() - edge(grid.padding_right()),
        );
        assert_close(
            last.y + last.height,
            grid.y() + grid.height() - edge(grid.padding_bottom()),
        );
    }
}

#[test]
fn test_neighbours_are_separated_by_both_paddings() {
    for grid in grid_variants(4, 3) {
        let cell = cell_for_position(&grid, (1_i64, 1_i64));
        let right = cell_for_position(&grid, (2_i64, 1_i64));
        let below = cell_for_position(&grid, (1_i64, 2_i64));

        // left + right, top + bottom
        assert_close(right.x - (cell.x + cell.width), 5.0);
        assert_close(below.y - (cell.y + cell.height), 5.0);
        assert_eq!(right.width, cell.width);
        assert_eq!(below.height, cell.height);
    }
}

#[test]
fn test_outer_padding_sizes() {
    let outer = padded_grid(4, 3, true, true);
    let first = cell_for_position(&outer, (0_i64, 0_i64));
    assert_eq!(first.rect(), Rect::new(12.0, -19.0, 95.0, 95.0));

    let inner = padded_grid(4, 3, false, true);
    let first = cell_for_position(&inner, (0_i64, 0_i64));
    assert_eq!((first.x, first.y), (10.0, -20.0));
    assert_close(first.width, 96.25);
    assert_close(first.height, 290.0 / 3.0);
}

#[test]
fn test_bounds_agree() {
    for grid in grid_variants(4, 3) {
        let from_grid = bounds(&grid);
        assert_rect_close(bounds(&cells(&grid)), from_grid);
        assert_rect_close(cells_merged(&grid, (3_i64, 2_i64), (0_i64, 0_i64)), from_grid);
    }
}

// ============================================================================
// Ranges
// ============================================================================

#[test_case((0, 0), (4, 3) ; "whole grid")]
#[test_case((4, 3), (0, 0) ; "reversed")]
#[test_case((1, 3), (3, 1) ; "anti diagonal")]
#[test_case((2, 2), (2, 2) ; "single")]
fn test_range_is_consistent(a: (i64, i64), b: (i64, i64)) {
    let (a, b) = (Position::from(a), Position::from(b));

    for grid in grid_variants(5, 4) {
        let range = cells_range(&grid, a, b);
        assert_eq!(range.len() as u64, num_cells_in_range(a, b));
        assert!(range.iter().all(|c| is_in_range(c.position(), a, b)));

        let count = positions(&grid).filter(|p| is_in_range(*p, a, b)).count();
        assert_eq!(range.len(), count);

        // same order as the full enumeration
        let indices: Vec<i64> = range.iter().map(|c| cell_index(&grid, c.position())).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}

// ============================================================================
// Scaling and equality
// ============================================================================

#[test]
fn test_scale_leaves_unset_properties_unset() {
    let grid = grid(4, 3).with_origin(5.0, 6.0);
    let scaled = scale(&grid, 2.0, 3.0);

    assert_eq!((scaled.x, scaled.y), (Some(10.0), Some(18.0)));
    assert_eq!((scaled.width, scaled.height), (Some(2.0), Some(3.0)));
    assert_eq!(scaled.padding_left, None);
    assert_eq!(scaled.padding_bottom, None);
    assert_eq!(scaled.outer_padding, None);
    assert_eq!((scaled.columns(), scaled.rows()), (4, 3));
    assert_eq!(cell_width(&scaled), 2.0 * cell_width(&grid));
}

#[test]
fn test_scale_scales_every_cell() {
    for grid in grid_variants(4, 3) {
        let scaled = scale(&grid, 2.0, 0.5);
        for (cell, scaled_cell) in cells(&grid).iter().zip(cells(&scaled)) {
            assert_eq!(scaled_cell.position(), cell.position());
            assert_close(scaled_cell.x, cell.x * 2.0);
            assert_close(scaled_cell.y, cell.y * 0.5);
            assert_close(scaled_cell.width, cell.width * 2.0);
            assert_close(scaled_cell.height, cell.height * 0.5);
        }
    }
}

#[test]
fn test_equals() {
    let plain = grid(3, 3);
    let explicit = grid(3, 3)
        .with_size(1.0, 1.0)
        .with_padding(0.0, 0.0, 0.0, 0.0);

    assert!(equals(&plain, &explicit));
    assert!(!equals(&plain, &grid(3, 4)));
    assert!(!equals(&plain, &plain.clone().with_row_major(false)));

    // grid against a rectangle compares extent only
    assert!(equals(&plain, Rect::new(0.0, 0.0, 1.0, 1.0)));
    let padded = padded_grid(4, 3, true, false);
    assert!(equals(&padded, padded.rect()));

    let all = cells(&plain);
    assert!(equals(&all[0], Rect::new(0.0, 0.0, 1.0 / 3.0, 1.0 / 3.0)));
    assert!(!equals(&all[0], &all[1]));
}

// ============================================================================
// Point queries
// ============================================================================

#[test]
fn test_closest_cell_clamps_and_breaks_ties_low() {
    let grid = grid(11, 5).with_size(110.0, 50.0);

    assert_eq!(
        closest_cell_position(&grid, Point::new(-100.0, 1000.0)),
        Position::new(0, 4)
    );
    assert_eq!(
        closest_cell_position(&grid, Point::new(1000.0, -1.0)),
        Position::new(10, 0)
    );
    // halfway between the first two centers on both axes
    assert_eq!(
        closest_cell_position(&grid, Point::new(10.0, 10.0)),
        Position::new(0, 0)
    );
    assert_eq!(closest_cell_index(&grid, Point::new(54.0, 26.0)), 27);
}

#[test]
fn test_centers_resolve_to_their_own_cell() {
    for grid in grid_variants(4, 3) {
        let all = cells(&grid);
        for (i, cell) in all.iter().enumerate() {
            let center = cell.center();
            assert_eq!(closest_cell(&grid, center), *cell);
            assert_eq!(intersects_cell(&grid, center), Some(*cell));
            assert_eq!(intersects_cell_index(&grid, center), Some(i));
            assert_eq!(intersects_cell_index(&all, center), Some(i));
        }
    }
}

#[test]
fn test_gutter_is_not_inside_any_cell() {
    for grid in grid_variants(4, 3) {
        let first = cell_for_position(&grid, (0_i64, 0_i64));
        let gutter = Point::new(first.x + first.width + 2.5, first.center().y);

        assert_eq!(intersects_cell(&grid, gutter), None);
        assert_eq!(intersects_cell_index(&cells(&grid), gutter), None);
        // but something is always closest
        let closest = closest_cell(&grid, gutter);
        assert_eq!(closest.row, 0);
    }
}

#[test]
fn test_shared_edge_containment_vs_intersection() {
    let grid = grid(2, 1).with_size(2.0, 1.0);
    let left = cell_for_position(&grid, (0_i64, 0_i64));
    let right = cell_for_position(&grid, (1_i64, 0_i64));
    let edge = Point::new(1.0, 0.5);

    assert!(contains(&left, edge));
    assert!(contains(&right, edge));
    assert!(!cells_intersect(&left, &right));
    assert!(cells_intersect(&left, &left));

    // the scan hits the left cell first
    assert_eq!(intersects_cell(&grid, edge), Some(left));
}

// ============================================================================
// Shifting
// ============================================================================

#[test_case(1, 0, false ; "right")]
#[test_case(-2, 1, false ; "left and down")]
#[test_case(7, -5, true ; "wrapping far")]
#[test_case(0, 0, true ; "no-op")]
fn test_shift_keeps_population(columns: i64, rows: i64, wrap: bool) {
    for grid in grid_variants(4, 3) {
        let mut all = cells(&grid);
        shift_cells(
            &grid,
            &mut all,
            ShiftParams {
                columns,
                rows,
                wrap,
                sort: true,
            },
        );

        let mut expected: Vec<Position> = positions(&grid).collect();
        expected.sort_by(sort_by_grid_position);
        let actual: Vec<Position> = all.iter().map(|c| c.position()).collect();
        assert_eq!(actual, expected);

        for cell in &all {
            assert_eq!(*cell, cell_for_position(&grid, cell.position()));
        }
    }
}

#[test]
fn test_shift_by_full_grid_with_wrap_is_identity() {
    let grid = padded_grid(4, 3, true, false);
    let mut all = cells(&grid);
    shift_cells(
        &grid,
        &mut all,
        ShiftParams {
            columns: 4,
            rows: -3,
            wrap: true,
            sort: false,
        },
    );
    assert_eq!(all, cells(&grid));
}
