//! Moving a grid's cell collection by whole columns/rows, and keeping such
//! collections in canonical order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::cells::{cell_for_position, cell_for_position_into};
use crate::types::{Cell, Grid, GridSlot, Position};

/// How [`shift_cells`] moves cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftParams {
    /// Columns to shift right (negative shifts left)
    pub columns: i64,
    /// Rows to shift down (negative shifts up)
    pub rows: i64,
    /// Carry cells pushed off one edge around to the other
    pub wrap: bool,
    /// Re-sort the collection into grid order afterwards
    pub sort: bool,
}

impl Default for ShiftParams {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 0,
            wrap: false,
            sort: true,
        }
    }
}

/// Canonical grid order: by row, then by column.
pub fn sort_by_grid_position<T: GridSlot>(a: &T, b: &T) -> Ordering {
    let a = a.slot();
    let b = b.slot();
    a.row.cmp(&b.row).then(a.column.cmp(&b.column))
}

/// Move every cell of `cells` by `params.columns` x `params.rows` slots.
///
/// A cell whose destination leaves the grid lands on the wrapped-around slot
/// either way. With `wrap` the same entry is moved there; without it the entry
/// is dropped and a fresh cell is appended for that slot instead, so the
/// population is the same but which entry sits where differs.
///
/// Entries whose slot is outside the grid are left untouched.
pub fn shift_cells(grid: &Grid, cells: &mut Vec<Cell>, params: ShiftParams) {
    let columns = i64::from(grid.columns());
    let rows = i64::from(grid.rows());
    // Reduced steps keep the wrapped target in range for any delta
    let column_step = params.columns.rem_euclid(columns);
    let row_step = params.rows.rem_euclid(rows);

    // Resolve slots up front so entries moved earlier don't shadow later ones
    let slots: HashMap<Position, usize> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| (cell.position(), i))
        .collect();

    let mut dropped = HashSet::new();
    let mut added = Vec::new();

    for column in 0..columns {
        for row in 0..rows {
            let Some(&i) = slots.get(&Position::new(column, row)) else {
                continue;
            };

            // An overflowing destination is as far outside as it gets
            let inside = column
                .checked_add(params.columns)
                .is_some_and(|c| (0..columns).contains(&c))
                && row
                    .checked_add(params.rows)
                    .is_some_and(|r| (0..rows).contains(&r));
            let target = Position::new(
                (column + column_step) % columns,
                (row + row_step) % rows,
            );

            if inside || params.wrap {
                if let Some(cell) = cells.get_mut(i) {
                    cell_for_position_into(grid, target, cell);
                }
            } else {
                dropped.insert(i);
                added.push(cell_for_position(grid, target));
            }
        }
    }

    tracing::debug!(
        "Shifted {} cells by ({}, {}), {} replaced",
        slots.len(),
        params.columns,
        params.rows,
        added.len()
    );

    if !dropped.is_empty() {
        let mut i = 0;
        cells.retain(|_| {
            let keep = !dropped.contains(&i);
            i += 1;
            keep
        });
    }
    cells.extend(added);

    // Replacements were appended, so order is only restored by sorting
    if params.sort {
        cells.sort_by(sort_by_grid_position);
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
    use crate::layout::cells;

    fn slots(cells: &[Cell]) -> Vec<(i64, i64)> {
        cells.iter().map(|c| (c.column, c.row)).collect()
    }

    #[test]
    fn test_sort_by_grid_position_row_first() {
        let mut positions = vec![
            Position::new(1, 1),
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(0, 1),
        ];
        positions.sort_by(sort_by_grid_position);
        assert_eq!(
            positions,
            vec![
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(0, 2),
            ]
        );
        assert_eq!(
            sort_by_grid_position(&Position::new(3, 3), &Position::new(3, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_shift_inside_grid_moves_geometry() {
        let grid = Grid::new(3, 3).unwrap().with_size(3.0, 3.0);
        let mut all = cells(&grid);
        shift_cells(
            &grid,
            &mut all,
            ShiftParams {
                columns: 1,
                rows: 1,
                wrap: true,
                ..ShiftParams::default()
            },
        );

        assert_eq!(all.len(), 9);
        // sorted back into grid order, every slot filled once
        assert_eq!(slots(&all), slots(&cells(&grid)));
        assert_eq!(all[4], cell_for_position(&grid, Position::new(1, 1)));
    }

    #[test]
    fn test_wrap_moves_the_same_entries() {
        let grid = Grid::new(3, 1).unwrap();
        let mut all = cells(&grid);
        shift_cells(
            &grid,
            &mut all,
            ShiftParams {
                columns: -1,
                wrap: true,
                sort: false,
                ..ShiftParams::default()
            },
        );
        // entry order unchanged, slots rotated
        assert_eq!(slots(&all), vec![(2, 0), (0, 0), (1, 0)]);
    }

    #[test]
    fn test_no_wrap_replaces_pushed_off_entries() {
        let grid = Grid::new(3, 1).unwrap();
        let mut all = cells(&grid);
        shift_cells(
            &grid,
            &mut all,
            ShiftParams {
                columns: -1,
                sort: false,
                ..ShiftParams::default()
            },
        );
        // the first entry fell off; its replacement is appended
        assert_eq!(slots(&all), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(all[2], cell_for_position(&grid, Position::new(2, 0)));
    }

    #[test]
    fn test_shift_default_sorts() {
        let grid = Grid::new(4, 2).unwrap();
        let mut all = cells(&grid);
        shift_cells(
            &grid,
            &mut all,
            ShiftParams {
                columns: 2,
                rows: -3,
                ..ShiftParams::default()
            },
        );
        assert_eq!(all.len(), 8);
        assert_eq!(slots(&all), slots(&cells(&grid)));
    }

    #[test]
    fn test_extreme_deltas_wrap_by_remainder() {
        let grid = Grid::new(3, 1).unwrap();

        // i64::MAX and i64::MIN are both 1 (mod 3)
        for columns in [i64::MAX, i64::MIN] {
            let mut all = cells(&grid);
            shift_cells(
                &grid,
                &mut all,
                ShiftParams {
                    columns,
                    wrap: true,
                    sort: false,
                    ..ShiftParams::default()
                },
            );
            assert_eq!(slots(&all), vec![(1, 0), (2, 0), (0, 0)]);
        }
    }

    #[test]
    fn test_extreme_deltas_without_wrap_replace_everything() {
        let grid = Grid::new(3, 2).unwrap();
        let mut all = cells(&grid);
        shift_cells(
            &grid,
            &mut all,
            ShiftParams {
                columns: i64::MIN,
                rows: i64::MAX,
                ..ShiftParams::default()
            },
        );
        assert_eq!(all.len(), 6);
        assert_eq!(slots(&all), slots(&cells(&grid)));
    }

    #[test]
    fn test_shift_params_json_defaults() {
        let params: ShiftParams = serde_json::from_str(r#"{"columns": 2}"#).unwrap();
        assert_eq!(
            params,
            ShiftParams {
                columns: 2,
                ..ShiftParams::default()
            }
        );
        assert!(params.sort);
        assert!(!params.wrap);
    }
}
