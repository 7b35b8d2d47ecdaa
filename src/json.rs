//! JSON front end shared by the CLI and the WASM bindings.
//!
//! Grids come in as camelCase JSON; results go out as JSON strings.

use std::fs;
use std::path::Path;

use crate::error::{GridError, Result};
use crate::layout::{
    bounds, cells, cells_range, closest_cell, intersects_cell, shift_cells, ShiftParams,
};
use crate::types::{Grid, Point, Position};

/// A question to ask of a grid
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Every cell, in enumeration order
    Cells,
    /// The grid with all defaults filled in
    Normalize,
    /// Bounds of the cell area
    Bounds,
    Closest(Point),
    /// Cell containing the point, or `null`
    Intersects(Point),
    Range(Position, Position),
    /// All cells after shifting
    Shift(ShiftParams),
}

fn number(word: &str) -> Result<f64> {
    word.parse()
        .map_err(|_| GridError::InvalidArgument(format!("expected a number, got {word:?}")))
}

fn integer(word: &str) -> Result<i64> {
    word.parse()
        .map_err(|_| GridError::InvalidArgument(format!("expected an integer, got {word:?}")))
}

impl Query {
    /// Parse a query from command-line words, e.g. `closest 0.5 0.5`.
    /// No words means [`Query::Cells`].
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] for unknown queries or
    /// malformed numbers.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let words: Vec<&str> = args.iter().map(String::as_str).collect();

        match words.as_slice() {
            [] | ["cells"] => Ok(Self::Cells),
            ["normalize"] => Ok(Self::Normalize),
            ["bounds"] => Ok(Self::Bounds),
            ["closest", x, y] => Ok(Self::Closest(Point::new(number(x)?, number(y)?))),
            ["intersects", x, y] => Ok(Self::Intersects(Point::new(number(x)?, number(y)?))),
            ["range", c1, r1, c2, r2] => Ok(Self::Range(
                Position::new(integer(c1)?, integer(r1)?),
                Position::new(integer(c2)?, integer(r2)?),
            )),
            ["shift", columns, rows, flags @ ..] => {
                let mut params = ShiftParams {
                    columns: integer(columns)?,
                    rows: integer(rows)?,
                    ..ShiftParams::default()
                };
                for flag in flags {
                    match *flag {
                        "--wrap" => params.wrap = true,
                        "--no-sort" => params.sort = false,
                        other => {
                            return Err(GridError::InvalidArgument(format!(
                                "unknown shift flag {other:?}"
                            )))
                        }
                    }
                }
                Ok(Self::Shift(params))
            }
            _ => Err(GridError::InvalidArgument(format!(
                "unrecognized query: {}",
                words.join(" ")
            ))),
        }
    }
}

/// Answer `query` for `grid` as a JSON string.
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn run(grid: &Grid, query: &Query) -> Result<String> {
    let json = match query {
        Query::Cells => serde_json::to_string(&cells(grid))?,
        Query::Normalize => serde_json::to_string(&grid.normalize())?,
        Query::Bounds => serde_json::to_string(&bounds(grid))?,
        Query::Closest(point) => serde_json::to_string(&closest_cell(grid, *point))?,
        Query::Intersects(point) => serde_json::to_string(&intersects_cell(grid, *point))?,
        Query::Range(start, stop) => serde_json::to_string(&cells_range(grid, *start, *stop))?,
        Query::Shift(params) => {
            let mut all = cells(grid);
            shift_cells(grid, &mut all, *params);
            serde_json::to_string(&all)?
        }
    };
    Ok(json)
}

/// Decode `grid_json` and answer `query` for it.
///
/// # Errors
/// Returns an error if the grid JSON is invalid.
pub fn run_json(grid_json: &str, query: &Query) -> Result<String> {
    let grid = Grid::from_json(grid_json)?;
    run(&grid, query)
}

/// Read a grid from a JSON file.
///
/// # Errors
/// Returns [`GridError::Io`] if the file cannot be read and
/// [`GridError::Json`] if it does not hold a valid grid.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let data = fs::read_to_string(path)?;
    Grid::from_json(&data)
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
    use crate::types::{Cell, CompleteGrid, Rect};

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(Query::from_args(&[]).unwrap(), Query::Cells);
        assert_eq!(Query::from_args(&words("bounds")).unwrap(), Query::Bounds);
        assert_eq!(
            Query::from_args(&words("closest 0.5 1")).unwrap(),
            Query::Closest(Point::new(0.5, 1.0))
        );
        assert_eq!(
            Query::from_args(&words("range 3 1 0 0")).unwrap(),
            Query::Range(Position::new(3, 1), Position::new(0, 0))
        );
        assert_eq!(
            Query::from_args(&words("shift -1 2 --wrap")).unwrap(),
            Query::Shift(ShiftParams {
                columns: -1,
                rows: 2,
                wrap: true,
                sort: true,
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_queries() {
        assert!(matches!(
            Query::from_args(&words("closest x 1")),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(Query::from_args(&words("range 1 2")).is_err());
        assert!(Query::from_args(&words("shift 1 1 --sideways")).is_err());
        assert!(Query::from_args(&words("teleport")).is_err());
    }

    #[test]
    fn test_run_cells() {
        let json = run_json(r#"{"columns": 2, "rows": 2, "width": 4}"#, &Query::Cells).unwrap();
        let cells: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(cells.len(), 4);
        assert_eq!((cells[1].x, cells[1].width), (2.0, 2.0));
    }

    #[test]
    fn test_run_normalize_and_bounds() {
        let grid = r#"{"columns": 2, "rows": 2, "paddingLeft": 1}"#;

        let complete: CompleteGrid =
            serde_json::from_str(&run_json(grid, &Query::Normalize).unwrap()).unwrap();
        assert_eq!(complete.padding_left, 1.0);
        assert!(complete.row_major);

        let rect: Rect = serde_json::from_str(&run_json(grid, &Query::Bounds).unwrap()).unwrap();
        assert_eq!(rect, Rect::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_run_intersects_miss_is_null() {
        let json = run_json(
            r#"{"columns": 11, "rows": 5}"#,
            &Query::Intersects(Point::new(2.0, 2.0)),
        )
        .unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_load_grid_missing_file() {
        assert!(matches!(
            load_grid("no/such/grid.json"),
            Err(GridError::Io(_))
        ));
    }

    #[test]
    fn test_run_rejects_invalid_grid() {
        assert!(matches!(
            run_json(r#"{"columns": 0, "rows": 2}"#, &Query::Cells),
            Err(GridError::Json(_))
        ));
    }
}
