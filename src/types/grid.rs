use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::{GridError, Result};

/// Values used for every grid property left unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDefaults {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    /// Pad before the first and after the last column/row
    pub outer_padding: bool,
    /// Lay cells out (and index them) row by row
    pub row_major: bool,
}

/// Only `columns` and `rows` are required for any operation; everything else falls back to this.
pub const GRID_DEFAULTS: GridDefaults = GridDefaults {
    x: 0.0,
    y: 0.0,
    width: 1.0,
    height: 1.0,
    padding_left: 0.0,
    padding_right: 0.0,
    padding_top: 0.0,
    padding_bottom: 0.0,
    outer_padding: true,
    row_major: true,
};

/// Layout description of a uniform grid.
///
/// `columns` and `rows` are mandatory and non-zero. Every other property is
/// optional: an unset property reads as its [`GRID_DEFAULTS`] value, but stays
/// unset on the struct so operations like [`crate::layout::scale`] can tell
/// "explicitly given" apart from "defaulted".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    columns: NonZeroU32,
    rows: NonZeroU32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_padding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_major: Option<bool>,
}

/// A grid with every property resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteGrid {
    pub columns: u32,
    pub rows: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub outer_padding: bool,
    pub row_major: bool,
}

impl Default for CompleteGrid {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
            x: GRID_DEFAULTS.x,
            y: GRID_DEFAULTS.y,
            width: GRID_DEFAULTS.width,
            height: GRID_DEFAULTS.height,
            padding_left: GRID_DEFAULTS.padding_left,
            padding_right: GRID_DEFAULTS.padding_right,
            padding_top: GRID_DEFAULTS.padding_top,
            padding_bottom: GRID_DEFAULTS.padding_bottom,
            outer_padding: GRID_DEFAULTS.outer_padding,
            row_major: GRID_DEFAULTS.row_major,
        }
    }
}

/// Names of the properties of a [`Grid`], for [`Grid::value_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridProperty {
    Columns,
    Rows,
    X,
    Y,
    Width,
    Height,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    OuterPadding,
    RowMajor,
}

/// A resolved property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridValue {
    Count(u32),
    Number(f64),
    Flag(bool),
}

impl GridValue {
    /// Numeric view of the value; counts widen to `f64`, flags have none.
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Count(n) => Some(f64::from(n)),
            Self::Number(n) => Some(n),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(b),
            _ => None,
        }
    }
}

/// A set value counts only if it is a finite number.
fn resolve(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

impl Grid {
    /// Create a grid of `columns` x `rows` unit cells.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidGrid`] if either count is zero.
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        match (NonZeroU32::new(columns), NonZeroU32::new(rows)) {
            (Some(columns), Some(rows)) => Ok(Self {
                columns,
                rows,
                x: None,
                y: None,
                width: None,
                height: None,
                padding_left: None,
                padding_right: None,
                padding_top: None,
                padding_bottom: None,
                outer_padding: None,
                row_major: None,
            }),
            _ => {
                tracing::debug!("Rejecting grid with {} columns x {} rows", columns, rows);
                Err(GridError::InvalidGrid { columns, rows })
            }
        }
    }

    /// Decode a grid from its camelCase JSON form.
    ///
    /// # Errors
    /// Fails if `columns`/`rows` are missing, zero or not integers, or if any
    /// other property has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        let grid = serde_json::from_str(json)?;
        Ok(grid)
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set all four paddings (left, right, top, bottom).
    pub fn with_padding(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.padding_left = Some(left);
        self.padding_right = Some(right);
        self.padding_top = Some(top);
        self.padding_bottom = Some(bottom);
        self
    }

    pub fn with_outer_padding(mut self, outer_padding: bool) -> Self {
        self.outer_padding = Some(outer_padding);
        self
    }

    pub fn with_row_major(mut self, row_major: bool) -> Self {
        self.row_major = Some(row_major);
        self
    }

    pub fn columns(&self) -> u32 {
        self.columns.get()
    }

    pub fn rows(&self) -> u32 {
        self.rows.get()
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        (self.columns() as usize).saturating_mul(self.rows() as usize)
    }

    pub fn x(&self) -> f64 {
        resolve(self.x, GRID_DEFAULTS.x)
    }

    pub fn y(&self) -> f64 {
        resolve(self.y, GRID_DEFAULTS.y)
    }

    pub fn width(&self) -> f64 {
        resolve(self.width, GRID_DEFAULTS.width)
    }

    pub fn height(&self) -> f64 {
        resolve(self.height, GRID_DEFAULTS.height)
    }

    pub fn padding_left(&self) -> f64 {
        resolve(self.padding_left, GRID_DEFAULTS.padding_left)
    }

    pub fn padding_right(&self) -> f64 {
        resolve(self.padding_right, GRID_DEFAULTS.padding_right)
    }

    pub fn padding_top(&self) -> f64 {
        resolve(self.padding_top, GRID_DEFAULTS.padding_top)
    }

    pub fn padding_bottom(&self) -> f64 {
        resolve(self.padding_bottom, GRID_DEFAULTS.padding_bottom)
    }

    pub fn outer_padding(&self) -> bool {
        self.outer_padding.unwrap_or(GRID_DEFAULTS.outer_padding)
    }

    pub fn row_major(&self) -> bool {
        self.row_major.unwrap_or(GRID_DEFAULTS.row_major)
    }

    /// Resolved value of a single property, without materializing the whole grid
    pub fn value_of(&self, property: GridProperty) -> GridValue {
        match property {
            GridProperty::Columns => GridValue::Count(self.columns()),
            GridProperty::Rows => GridValue::Count(self.rows()),
            GridProperty::X => GridValue::Number(self.x()),
            GridProperty::Y => GridValue::Number(self.y()),
            GridProperty::Width => GridValue::Number(self.width()),
            GridProperty::Height => GridValue::Number(self.height()),
            GridProperty::PaddingLeft => GridValue::Number(self.padding_left()),
            GridProperty::PaddingRight => GridValue::Number(self.padding_right()),
            GridProperty::PaddingTop => GridValue::Number(self.padding_top()),
            GridProperty::PaddingBottom => GridValue::Number(self.padding_bottom()),
            GridProperty::OuterPadding => GridValue::Flag(self.outer_padding()),
            GridProperty::RowMajor => GridValue::Flag(self.row_major()),
        }
    }

    /// Fill in every property, taking defaults only where this grid has none.
    pub fn normalize(&self) -> CompleteGrid {
        let mut complete = CompleteGrid::default();
        self.normalize_into(&mut complete);
        complete
    }

    /// Like [`Grid::normalize`], writing into caller-owned storage.
    pub fn normalize_into(&self, out: &mut CompleteGrid) {
        *out = CompleteGrid {
            columns: self.columns(),
            rows: self.rows(),
            x: self.x(),
            y: self.y(),
            width: self.width(),
            height: self.height(),
            padding_left: self.padding_left(),
            padding_right: self.padding_right(),
            padding_top: self.padding_top(),
            padding_bottom: self.padding_bottom(),
            outer_padding: self.outer_padding(),
            row_major: self.row_major(),
        };
    }
}

impl TryFrom<CompleteGrid> for Grid {
    type Error = GridError;

    /// Every property of the result is explicitly set.
    fn try_from(complete: CompleteGrid) -> Result<Self> {
        let mut grid = Grid::new(complete.columns, complete.rows)?
            .with_origin(complete.x, complete.y)
            .with_size(complete.width, complete.height)
            .with_padding(
                complete.padding_left,
                complete.padding_right,
                complete.padding_top,
                complete.padding_bottom,
            );
        grid.outer_padding = Some(complete.outer_padding);
        grid.row_major = Some(complete.row_major);
        Ok(grid)
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
    fn test_new_rejects_empty_grid() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(GridError::InvalidGrid {
                columns: 0,
                rows: 3
            })
        ));
        assert!(Grid::new(4, 0).is_err());
        assert!(Grid::new(4, 3).is_ok());
    }

    #[test]
    fn test_defaults_fill_gaps_only() {
        let grid = Grid::new(4, 3).unwrap().with_width(10.0).with_row_major(false);
        let complete = grid.normalize();

        assert_eq!(complete.columns, 4);
        assert_eq!(complete.rows, 3);
        assert_eq!(complete.width, 10.0);
        assert!(!complete.row_major);
        assert_eq!(complete.x, 0.0);
        assert_eq!(complete.height, 1.0);
        assert!(complete.outer_padding);
        assert_eq!(complete.padding_bottom, 0.0);
    }

    #[test]
    fn test_normalize_into_overwrites_target() {
        let grid = Grid::new(2, 2).unwrap().with_origin(3.0, 4.0);
        let mut out = CompleteGrid {
            width: 99.0,
            outer_padding: false,
            ..CompleteGrid::default()
        };
        grid.normalize_into(&mut out);
        assert_eq!(out.width, 1.0);
        assert!(out.outer_padding);
        assert_eq!((out.x, out.y), (3.0, 4.0));
    }

    #[test]
    fn test_value_of_ignores_non_finite() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.x = Some(f64::NAN);
        grid.width = Some(f64::INFINITY);
        grid.padding_left = Some(2.0);

        assert_eq!(grid.value_of(GridProperty::X), GridValue::Number(0.0));
        assert_eq!(grid.value_of(GridProperty::Width), GridValue::Number(1.0));
        assert_eq!(grid.value_of(GridProperty::PaddingLeft), GridValue::Number(2.0));
        assert_eq!(grid.value_of(GridProperty::Columns), GridValue::Count(4));
        assert_eq!(grid.value_of(GridProperty::RowMajor), GridValue::Flag(true));
        assert_eq!(grid.value_of(GridProperty::Rows).as_number(), Some(3.0));
        assert_eq!(grid.value_of(GridProperty::OuterPadding).as_flag(), Some(true));
    }

    #[test]
    fn test_from_json_camel_case() {
        let grid = Grid::from_json(
            r#"{"columns": 4, "rows": 3, "paddingLeft": 2, "outerPadding": false}"#,
        )
        .unwrap();
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.padding_left, Some(2.0));
        assert_eq!(grid.outer_padding, Some(false));
        assert_eq!(grid.padding_right, None);
    }

    #[test]
    fn test_from_json_requires_columns_and_rows() {
        assert!(matches!(
            Grid::from_json(r#"{"rows": 3}"#),
            Err(GridError::Json(_))
        ));
        assert!(Grid::from_json(r#"{"columns": 0, "rows": 3}"#).is_err());
        assert!(Grid::from_json(r#"{"columns": "four", "rows": 3}"#).is_err());
    }

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let grid = Grid::new(4, 3).unwrap().with_width(2.0);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json, serde_json::json!({"columns": 4, "rows": 3, "width": 2.0}));
    }

    #[test]
    fn test_complete_grid_round_trips_to_grid() {
        let complete = Grid::new(5, 2).unwrap().with_size(10.0, 4.0).normalize();
        let grid = Grid::try_from(complete).unwrap();
        assert_eq!(grid.padding_top, Some(0.0));
        assert_eq!(grid.normalize(), complete);
    }
}
