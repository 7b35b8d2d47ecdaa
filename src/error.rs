//! Structured error types for grid2d.
//!
//! Geometry itself is total; errors only arise where a grid is built or
//! decoded from outside input.

/// All errors that can occur while building or decoding grids.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A grid needs at least one column and one row.
    #[error("Invalid grid: {columns} columns x {rows} rows")]
    InvalidGrid { columns: u32, rows: u32 },

    /// Grid or query JSON could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A query argument matched none of the accepted shapes.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

