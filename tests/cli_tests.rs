//! End-to-end tests for the `grid2d_cli` binary

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use grid2d::{Cell, CompleteGrid, Rect};

const GRID_JSON: &str = r#"{"columns": 4, "rows": 3, "width": 400, "height": 300, "rowMajor": false}"#;

/// Write `json` to a per-test file in the temp dir
fn grid_file(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("grid2d_cli_{}_{name}.json", std::process::id()));
    fs::write(&path, json).expect("Failed to write grid file");
    path
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grid2d_cli"))
        .args(args)
        .output()
        .expect("Failed to run grid2d_cli")
}

fn stdout_json<T: serde::de::DeserializeOwned>(output: &Output) -> T {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_default_query_lists_cells() {
    let path = grid_file("cells", GRID_JSON);
    let cells: Vec<Cell> = stdout_json(&run_cli(&[path.to_str().unwrap()]));

    assert_eq!(cells.len(), 12);
    // column major: second cell is below the first
    assert_eq!((cells[1].column, cells[1].row), (0, 1));
    assert_eq!(cells[1].y, 100.0);
    fs::remove_file(path).ok();
}

#[test]
fn test_closest_and_intersects() {
    let path = grid_file("closest", GRID_JSON);
    let path = path.to_str().unwrap();

    let cell: Cell = stdout_json(&run_cli(&[path, "closest", "-50", "250"]));
    assert_eq!((cell.column, cell.row), (0, 2));

    let hit: Option<Cell> = stdout_json(&run_cli(&[path, "intersects", "150", "50"]));
    assert_eq!(hit.map(|c| (c.column, c.row)), Some((1, 0)));

    let miss: Option<Cell> = stdout_json(&run_cli(&[path, "intersects", "500", "50"]));
    assert_eq!(miss, None);
    fs::remove_file(path).ok();
}

#[test]
fn test_bounds_normalize_and_range() {
    let path = grid_file("bounds", GRID_JSON);
    let path = path.to_str().unwrap();

    let rect: Rect = stdout_json(&run_cli(&[path, "bounds"]));
    assert_eq!(rect, Rect::new(0.0, 0.0, 400.0, 300.0));

    let complete: CompleteGrid = stdout_json(&run_cli(&[path, "normalize"]));
    assert!(!complete.row_major);
    assert_eq!(complete.padding_left, 0.0);

    let range: Vec<Cell> = stdout_json(&run_cli(&[path, "range", "2", "1", "1", "2"]));
    assert_eq!(range.len(), 4);
    fs::remove_file(path).ok();
}

#[test]
fn test_output_file() {
    let path = grid_file("output", GRID_JSON);
    let out = std::env::temp_dir().join(format!("grid2d_cli_{}_out.json", std::process::id()));

    let output = run_cli(&[
        path.to_str().unwrap(),
        "shift",
        "1",
        "0",
        "--wrap",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let cells: Vec<Cell> = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(cells.len(), 12);
    fs::remove_file(path).ok();
    fs::remove_file(out).ok();
}

#[test]
fn test_errors_exit_nonzero() {
    assert!(!run_cli(&[]).status.success());
    assert!(!run_cli(&["/no/such/grid.json"]).status.success());

    // an output file but no input grid
    let output = run_cli(&["-o", "unused.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));

    let empty = grid_file("empty", r#"{"columns": 0, "rows": 3}"#);
    assert!(!run_cli(&[empty.to_str().unwrap()]).status.success());

    let valid = grid_file("bad_query", GRID_JSON);
    let output = run_cli(&[valid.to_str().unwrap(), "closest", "left", "up"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));

    fs::remove_file(empty).ok();
    fs::remove_file(valid).ok();
}
