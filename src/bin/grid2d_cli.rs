//! CLI tool for grid2d - lays out a grid described in JSON and prints the result
//!
//! Usage:
//!   grid2d_cli <grid.json>                          # All cells as JSON
//!   grid2d_cli <grid.json> closest 0.5 0.5          # Nearest cell to a point
//!   grid2d_cli <grid.json> intersects 0.5 0.5       # Cell containing a point, or null
//!   grid2d_cli <grid.json> range 0 0 2 2            # Cells between two corners
//!   grid2d_cli <grid.json> shift 1 0 --wrap         # Cells after shifting
//!   grid2d_cli <grid.json> bounds | normalize
//!   grid2d_cli <grid.json> ... -o out.json          # Write to a file instead
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use grid2d::json::{load_grid, run, Query};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: grid2d_cli <grid.json> [cells|normalize|bounds|closest X Y|intersects X Y|range C1 R1 C2 R2|shift COLUMNS ROWS [--wrap] [--no-sort]] [-o output.json]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let output_path = match args.iter().position(|a| a == "-o") {
        Some(i) if i + 1 < args.len() => {
            let path = args.remove(i + 1);
            args.remove(i);
            Some(path)
        }
        Some(_) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        None => None,
    };

    if args.is_empty() {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let input_path = args.remove(0);

    // Read grid
    let grid = match load_grid(&input_path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            process::exit(1);
        }
    };
    tracing::debug!("Loaded {}x{} grid from {}", grid.columns(), grid.rows(), input_path);

    let query = match Query::from_args(&args) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("{}\n{USAGE}", e);
            process::exit(1);
        }
    };

    let json = match run(&grid, &query) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error running {:?}: {}", query, e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
