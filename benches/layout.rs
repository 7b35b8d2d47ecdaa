//! Benchmarks for grid layout and point queries.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use grid2d::layout::{
    cells, cells_into, closest_cell_position, intersects_cell, shift_cells, ShiftParams,
};
use grid2d::{Grid, Point};

fn padded_grid(columns: u32, rows: u32) -> Grid {
    Grid::new(columns, rows)
        .expect("non-empty grid")
        .with_size(f64::from(columns) * 10.0, f64::from(rows) * 10.0)
        .with_padding(1.0, 1.0, 1.0, 1.0)
}

/// Compare full layout across grid sizes
fn bench_cells(c: &mut Criterion) {
    let sizes = [(10, 10), (100, 100), (1000, 100)];

    let mut group = c.benchmark_group("cells");

    for (columns, rows) in sizes {
        let grid = padded_grid(columns, rows);
        group.throughput(Throughput::Elements(u64::from(columns * rows)));
        group.bench_with_input(
            BenchmarkId::new("cells", format!("{columns}x{rows}")),
            &grid,
            |b, grid| b.iter(|| cells(black_box(grid))),
        );
    }

    group.finish();
}

/// Re-layout into an existing buffer
fn bench_cells_into(c: &mut Criterion) {
    let grid = padded_grid(100, 100);
    let mut out = cells(&grid);

    c.bench_function("cells_into_100x100", |b| {
        b.iter(|| cells_into(black_box(&grid), &mut out))
    });
}

/// Point queries on a large grid
fn bench_queries(c: &mut Criterion) {
    let grid = padded_grid(1000, 100);
    let point = Point::new(7345.0, 512.0);

    c.bench_function("closest_cell_position_1000x100", |b| {
        b.iter(|| closest_cell_position(black_box(&grid), black_box(point)))
    });

    c.bench_function("intersects_cell_1000x100", |b| {
        b.iter(|| intersects_cell(black_box(&grid), black_box(point)))
    });
}

/// Shift a full cell collection without wrapping
fn bench_shift(c: &mut Criterion) {
    let grid = padded_grid(100, 100);
    let all = cells(&grid);
    let params = ShiftParams {
        columns: 3,
        rows: -2,
        ..ShiftParams::default()
    };

    c.bench_function("shift_cells_100x100", |b| {
        b.iter(|| {
            let mut shifted = all.clone();
            shift_cells(&grid, &mut shifted, black_box(params));
            shifted
        })
    });
}

criterion_group!(
    benches,
    bench_cells,
    bench_cells_into,
    bench_queries,
    bench_shift,
);

criterion_main!(benches);
