//! Criterion micro-benchmarks for flood-fill recomputation.

use criterion::{criterion_group, criterion_main, Criterion};
use micromaze_bench::{classic_profile, large_profile};
use micromaze_core::GridCoord;
use micromaze_flood::FloodFill;
use micromaze_space::WallGrid;
use std::hint::black_box;

fn bench_flood_open_16(c: &mut Criterion) {
    let grid = WallGrid::new(16, 16, GridCoord::new(0, 15), GridCoord::new(7, 7)).unwrap();
    c.bench_function("flood_open_16x16", |b| {
        b.iter(|| black_box(FloodFill::compute(&grid, GridCoord::new(7, 7))));
    });
}

fn bench_flood_known_16(c: &mut Criterion) {
    let p = classic_profile(42);
    let grid = p.layout.to_wall_grid(p.config.start, p.config.goal).unwrap();
    c.bench_function("flood_known_16x16", |b| {
        b.iter(|| black_box(FloodFill::compute(&grid, p.config.goal)));
    });
}

fn bench_flood_known_64(c: &mut Criterion) {
    let p = large_profile(42);
    let grid = p.layout.to_wall_grid(p.config.start, p.config.goal).unwrap();
    c.bench_function("flood_known_64x64", |b| {
        b.iter(|| black_box(FloodFill::compute(&grid, p.config.goal)));
    });
}

criterion_group!(
    benches,
    bench_flood_open_16,
    bench_flood_known_16,
    bench_flood_known_64
);
criterion_main!(benches);
