//! Criterion micro-benchmarks for simulated sensor sweeps.

use criterion::{criterion_group, criterion_main, Criterion};
use micromaze_bench::{classic_profile, PROFILE_CELL_PX};
use micromaze_core::GridCoord;
use micromaze_sense::{SensorConfig, SensorSimulator};
use micromaze_space::{GridGeometry, WallGrid};
use std::hint::black_box;

fn bench_scan_every_cell(c: &mut Criterion) {
    let p = classic_profile(42);
    let side = 16 * PROFILE_CELL_PX;
    let geometry = GridGeometry::new(16, 16, side, side).unwrap();
    let sim = SensorSimulator::new(geometry, SensorConfig::default());
    c.bench_function("scan_all_cells_16x16", |b| {
        b.iter(|| {
            for y in 0..16 {
                for x in 0..16 {
                    black_box(sim.scan(&p.surface, GridCoord::new(x, y)).unwrap());
                }
            }
        });
    });
}

fn bench_sense_into_grid(c: &mut Criterion) {
    let p = classic_profile(42);
    let side = 16 * PROFILE_CELL_PX;
    let geometry = GridGeometry::new(16, 16, side, side).unwrap();
    let sim = SensorSimulator::new(geometry, SensorConfig::default());
    let blank = WallGrid::new(16, 16, p.config.start, p.config.goal).unwrap();
    c.bench_function("sense_all_cells_16x16", |b| {
        b.iter(|| {
            let mut grid = blank.clone();
            for y in 0..16 {
                for x in 0..16 {
                    sim.sense(&p.surface, GridCoord::new(x, y), &mut grid).unwrap();
                }
            }
            black_box(grid.wall_count())
        });
    });
}

criterion_group!(benches, bench_scan_every_cell, bench_sense_into_grid);
criterion_main!(benches);
