//! Integration test: sensing every cell of a rendered maze rebuilds its walls.
//!
//! A layout is painted onto a pixel surface, then the simulated sensors are
//! swept over every cell of a blank wall grid. Afterwards the grid must hold
//! exactly the layout's walls: nothing missed, nothing invented.

use micromaze_core::{Direction, GridCoord, WallCoord};
use micromaze_sense::{Reading, SensorConfig, SensorMask, SensorSimulator};
use micromaze_space::{GridGeometry, NodeState, WallGrid};
use micromaze_test_utils::{
    perfect_maze, random_walls, render_surface, MazeLayout, DEFAULT_CELL_PX,
    DEFAULT_HALF_THICKNESS,
};
use std::collections::BTreeSet;

fn simulator_for(layout: &MazeLayout, config: SensorConfig) -> SensorSimulator {
    let geometry = GridGeometry::new(
        layout.width(),
        layout.height(),
        layout.width() * DEFAULT_CELL_PX,
        layout.height() * DEFAULT_CELL_PX,
    )
    .unwrap();
    SensorSimulator::new(geometry, config)
}

fn blank_grid(layout: &MazeLayout) -> WallGrid {
    WallGrid::new(
        layout.width(),
        layout.height(),
        GridCoord::new(0, 0),
        GridCoord::new(layout.width() as i32 - 1, layout.height() as i32 - 1),
    )
    .unwrap()
}

fn interior_walls(grid: &WallGrid) -> BTreeSet<WallCoord> {
    let (ww, wh) = (grid.wall_width() as i32, grid.wall_height() as i32);
    grid.segments()
        .filter(|&(c, s)| {
            s == NodeState::Wall && c.x > 0 && c.y > 0 && c.x < ww - 1 && c.y < wh - 1
        })
        .map(|(c, _)| c)
        .collect()
}

fn sweep(layout: &MazeLayout) -> WallGrid {
    let surface = render_surface(layout, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS);
    let sim = simulator_for(layout, SensorConfig::default());
    let mut grid = blank_grid(layout);
    for y in 0..layout.height() as i32 {
        for x in 0..layout.width() as i32 {
            sim.sense(&surface, GridCoord::new(x, y), &mut grid).unwrap();
        }
    }
    grid
}

// ── Reconstruction ───────────────────────────────────────────────────

#[test]
fn perfect_mazes_are_rebuilt_exactly() {
    for seed in 0..8 {
        let layout = perfect_maze(8, 6, seed);
        let grid = sweep(&layout);
        let expected: BTreeSet<WallCoord> = layout.walls().collect();
        assert_eq!(interior_walls(&grid), expected, "seed {seed}");
    }
}

#[test]
fn sparse_random_walls_are_rebuilt_exactly() {
    for seed in 0..8 {
        let layout = random_walls(7, 5, 0.3, seed);
        let grid = sweep(&layout);
        let expected: BTreeSet<WallCoord> = layout.walls().collect();
        assert_eq!(interior_walls(&grid), expected, "seed {seed}");
    }
}

#[test]
fn fixture_maze_is_rebuilt_exactly() {
    let layout = MazeLayout::seven_by_five();
    let grid = sweep(&layout);
    assert_eq!(grid.wall_count(), blank_grid(&layout).wall_count() + layout.wall_count());
}

// ── Idempotence ──────────────────────────────────────────────────────

#[test]
fn second_sweep_marks_nothing_new() {
    let layout = perfect_maze(6, 6, 99);
    let surface = render_surface(&layout, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS);
    let sim = simulator_for(&layout, SensorConfig::default());
    let mut grid = sweep(&layout);
    let before = grid.clone();
    for y in 0..6 {
        for x in 0..6 {
            let out = sim.sense(&surface, GridCoord::new(x, y), &mut grid).unwrap();
            assert!(out.newly_marked.is_empty());
        }
    }
    assert_eq!(grid, before);
}

// ── Masked sensors ───────────────────────────────────────────────────

#[test]
fn disabled_sensors_report_nothing() {
    let layout = MazeLayout::closed(3, 3);
    let surface = render_surface(&layout, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS);
    let config = SensorConfig {
        mask: SensorMask::all()
            .with(Direction::Left, false)
            .with(Direction::Up, false),
        ..SensorConfig::default()
    };
    let sim = simulator_for(&layout, config);
    let mut grid = blank_grid(&layout);
    let out = sim.sense(&surface, GridCoord::new(1, 1), &mut grid).unwrap();
    assert_eq!(out.reading.get(Direction::Left), Reading::NoDetection);
    assert_eq!(out.reading.get(Direction::Up), Reading::NoDetection);
    assert!(out.reading.get(Direction::Right).offset().is_some());
    assert_eq!(out.newly_marked.len(), 2);
    assert!(grid.is_passable(GridCoord::new(1, 1), Direction::Left));
    assert!(!grid.is_passable(GridCoord::new(1, 1), Direction::Down));
}
