//! Integration test: flood fill agrees with an independent reference BFS.
//!
//! Layouts come from the seeded generators in `micromaze-test-utils`. The
//! reference oracle works on the layout's wall set directly, so agreement
//! checks both the flood fill and the wall-grid connectivity it reads.

use micromaze_core::GridCoord;
use micromaze_flood::{Distance, FloodFill};
use micromaze_test_utils::{perfect_maze, random_walls, reference_distances, MazeLayout};
use proptest::prelude::*;

fn goal_and_start(w: u32, h: u32, gx: u32, gy: u32) -> (GridCoord, GridCoord) {
    let goal = GridCoord::new((gx % w) as i32, (gy % h) as i32);
    let start = if goal == GridCoord::new(0, 0) {
        GridCoord::new(w as i32 - 1, h as i32 - 1)
    } else {
        GridCoord::new(0, 0)
    };
    (goal, start)
}

fn check_against_reference(layout: &MazeLayout, goal: GridCoord, start: GridCoord) {
    let grid = layout.to_wall_grid(start, goal).unwrap();
    let field = FloodFill::compute(&grid, goal);
    let reference = reference_distances(layout, goal);
    let got: Vec<Option<u32>> = field.as_slice().iter().map(|d| d.hops()).collect();
    assert_eq!(got, reference);
}

// ── Fixed layouts ────────────────────────────────────────────────────

#[test]
fn fixture_maze_matches_reference() {
    let layout = MazeLayout::seven_by_five();
    check_against_reference(&layout, GridCoord::new(3, 0), GridCoord::new(3, 4));
}

#[test]
fn fixture_maze_start_distance() {
    let layout = MazeLayout::seven_by_five();
    let grid = layout
        .to_wall_grid(GridCoord::new(3, 4), GridCoord::new(3, 0))
        .unwrap();
    let field = FloodFill::compute(&grid, GridCoord::new(3, 0));
    // Two equal routes: east via (6,3) and (6,0), or west via (0,4) and
    // (3,2).
    assert_eq!(field.get(GridCoord::new(3, 4)), Distance::Reached(12));
}

#[test]
fn perfect_maze_reaches_every_cell() {
    let layout = perfect_maze(12, 9, 2024);
    let grid = layout
        .to_wall_grid(GridCoord::new(0, 0), GridCoord::new(11, 8))
        .unwrap();
    let field = FloodFill::compute(&grid, GridCoord::new(11, 8));
    assert_eq!(field.reached_count(), 12 * 9);
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn perfect_mazes_match_reference(
        w in 2u32..12,
        h in 2u32..12,
        gx in 0u32..64,
        gy in 0u32..64,
        seed in any::<u64>(),
    ) {
        let (goal, start) = goal_and_start(w, h, gx, gy);
        check_against_reference(&perfect_maze(w, h, seed), goal, start);
    }

    #[test]
    fn random_walls_match_reference(
        w in 2u32..10,
        h in 2u32..10,
        gx in 0u32..64,
        gy in 0u32..64,
        density in 0.0f64..0.8,
        seed in any::<u64>(),
    ) {
        let (goal, start) = goal_and_start(w, h, gx, gy);
        check_against_reference(&random_walls(w, h, density, seed), goal, start);
    }

    #[test]
    fn goal_is_always_zero(
        w in 2u32..10,
        h in 2u32..10,
        gx in 0u32..64,
        gy in 0u32..64,
        seed in any::<u64>(),
    ) {
        let (goal, start) = goal_and_start(w, h, gx, gy);
        let grid = random_walls(w, h, 0.5, seed).to_wall_grid(start, goal).unwrap();
        prop_assert_eq!(FloodFill::compute(&grid, goal).get(goal), Distance::Reached(0));
    }

    #[test]
    fn adding_walls_never_shortens_paths(
        w in 2u32..9,
        h in 2u32..9,
        gx in 0u32..64,
        gy in 0u32..64,
        seed in any::<u64>(),
    ) {
        let (goal, start) = goal_and_start(w, h, gx, gy);
        let sparse = random_walls(w, h, 0.2, seed);
        let mut grid = sparse.to_wall_grid(start, goal).unwrap();
        let before = FloodFill::compute(&grid, goal);
        for segment in random_walls(w, h, 0.3, seed ^ 0x5eed).walls() {
            grid.mark_wall_segment(segment).unwrap();
        }
        let after = FloodFill::compute(&grid, goal);
        for (a, b) in before.as_slice().iter().zip(after.as_slice()) {
            prop_assert!(a <= b);
        }
    }
}
