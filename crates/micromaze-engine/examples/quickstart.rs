//! Quickstart: explore a generated maze in one call.
//!
//! Demonstrates:
//!   1. Generating a maze and painting it onto a pixel surface
//!   2. Building a SessionConfig and ExplorationSession
//!   3. Solving in one go and printing what the robot learned
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use micromaze_core::GridCoord;
use micromaze_engine::{ExplorationSession, SessionConfig};
use micromaze_test_utils::{perfect_maze, render_surface, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS};

const WIDTH: u32 = 10;
const HEIGHT: u32 = 8;
const SEED: u64 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ─── Maze ───────────────────────────────────────────────────

    let layout = perfect_maze(WIDTH, HEIGHT, SEED);
    let surface = render_surface(&layout, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS);

    // ─── Session ────────────────────────────────────────────────

    let config = SessionConfig {
        width: WIDTH,
        height: HEIGHT,
        start: GridCoord::new(0, HEIGHT as i32 - 1),
        goal: GridCoord::new(WIDTH as i32 / 2, HEIGHT as i32 / 2),
        ..SessionConfig::default()
    };
    let mut session = ExplorationSession::new(config, surface)?;

    // ─── Solve ──────────────────────────────────────────────────

    let moves = session.solve()?;
    let m = session.metrics();
    println!("solved in {moves} moves");
    println!(
        "  walls discovered: {} of {}",
        m.walls_discovered,
        layout.wall_count()
    );
    println!("  flood fills:      {}", m.flood_fills);
    println!("  revisits:         {} ({:.0}%)", m.revisits, m.revisit_ratio() * 100.0);
    println!();
    println!("{}", session.render());
    println!("distances:");
    println!("{}", session.distances());
    Ok(())
}
