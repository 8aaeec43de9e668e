//! Procedural mode: one move per tick, as a render loop would drive it.
//!
//! Each tick calls `solve_step` once and redraws the maze. Stop early by
//! simply not calling it again.
//!
//! Run with:
//!   cargo run --example procedural

use micromaze_core::GridCoord;
use micromaze_engine::{ExplorationSession, SessionConfig};
use micromaze_test_utils::{perfect_maze, render_surface, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS};
use std::thread;
use std::time::Duration;

const WIDTH: u32 = 8;
const HEIGHT: u32 = 6;
const TICK: Duration = Duration::from_millis(150);
const MAX_TICKS: u32 = 500;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let layout = perfect_maze(WIDTH, HEIGHT, 2024);
    let surface = render_surface(&layout, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS);
    let config = SessionConfig {
        width: WIDTH,
        height: HEIGHT,
        start: GridCoord::new(0, 0),
        goal: GridCoord::new(WIDTH as i32 - 1, HEIGHT as i32 - 1),
        max_moves: Some(u64::from(MAX_TICKS)),
        ..SessionConfig::default()
    };
    let mut session = ExplorationSession::new(config, surface)?;

    for tick in 1..=MAX_TICKS {
        let done = session.solve_step()?;
        // Clear screen and home the cursor.
        print!("\x1b[2J\x1b[H");
        println!(
            "tick {tick}  at {}  distance {}",
            session.robot().current(),
            session.distances().get(session.robot().current())
        );
        println!("{}", session.render());
        if done {
            println!("goal reached after {} moves", session.robot().moves());
            break;
        }
        thread::sleep(TICK);
    }
    Ok(())
}
