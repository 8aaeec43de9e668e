//! Manual mode: press Enter to make one move, `q` then Enter to quit.
//!
//! Run with:
//!   cargo run --example manual

use micromaze_core::GridCoord;
use micromaze_engine::{ExplorationSession, SessionConfig};
use micromaze_test_utils::{perfect_maze, render_surface, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let layout = perfect_maze(6, 6, 11);
    let surface = render_surface(&layout, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS);
    let config = SessionConfig {
        width: 6,
        height: 6,
        start: GridCoord::new(0, 5),
        goal: GridCoord::new(3, 2),
        ..SessionConfig::default()
    };
    let mut session = ExplorationSession::new(config, surface)?;
    println!("{}", session.render());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !session.is_solved() {
        print!("[enter] move, [q] quit > ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        if line?.trim() == "q" {
            break;
        }
        let report = session.move_once()?;
        println!(
            "{} -> {} | readings: {} | new walls: {}",
            report.from,
            report.to,
            report
                .reading
                .iter()
                .map(|(d, r)| format!("{d} {r}"))
                .collect::<Vec<_>>()
                .join(", "),
            report.newly_marked.len()
        );
        println!("{}", session.render());
    }
    if session.is_solved() {
        println!("goal reached after {} moves", session.robot().moves());
    }
    Ok(())
}
