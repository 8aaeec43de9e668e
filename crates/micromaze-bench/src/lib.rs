//! Benchmark profiles for the micromaze explorer.
//!
//! Each profile pairs a seeded perfect maze, painted onto a pixel surface,
//! with a [`SessionConfig`] that starts in one corner:
//!
//! - [`classic_profile`]: 16x16, the competition size, goal at the center
//! - [`large_profile`]: 64x64 for stress testing the per-move flood fill

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use micromaze_core::GridCoord;
use micromaze_engine::SessionConfig;
use micromaze_sense::PixelSurface;
use micromaze_test_utils::{perfect_maze, render_surface, MazeLayout, DEFAULT_HALF_THICKNESS};

/// Cell size used by the profiles. Smaller than the fixture default to keep
/// large surfaces in cache.
pub const PROFILE_CELL_PX: u32 = 12;

/// A ready-to-run benchmark scenario.
pub struct Profile {
    /// The true maze.
    pub layout: MazeLayout,
    /// The maze painted at [`PROFILE_CELL_PX`] per cell.
    pub surface: PixelSurface,
    /// Session parameters.
    pub config: SessionConfig,
}

fn profile(size: u32, seed: u64) -> Profile {
    let layout = perfect_maze(size, size, seed);
    let surface = render_surface(&layout, PROFILE_CELL_PX, DEFAULT_HALF_THICKNESS);
    let half = size as i32 / 2;
    let config = SessionConfig {
        width: size,
        height: size,
        start: GridCoord::new(0, size as i32 - 1),
        goal: GridCoord::new(half - 1, half - 1),
        ..SessionConfig::default()
    };
    Profile {
        layout,
        surface,
        config,
    }
}

/// 16x16 maze, start bottom-left, goal at `(7, 7)`.
pub fn classic_profile(seed: u64) -> Profile {
    profile(16, seed)
}

/// 64x64 maze, start bottom-left, goal at `(31, 31)`.
pub fn large_profile(seed: u64) -> Profile {
    profile(64, seed)
}
