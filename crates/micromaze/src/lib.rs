//! Micromaze: a micromouse-style maze explorer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all micromaze sub-crates. For most users, adding `micromaze` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use micromaze::prelude::*;
//!
//! // A 5x1 corridor on a black (fully open) 100x20 px surface.
//! let surface = PixelSurface::blank(100, 20, 3).unwrap();
//! let config = SessionConfig {
//!     width: 5,
//!     height: 1,
//!     start: GridCoord::new(0, 0),
//!     goal: GridCoord::new(4, 0),
//!     ..SessionConfig::default()
//! };
//! let mut session = ExplorationSession::new(config, surface).unwrap();
//! while !session.solve_step().unwrap() {}
//! assert_eq!(session.robot().moves(), 4);
//! assert_eq!(session.distances().get(GridCoord::new(4, 0)), Distance::Reached(0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `micromaze-core` | Coordinates, directions, `SolveError` |
//! | [`space`] | `micromaze-space` | `WallGrid`, pixel and physical geometry, ASCII rendering |
//! | [`sense`] | `micromaze-sense` | Occupancy surfaces, simulated sensors, range mapping |
//! | [`flood`] | `micromaze-flood` | Flood-fill distance fields |
//! | [`engine`] | `micromaze-engine` | Session config, solver, exploration session |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions and the solver error (`micromaze-core`).
pub use micromaze_core as types;

/// Wall grid and geometry (`micromaze-space`).
///
/// [`space::WallGrid`] is the double-resolution wall store;
/// [`space::GridGeometry`] maps cells to surface pixels and
/// [`space::PhysicalGeometry`] maps them to centimetres.
pub use micromaze_space as space;

/// Occupancy surfaces and sensors (`micromaze-sense`).
pub use micromaze_sense as sense;

/// Flood-fill distance fields (`micromaze-flood`).
pub use micromaze_flood as flood;

/// Exploration session and move selection (`micromaze-engine`).
///
/// [`engine::ExplorationSession`] owns one run; [`engine::solver`] holds the
/// pure move-selection functions it uses.
pub use micromaze_engine as engine;

/// Common imports for typical micromaze usage.
///
/// ```rust
/// use micromaze::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use micromaze_core::{Direction, GridCoord, PixelCoord, SolveError, WallCoord};

    // Space
    pub use micromaze_space::{GridGeometry, NodeState, PhysicalGeometry, SpaceError, WallGrid};

    // Sensing
    pub use micromaze_sense::{
        OccupancySurface, PixelSurface, RangeMapper, Reading, SensorConfig, SensorMask,
        SensorReading, SensorSimulator,
    };

    // Flood fill
    pub use micromaze_flood::{Distance, DistanceField, FloodFill};

    // Engine
    pub use micromaze_engine::{
        ConfigError, ExplorationSession, RobotState, SessionConfig, SessionMetrics, StepReport,
    };
}
