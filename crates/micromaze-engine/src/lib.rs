//! Exploration session for micromaze.
//!
//! An [`ExplorationSession`] owns everything one run needs: the wall grid
//! being discovered, the distance field derived from it, the robot's
//! position and history, and the surface the simulated sensors read. Each
//! move senses, recomputes the flood fill, and steps toward the goal.
//!
//! ```
//! use micromaze_core::GridCoord;
//! use micromaze_engine::{ExplorationSession, SessionConfig};
//! use micromaze_sense::PixelSurface;
//!
//! let config = SessionConfig {
//!     width: 4,
//!     height: 1,
//!     start: GridCoord::new(0, 0),
//!     goal: GridCoord::new(3, 0),
//!     ..SessionConfig::default()
//! };
//! let surface = PixelSurface::blank(80, 20, 3).unwrap();
//! let mut session = ExplorationSession::new(config, surface).unwrap();
//! assert_eq!(session.solve().unwrap(), 3);
//! assert!(session.is_solved());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod robot;
pub mod session;
pub mod solver;

pub use config::{ConfigError, SessionConfig};
pub use metrics::SessionMetrics;
pub use robot::RobotState;
pub use session::{ExplorationSession, StepReport};
