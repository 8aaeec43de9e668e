//! Session configuration and validation.

use micromaze_core::GridCoord;
use micromaze_sense::{OccupancySurface, SenseError, SensorConfig};
use micromaze_space::{GridGeometry, SpaceError, WallGrid};
use std::error::Error;
use std::fmt;

// ── ConfigError ──────────────────────────────────────────────────

/// Errors detected while building an [`ExplorationSession`].
///
/// [`ExplorationSession`]: crate::ExplorationSession
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Maze dimensions, start, or goal are invalid.
    Space(SpaceError),
    /// The surface has fewer pixels than the maze has cells along an axis.
    SurfaceTooSmall {
        /// Maze size in cells.
        cells: (u32, u32),
        /// Surface size in pixels.
        surface: (u32, u32),
    },
    /// `max_moves` is `Some(0)`.
    ZeroMoveBudget,
    /// Sensing the start cell failed.
    InitialSense(SenseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "maze: {e}"),
            Self::SurfaceTooSmall { cells, surface } => write!(
                f,
                "surface {}x{} px is too small for a {}x{} maze",
                surface.0, surface.1, cells.0, cells.1
            ),
            Self::ZeroMoveBudget => write!(f, "max_moves must be at least 1 when set"),
            Self::InitialSense(e) => write!(f, "initial sense failed: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::InitialSense(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SessionConfig ────────────────────────────────────────────────

/// Everything needed to start an exploration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maze width in cells. Default: 16.
    pub width: u32,
    /// Maze height in cells. Default: 16.
    pub height: u32,
    /// Starting cell. Default: the bottom-left corner `(0, 15)`.
    pub start: GridCoord,
    /// Goal cell. Default: `(7, 7)`, one of the four center cells.
    pub goal: GridCoord,
    /// Sensor mask and calibration.
    pub sensor: SensorConfig,
    /// Optional cap on the number of moves; `None` means unlimited.
    pub max_moves: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            start: GridCoord::new(0, 15),
            goal: GridCoord::new(7, 7),
            sensor: SensorConfig::default(),
            max_moves: None,
        }
    }
}

impl SessionConfig {
    /// Check the configuration without touching a surface.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Non-empty maze that fits the wall-grid coordinate range.
        if self.width == 0 || self.height == 0 {
            return Err(SpaceError::EmptyGrid.into());
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > WallGrid::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: WallGrid::MAX_DIM,
                }
                .into());
            }
        }
        // 2. Start and goal inside the maze and distinct.
        for cell in [self.start, self.goal] {
            if !cell.in_bounds(self.width, self.height) {
                return Err(SpaceError::CellOutOfBounds {
                    cell,
                    bounds: format!("[0, {}) x [0, {})", self.width, self.height),
                }
                .into());
            }
        }
        if self.start == self.goal {
            return Err(SpaceError::StartIsEnd { cell: self.start }.into());
        }
        // 3. A budget, if given, must allow at least one move.
        if self.max_moves == Some(0) {
            return Err(ConfigError::ZeroMoveBudget);
        }
        Ok(())
    }

    /// The pixel/cell mapping for `surface`, after checking it has at least
    /// one pixel per cell on both axes.
    pub fn geometry_for(&self, surface: &dyn OccupancySurface) -> Result<GridGeometry, ConfigError> {
        let size = (surface.width(), surface.height());
        if size.0 < self.width || size.1 < self.height {
            return Err(ConfigError::SurfaceTooSmall {
                cells: (self.width, self.height),
                surface: size,
            });
        }
        Ok(GridGeometry::new(self.width, self.height, size.0, size.1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micromaze_sense::PixelSurface;

    fn small() -> SessionConfig {
        SessionConfig {
            width: 3,
            height: 2,
            start: GridCoord::new(0, 1),
            goal: GridCoord::new(2, 0),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
        assert!(small().validate().is_ok());
    }

    #[test]
    fn validate_empty_maze_fails() {
        let mut cfg = small();
        cfg.height = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::Space(SpaceError::EmptyGrid)));
    }

    #[test]
    fn validate_goal_outside_fails() {
        let mut cfg = small();
        cfg.goal = GridCoord::new(3, 0);
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::CellOutOfBounds { cell, .. })) => {
                assert_eq!(cell, GridCoord::new(3, 0));
            }
            other => panic!("expected CellOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn validate_start_equal_goal_fails() {
        let mut cfg = small();
        cfg.start = cfg.goal;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Space(SpaceError::StartIsEnd { .. }))
        ));
    }

    #[test]
    fn validate_zero_budget_fails() {
        let mut cfg = small();
        cfg.max_moves = Some(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMoveBudget));
        cfg.max_moves = Some(1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn geometry_needs_a_pixel_per_cell() {
        let cfg = small();
        let tiny = PixelSurface::blank(2, 2, 1).unwrap();
        assert_eq!(
            cfg.geometry_for(&tiny),
            Err(ConfigError::SurfaceTooSmall {
                cells: (3, 2),
                surface: (2, 2)
            })
        );
        let ok = PixelSurface::blank(30, 20, 1).unwrap();
        let g = cfg.geometry_for(&ok).unwrap();
        assert_eq!(g.cell_size(), (10.0, 10.0));
    }

    #[test]
    fn error_display_and_source() {
        let e = ConfigError::Space(SpaceError::EmptyGrid);
        assert!(e.to_string().starts_with("maze: "));
        assert!(e.source().is_some());
        assert!(ConfigError::ZeroMoveBudget.source().is_none());
    }
}
