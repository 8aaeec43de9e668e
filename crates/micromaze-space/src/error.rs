//! Error types for grid construction and wall-grid updates.

use micromaze_core::{GridCoord, WallCoord};
use std::fmt;

/// Errors arising from grid construction or wall-grid mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The pixel surface has zero width or height.
    EmptySurface,
    /// A dimension is too large for `i32` wall-grid coordinates.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The value supplied.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// A cell coordinate lies outside the maze.
    CellOutOfBounds {
        /// The offending cell.
        cell: GridCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A wall-grid coordinate lies outside the wall grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: WallCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Tried to mark a cell-center node as a wall.
    NotAWallSegment {
        /// The cell-center coordinate that was passed.
        coord: WallCoord,
    },
    /// A physical measurement is not finite and positive.
    InvalidMeasurement {
        /// Which measurement.
        name: &'static str,
        /// The value supplied, formatted.
        value: String,
    },
    /// Start and end were given the same cell.
    StartIsEnd {
        /// The shared cell.
        cell: GridCoord,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::EmptySurface => write!(f, "surface must be at least one pixel in each axis"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "wall-grid coordinate {coord} out of bounds: {bounds}")
            }
            Self::NotAWallSegment { coord } => {
                write!(f, "{coord} is a cell center, not a wall segment")
            }
            Self::InvalidMeasurement { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::StartIsEnd { cell } => write!(f, "start and end are both {cell}"),
        }
    }
}

impl std::error::Error for SpaceError {}
