//! Error types for surfaces and sensor sweeps.

use micromaze_core::GridCoord;
use micromaze_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors constructing a [`PixelSurface`](crate::PixelSurface).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// Width or height is zero.
    Empty {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A pixel must have at least one channel.
    ZeroChannels,
    /// The pixel buffer does not match `width * height * channels`.
    BufferLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "surface {width}x{height} has no pixels")
            }
            Self::ZeroChannels => write!(f, "surface must have at least one channel"),
            Self::BufferLength { expected, actual } => {
                write!(f, "pixel buffer has {actual} bytes, expected {expected}")
            }
        }
    }
}

impl Error for SurfaceError {}

/// Errors from a sensor sweep or a range-based wall mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SenseError {
    /// The sensing cell is outside the maze.
    CellOutOfBounds {
        /// The offending cell.
        cell: GridCoord,
    },
    /// The surface is not the size the sensor geometry was built for.
    SurfaceMismatch {
        /// Surface size the geometry expects.
        expected: (u32, u32),
        /// Surface size that was passed.
        actual: (u32, u32),
    },
    /// Writing the detected wall into the wall grid failed.
    Mark(SpaceError),
}

impl fmt::Display for SenseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell } => write!(f, "sensing cell {cell} is outside the maze"),
            Self::SurfaceMismatch { expected, actual } => write!(
                f,
                "surface is {}x{}, sensor geometry expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::Mark(e) => write!(f, "wall mark failed: {e}"),
        }
    }
}

impl Error for SenseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mark(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for SenseError {
    fn from(e: SpaceError) -> Self {
        Self::Mark(e)
    }
}
