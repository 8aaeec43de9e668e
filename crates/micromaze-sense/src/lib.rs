//! Sensing for micromaze.
//!
//! The agent carries four fixed range sensors (left, right, up, down). In
//! simulation they are rays cast across an [`OccupancySurface`]; on
//! hardware they return centimetre ranges which [`RangeMapper`] converts
//! into the same wall marks.
//!
//! Pixel polarity is fixed: a pixel is open only when every channel is
//! exactly zero. Any nonzero channel is an obstruction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod range;
pub mod sensor;
pub mod surface;

pub use error::{SenseError, SurfaceError};
pub use range::RangeMapper;
pub use sensor::{Reading, SenseOutcome, SensorConfig, SensorMask, SensorReading, SensorSimulator};
pub use surface::{OccupancySurface, PixelSurface};
