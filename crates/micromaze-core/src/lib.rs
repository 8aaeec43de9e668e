//! Core types for the micromaze workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate systems shared by every other crate (cell space and the
//! double-resolution wall-grid space), the four cardinal directions, and the
//! solver error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;

pub use coord::{GridCoord, PixelCoord, WallCoord};
pub use direction::Direction;
pub use error::SolveError;
