//! Flood-fill distance fields for micromaze.
//!
//! [`FloodFill::compute`] labels every cell with its hop distance to the
//! goal under the walls currently known to a [`WallGrid`]. The field is
//! rebuilt from scratch on every call; nothing is carried over from a
//! previous computation.
//!
//! [`WallGrid`]: micromaze_space::WallGrid

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod flood_fill;

pub use distance::{Distance, DistanceField};
pub use flood_fill::FloodFill;
