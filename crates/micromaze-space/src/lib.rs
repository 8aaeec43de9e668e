//! Spatial data structures for micromaze.
//!
//! - [`GridGeometry`]: pure transforms between pixel space and cell space.
//! - [`PhysicalGeometry`]: the same transforms for a physical maze measured
//!   in centimetres.
//! - [`WallGrid`]: the agent's knowledge of maze connectivity, stored at
//!   double resolution so that walls have their own nodes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod node;
pub mod physical;
pub mod render;
pub mod wall_grid;

pub use error::SpaceError;
pub use geometry::GridGeometry;
pub use node::NodeState;
pub use physical::PhysicalGeometry;
pub use wall_grid::WallGrid;
