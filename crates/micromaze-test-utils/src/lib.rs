//! Test fixtures and reference oracles for micromaze development.
//!
//! - [`MazeLayout`]: ground-truth wall sets, either hand-built or generated
//!   from a seed ([`perfect_maze`], [`random_walls`]).
//! - [`render_surface`]: paints a layout onto a [`PixelSurface`] so the
//!   simulated sensors can rediscover it.
//! - [`reference_distances`]: an independent BFS over a layout to check
//!   flood-fill results against.
//!
//! [`PixelSurface`]: micromaze_sense::PixelSurface

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generate;
pub mod reference;
pub mod surface;

pub use fixtures::MazeLayout;
pub use generate::{perfect_maze, random_walls};
pub use reference::reference_distances;
pub use surface::{render_surface, DEFAULT_CELL_PX, DEFAULT_HALF_THICKNESS};
