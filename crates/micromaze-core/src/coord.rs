//! Cell, wall-grid and pixel coordinates.
//!
//! A maze of `W x H` cells is mirrored by a wall grid of `(2W+1) x (2H+1)`
//! nodes. Odd-odd wall-grid nodes are cell centers; every other node is a
//! wall segment between two cell centers (or part of the maze border).

use crate::direction::Direction;
use std::fmt;

/// A cell in maze space: `0 <= x < W`, `0 <= y < H`.
///
/// Components are signed so that neighbour arithmetic can step past the
/// border without wrapping; bounds are checked by the owning grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridCoord {
    /// Create a cell coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The wall-grid node at this cell's center: `(2x+1, 2y+1)`.
    ///
    /// ```
    /// use micromaze_core::{GridCoord, WallCoord};
    ///
    /// assert_eq!(GridCoord::new(2, 0).to_wall(), WallCoord::new(5, 1));
    /// ```
    pub const fn to_wall(self) -> WallCoord {
        WallCoord {
            x: self.x * 2 + 1,
            y: self.y * 2 + 1,
        }
    }

    /// The orthogonally adjacent cell in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this cell lies inside a `width x height` maze.
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A node in the double-resolution wall grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallCoord {
    /// Column index in wall-grid space.
    pub x: i32,
    /// Row index in wall-grid space.
    pub y: i32,
}

impl WallCoord {
    /// Create a wall-grid coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for odd-odd nodes, which represent cells rather than walls.
    pub const fn is_cell_center(self) -> bool {
        self.x.rem_euclid(2) == 1 && self.y.rem_euclid(2) == 1
    }

    /// True for every node that is not a cell center.
    pub const fn is_wall_segment(self) -> bool {
        !self.is_cell_center()
    }

    /// The cell this node is the center of, or `None` for wall segments
    /// and negative coordinates.
    ///
    /// ```
    /// use micromaze_core::{GridCoord, WallCoord};
    ///
    /// assert_eq!(WallCoord::new(3, 5).to_cell(), Some(GridCoord::new(1, 2)));
    /// assert_eq!(WallCoord::new(2, 5).to_cell(), None);
    /// ```
    pub const fn to_cell(self) -> Option<GridCoord> {
        if self.x < 0 || self.y < 0 || !self.is_cell_center() {
            return None;
        }
        Some(GridCoord {
            x: (self.x - 1) / 2,
            y: (self.y - 1) / 2,
        })
    }

    /// The adjacent wall-grid node in `direction`.
    ///
    /// From a cell center this lands on the segment between the cell and
    /// its neighbour; stepping twice lands on the neighbour's center.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for WallCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A pixel on an occupancy surface, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    /// Column in pixels.
    pub x: u32,
    /// Row in pixels.
    pub y: u32,
}

impl PixelCoord {
    /// Create a pixel coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px,{}px", self.x, self.y)
    }
}
