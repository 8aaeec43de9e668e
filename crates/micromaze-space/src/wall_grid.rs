//! Double-resolution store of what the agent knows about maze walls.

use crate::error::SpaceError;
use crate::node::NodeState;
use micromaze_core::{Direction, GridCoord, WallCoord};
use smallvec::SmallVec;

/// The agent's knowledge of maze connectivity.
///
/// A `W x H` maze is stored as `(2W+1) x (2H+1)` nodes, row-major. Cell
/// `(x, y)` lives at node `(2x+1, 2y+1)`; the nodes between cell centers
/// are wall segments, and the outermost rows and columns form the border.
///
/// Invariants upheld for the lifetime of the grid:
/// - every border node is `Wall`;
/// - exactly one node is `Start` and one is `End`, fixed at construction;
/// - wall segments only ever move from `Open` to `Wall`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    width: u32,
    height: u32,
    nodes: Vec<NodeState>,
    start: GridCoord,
    end: GridCoord,
    wall_count: usize,
}

impl WallGrid {
    /// Largest supported dimension, so wall-grid coordinates fit in `i32`.
    pub const MAX_DIM: u32 = (i32::MAX as u32 - 1) / 2;

    /// Create a grid of `width * height` cells with only the border sealed.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromaze_core::{Direction, GridCoord};
    /// use micromaze_space::{NodeState, WallGrid};
    ///
    /// let grid = WallGrid::new(3, 3, GridCoord::new(0, 2), GridCoord::new(2, 0)).unwrap();
    /// assert_eq!(grid.wall_width(), 7);
    /// assert_eq!(grid.state(GridCoord::new(2, 0).to_wall()), NodeState::End);
    /// assert!(grid.is_passable(GridCoord::new(1, 1), Direction::Left));
    /// assert!(!grid.is_passable(GridCoord::new(0, 1), Direction::Left));
    /// ```
    pub fn new(
        width: u32,
        height: u32,
        start: GridCoord,
        end: GridCoord,
    ) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        for cell in [start, end] {
            if !cell.in_bounds(width, height) {
                return Err(SpaceError::CellOutOfBounds {
                    cell,
                    bounds: format!("[0, {width}) x [0, {height})"),
                });
            }
        }
        if start == end {
            return Err(SpaceError::StartIsEnd { cell: start });
        }

        let wall_w = 2 * width as usize + 1;
        let wall_h = 2 * height as usize + 1;
        let mut nodes = vec![NodeState::Open; wall_w * wall_h];
        let mut wall_count = 0;
        for y in 0..wall_h {
            for x in 0..wall_w {
                if x == 0 || y == 0 || x == wall_w - 1 || y == wall_h - 1 {
                    nodes[y * wall_w + x] = NodeState::Wall;
                    wall_count += 1;
                }
            }
        }

        let mut grid = Self {
            width,
            height,
            nodes,
            start,
            end,
            wall_count,
        };
        let s = grid.index_of(start.to_wall()).ok_or(SpaceError::EmptyGrid)?;
        grid.nodes[s] = NodeState::Start;
        let e = grid.index_of(end.to_wall()).ok_or(SpaceError::EmptyGrid)?;
        grid.nodes[e] = NodeState::End;
        Ok(grid)
    }

    /// Maze width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Maze height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Wall-grid width in nodes (`2W + 1`).
    pub fn wall_width(&self) -> u32 {
        2 * self.width + 1
    }

    /// Wall-grid height in nodes (`2H + 1`).
    pub fn wall_height(&self) -> u32 {
        2 * self.height + 1
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The start cell.
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// The goal cell.
    pub fn end(&self) -> GridCoord {
        self.end
    }

    /// Number of nodes currently `Wall`, border included.
    pub fn wall_count(&self) -> usize {
        self.wall_count
    }

    /// Whether `cell` lies inside the maze.
    pub fn contains(&self, cell: GridCoord) -> bool {
        cell.in_bounds(self.width, self.height)
    }

    /// Row-major index of the cell in a `W * H` buffer.
    pub fn cell_index(&self, cell: GridCoord) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    fn index_of(&self, coord: WallCoord) -> Option<usize> {
        let (w, h) = (self.wall_width() as i64, self.wall_height() as i64);
        let (x, y) = (coord.x as i64, coord.y as i64);
        if x < 0 || y < 0 || x >= w || y >= h {
            return None;
        }
        Some((y * w + x) as usize)
    }

    /// State of a node. Coordinates outside the wall grid read as `Wall`.
    pub fn state(&self, coord: WallCoord) -> NodeState {
        self.index_of(coord)
            .map_or(NodeState::Wall, |i| self.nodes[i])
    }

    /// Whether the node representing `cell` is the goal.
    pub fn is_end(&self, cell: GridCoord) -> bool {
        self.state(cell.to_wall()) == NodeState::End
    }

    /// Mark a wall segment as `Wall`.
    ///
    /// Returns `Ok(true)` if the segment was open and is now a wall, and
    /// `Ok(false)` if it was already a wall.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::NotAWallSegment`] for a cell-center coordinate;
    ///   the grid is left untouched.
    /// - [`SpaceError::CoordOutOfBounds`] for a coordinate outside the grid.
    pub fn mark_wall_segment(&mut self, coord: WallCoord) -> Result<bool, SpaceError> {
        if coord.is_cell_center() {
            return Err(SpaceError::NotAWallSegment { coord });
        }
        let i = self
            .index_of(coord)
            .ok_or_else(|| SpaceError::CoordOutOfBounds {
                coord,
                bounds: format!("[0, {}) x [0, {})", self.wall_width(), self.wall_height()),
            })?;
        if self.nodes[i] == NodeState::Wall {
            return Ok(false);
        }
        self.nodes[i] = NodeState::Wall;
        self.wall_count += 1;
        Ok(true)
    }

    /// The segment node between `cell` and its neighbour in `direction`.
    pub fn segment_between(cell: GridCoord, direction: Direction) -> WallCoord {
        cell.to_wall().step(direction)
    }

    /// Whether the agent may move from `from` one cell in `direction`.
    ///
    /// True iff the segment in between is not `Wall`. Segments outside the
    /// wall grid count as walls, so nothing leaves the maze.
    pub fn is_passable(&self, from: GridCoord, direction: Direction) -> bool {
        self.state(Self::segment_between(from, direction))
            .is_passable()
    }

    /// Cells reachable in one move from `cell`, in [`Direction::ALL`] order.
    ///
    /// Each candidate is found by crossing the open segment and continuing
    /// to the next cell-center node.
    pub fn open_neighbours(&self, cell: GridCoord) -> SmallVec<[(Direction, GridCoord); 4]> {
        let mut out = SmallVec::new();
        if !self.contains(cell) {
            return out;
        }
        for direction in Direction::ALL {
            let segment = Self::segment_between(cell, direction);
            if !self.state(segment).is_passable() {
                continue;
            }
            if let Some(next) = segment.step(direction).to_cell() {
                if self.contains(next) {
                    out.push((direction, next));
                }
            }
        }
        out
    }

    /// Iterate over every wall-segment node and its state, row-major.
    pub fn segments(&self) -> impl Iterator<Item = (WallCoord, NodeState)> + '_ {
        let w = self.wall_width() as usize;
        self.nodes.iter().enumerate().filter_map(move |(i, &s)| {
            let coord = WallCoord::new((i % w) as i32, (i / w) as i32);
            coord.is_wall_segment().then_some((coord, s))
        })
    }
}
