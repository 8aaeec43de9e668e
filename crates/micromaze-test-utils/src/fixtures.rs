//! Ground-truth maze layouts.

use micromaze_core::{Direction, GridCoord, WallCoord};
use micromaze_space::{SpaceError, WallGrid};
use std::collections::BTreeSet;

/// The true interior walls of a `width x height` maze.
///
/// The border is implicit and always walled. Interior walls are stored as
/// wall-grid segment coordinates, so a layout can be compared directly with
/// what a [`WallGrid`] has discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    width: u32,
    height: u32,
    walls: BTreeSet<WallCoord>,
}

impl MazeLayout {
    /// A layout with no interior walls.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: BTreeSet::new(),
        }
    }

    /// A layout with every interior segment walled.
    pub fn closed(width: u32, height: u32) -> Self {
        let mut layout = Self::open(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let cell = GridCoord::new(x, y);
                layout.add_wall(cell, Direction::Right);
                layout.add_wall(cell, Direction::Down);
            }
        }
        layout
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn is_interior(&self, cell: GridCoord, direction: Direction) -> bool {
        cell.in_bounds(self.width, self.height)
            && cell.step(direction).in_bounds(self.width, self.height)
    }

    /// Wall off `cell` from its neighbour in `direction`.
    ///
    /// Returns false for border segments, which are already walls.
    pub fn add_wall(&mut self, cell: GridCoord, direction: Direction) -> bool {
        if !self.is_interior(cell, direction) {
            return false;
        }
        self.walls.insert(WallGrid::segment_between(cell, direction))
    }

    /// Open the segment between `cell` and its neighbour in `direction`.
    pub fn remove_wall(&mut self, cell: GridCoord, direction: Direction) -> bool {
        self.walls
            .remove(&WallGrid::segment_between(cell, direction))
    }

    /// True if a wall (interior or border) separates `cell` from its
    /// neighbour in `direction`.
    pub fn has_wall(&self, cell: GridCoord, direction: Direction) -> bool {
        !self.is_interior(cell, direction)
            || self
                .walls
                .contains(&WallGrid::segment_between(cell, direction))
    }

    /// Interior wall segments in wall-grid coordinates, sorted.
    pub fn walls(&self) -> impl Iterator<Item = WallCoord> + '_ {
        self.walls.iter().copied()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// A grid that already knows every wall of this layout.
    pub fn to_wall_grid(&self, start: GridCoord, end: GridCoord) -> Result<WallGrid, SpaceError> {
        let mut grid = WallGrid::new(self.width, self.height, start, end)?;
        for segment in self.walls() {
            grid.mark_wall_segment(segment)?;
        }
        Ok(grid)
    }

    /// The 7x5 maze used by the end-to-end scenarios.
    ///
    /// ```text
    /// +-+-+-+-+-+-+-+
    /// |     |E      |
    /// + +-+ + +-+-+ +
    /// | |   |   |   |
    /// + + +-+-+ + +-+
    /// |   |     |   |
    /// +-+ + +-+-+-+ +
    /// |     |       |
    /// + +-+-+ +-+ + +
    /// |      S  |   |
    /// +-+-+-+-+-+-+-+
    /// ```
    pub fn seven_by_five() -> Self {
        let mut m = Self::open(7, 5);
        let c = GridCoord::new;
        use Direction::{Down, Right};
        for (cell, dir) in [
            // Row 0.
            (c(2, 0), Right),
            (c(1, 0), Down),
            (c(4, 0), Down),
            (c(5, 0), Down),
            // Row 1.
            (c(0, 1), Right),
            (c(2, 1), Right),
            (c(4, 1), Right),
            (c(2, 1), Down),
            (c(3, 1), Down),
            (c(6, 1), Down),
            // Row 2.
            (c(1, 2), Right),
            (c(4, 2), Right),
            (c(0, 2), Down),
            (c(3, 2), Down),
            (c(4, 2), Down),
            (c(5, 2), Down),
            // Row 3.
            (c(2, 3), Right),
            (c(1, 3), Down),
            (c(2, 3), Down),
            (c(4, 3), Down),
            // Row 4.
            (c(4, 4), Right),
        ] {
            m.add_wall(cell, dir);
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_is_always_a_wall() {
        let mut m = MazeLayout::open(3, 3);
        assert!(m.has_wall(GridCoord::new(0, 1), Direction::Left));
        assert!(!m.add_wall(GridCoord::new(2, 2), Direction::Down));
        assert_eq!(m.wall_count(), 0);
    }

    #[test]
    fn walls_are_shared_between_neighbours() {
        let mut m = MazeLayout::open(3, 3);
        assert!(m.add_wall(GridCoord::new(1, 1), Direction::Right));
        assert!(m.has_wall(GridCoord::new(2, 1), Direction::Left));
        assert!(!m.add_wall(GridCoord::new(2, 1), Direction::Left));
        assert!(m.remove_wall(GridCoord::new(2, 1), Direction::Left));
        assert!(!m.has_wall(GridCoord::new(1, 1), Direction::Right));
    }

    #[test]
    fn closed_layout_walls_every_interior_segment() {
        // (w-1)*h vertical + w*(h-1) horizontal.
        assert_eq!(MazeLayout::closed(4, 3).wall_count(), 3 * 3 + 4 * 2);
    }

    #[test]
    fn seven_by_five_renders_as_documented() {
        let grid = MazeLayout::seven_by_five()
            .to_wall_grid(GridCoord::new(3, 4), GridCoord::new(3, 0))
            .unwrap();
        let expected = "\
+-+-+-+-+-+-+-+
|     |E      |
+ +-+ + +-+-+ +
| |   |   |   |
+ + +-+-+ + +-+
|   |     |   |
+-+ + +-+-+-+ +
|     |       |
+ +-+-+ +-+ + +
|      S  |   |
+-+-+-+-+-+-+-+
";
        assert_eq!(grid.render_ascii(), expected);
    }
}
