//! Plain-text dump of a [`WallGrid`], one character per node.
//!
//! ```text
//! +-+-+-+
//! |S    |
//! + +-+ +
//! |   |E|
//! +-+-+-+
//! ```
//!
//! Corner posts are always `+`. Known walls are `-` or `|`, open segments
//! are blank. `S` and `E` mark start and goal; the robot overlay adds `@`
//! for the current cell and `.` for visited cells.

use crate::node::NodeState;
use crate::wall_grid::WallGrid;
use micromaze_core::{GridCoord, WallCoord};
use std::collections::HashSet;
use std::fmt;

impl WallGrid {
    /// Render the grid without a robot overlay.
    pub fn render_ascii(&self) -> String {
        self.render(None, &HashSet::new())
    }

    /// Render the grid with the robot at `current` and its visited cells.
    pub fn render_with_robot(&self, current: GridCoord, visited: &[GridCoord]) -> String {
        let visited: HashSet<GridCoord> = visited.iter().copied().collect();
        self.render(Some(current), &visited)
    }

    fn render(&self, current: Option<GridCoord>, visited: &HashSet<GridCoord>) -> String {
        let (w, h) = (self.wall_width() as i32, self.wall_height() as i32);
        let mut out = String::with_capacity(((w + 1) * h) as usize);
        for y in 0..h {
            for x in 0..w {
                let coord = WallCoord::new(x, y);
                out.push(self.glyph(coord, current, visited));
            }
            out.push('\n');
        }
        out
    }

    fn glyph(
        &self,
        coord: WallCoord,
        current: Option<GridCoord>,
        visited: &HashSet<GridCoord>,
    ) -> char {
        let state = self.state(coord);
        match (coord.x % 2 == 1, coord.y % 2 == 1) {
            // Cell center.
            (true, true) => {
                let cell = coord.to_cell();
                if cell.is_some() && cell == current {
                    return '@';
                }
                match state {
                    NodeState::Start => 'S',
                    NodeState::End => 'E',
                    _ if cell.is_some_and(|c| visited.contains(&c)) => '.',
                    _ => ' ',
                }
            }
            // Horizontal segment between vertically adjacent cells.
            (true, false) if state == NodeState::Wall => '-',
            // Vertical segment between horizontally adjacent cells.
            (false, true) if state == NodeState::Wall => '|',
            (false, false) => '+',
            _ => ' ',
        }
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_ascii())
    }
}
