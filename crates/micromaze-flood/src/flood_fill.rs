//! Breadth-first flood fill from the goal cell.

use crate::distance::{Distance, DistanceField};
use micromaze_core::{Direction, GridCoord};
use micromaze_space::WallGrid;
use std::collections::VecDeque;

/// Computes a [`DistanceField`] from the walls currently known to a grid.
///
/// Every call recomputes from scratch. Unknown segments count as open, so
/// the result is the optimistic distance under the agent's current
/// knowledge; adding walls can only raise distances or leave them unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloodFill;

impl FloodFill {
    /// Flood from `goal` across every passable segment of `grid`.
    ///
    /// An out-of-bounds goal yields a field where every cell is unreached.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromaze_core::GridCoord;
    /// use micromaze_flood::{Distance, FloodFill};
    /// use micromaze_space::WallGrid;
    ///
    /// let grid = WallGrid::new(3, 3, GridCoord::new(2, 2), GridCoord::new(0, 0)).unwrap();
    /// let field = FloodFill::compute(&grid, GridCoord::new(0, 0));
    /// assert_eq!(field.get(GridCoord::new(2, 2)), Distance::Reached(4));
    /// ```
    pub fn compute(grid: &WallGrid, goal: GridCoord) -> DistanceField {
        let mut field = DistanceField::unreached(grid.width(), grid.height(), goal);
        if !grid.contains(goal) {
            log::debug!("flood goal {goal} lies outside the maze");
            return field;
        }

        let mut queue = VecDeque::new();
        field.set(goal, Distance::Reached(0));
        queue.push_back((goal, 0u32));

        while let Some((cell, dist)) = queue.pop_front() {
            for direction in Direction::ALL {
                if !grid.is_passable(cell, direction) {
                    continue;
                }
                let next = cell.step(direction);
                if !grid.contains(next) || field.get(next).is_reached() {
                    continue;
                }
                field.set(next, Distance::Reached(dist + 1));
                queue.push_back((next, dist + 1));
            }
        }

        log::debug!(
            "flood from {goal}: {} of {} cells reached",
            field.reached_count(),
            grid.cell_count()
        );
        field
    }
}
