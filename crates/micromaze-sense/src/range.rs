//! Wall marks from physical range readings.
//!
//! On the robot, each sensor reports the distance in centimetres from the
//! cell center to the first wall face. [`RangeMapper`] turns that distance
//! into the wall segment it must have hit.

use crate::error::SenseError;
use micromaze_core::{Direction, GridCoord, WallCoord};
use micromaze_space::{PhysicalGeometry, WallGrid};

/// Maps centimetre ranges onto wall-grid segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeMapper {
    physical: PhysicalGeometry,
}

impl RangeMapper {
    /// Create a mapper for a maze with the given physical dimensions.
    pub fn new(physical: PhysicalGeometry) -> Self {
        Self { physical }
    }

    /// The physical dimensions in use.
    pub fn physical(&self) -> &PhysicalGeometry {
        &self.physical
    }

    /// The segment a reading of `range_cm` from `cell` toward `direction`
    /// hit, or `None` if the reading is not a finite non-negative distance
    /// or points past the maze edge.
    pub fn segment_for_range(
        &self,
        grid: &WallGrid,
        cell: GridCoord,
        direction: Direction,
        range_cm: f64,
    ) -> Option<WallCoord> {
        if !grid.contains(cell) || !range_cm.is_finite() || range_cm < 0.0 {
            return None;
        }
        let cells = self.physical.cells_before_wall(range_cm, direction) as i32;
        let (dx, dy) = direction.offset();
        let last_open = GridCoord::new(cell.x + dx * cells, cell.y + dy * cells);
        grid.contains(last_open)
            .then(|| WallGrid::segment_between(last_open, direction))
    }

    /// Mark the segment hit by a range reading.
    ///
    /// Returns the segment and whether it was newly marked, or `None` when
    /// the reading could not be placed inside the maze.
    pub fn mark(
        &self,
        grid: &mut WallGrid,
        cell: GridCoord,
        direction: Direction,
        range_cm: f64,
    ) -> Result<Option<(WallCoord, bool)>, SenseError> {
        if !grid.contains(cell) {
            return Err(SenseError::CellOutOfBounds { cell });
        }
        let Some(segment) = self.segment_for_range(grid, cell, direction, range_cm) else {
            log::debug!("range {range_cm}cm {direction} from {cell} lies outside the maze");
            return Ok(None);
        };
        let changed = grid.mark_wall_segment(segment)?;
        Ok(Some((segment, changed)))
    }
}
