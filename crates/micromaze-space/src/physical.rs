//! Cell ↔ centimetre transforms for a physical maze.
//!
//! A physical maze alternates walls and cells along each axis, starting and
//! ending with a wall: `wall, cell, wall, cell, ..., wall`. Cell `0`'s center
//! therefore sits at `wall_width + cell_width / 2` from the outer edge, and
//! each further cell adds one pitch of `cell_width + wall_width`.

use crate::error::SpaceError;
use micromaze_core::Direction;

/// Physical dimensions of a maze, in centimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalGeometry {
    wall_width: f64,
    cell_width: f64,
    cell_height: f64,
}

impl PhysicalGeometry {
    /// Create a geometry from wall thickness and cell interior sizes.
    ///
    /// All three measurements must be finite and strictly positive.
    pub fn new(wall_width: f64, cell_width: f64, cell_height: f64) -> Result<Self, SpaceError> {
        for (name, value) in [
            ("wall_width", wall_width),
            ("cell_width", cell_width),
            ("cell_height", cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpaceError::InvalidMeasurement {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            wall_width,
            cell_width,
            cell_height,
        })
    }

    /// Wall thickness.
    pub fn wall_width(&self) -> f64 {
        self.wall_width
    }

    /// Distance between adjacent cell centers along `x` and `y`.
    pub fn pitch(&self) -> (f64, f64) {
        (
            self.cell_width + self.wall_width,
            self.cell_height + self.wall_width,
        )
    }

    /// Centimetre position of a (possibly fractional) cell position.
    pub fn cell_to_cm(&self, x: f64, y: f64) -> (f64, f64) {
        let (px, py) = self.pitch();
        (
            px * x + self.wall_width + self.cell_width / 2.0,
            py * y + self.wall_width + self.cell_height / 2.0,
        )
    }

    /// Fractional cell position of a centimetre position.
    pub fn cm_to_cell(&self, x_cm: f64, y_cm: f64) -> (f64, f64) {
        let (px, py) = self.pitch();
        (
            (x_cm - self.wall_width - self.cell_width / 2.0) / px,
            (y_cm - self.wall_width - self.cell_height / 2.0) / py,
        )
    }

    /// How many whole cells lie between the sensing cell and the wall face
    /// a range sensor hit, for a range measured from the cell's center.
    ///
    /// `0` means the wall bounds the sensing cell itself. Readings shorter
    /// than half a cell round to `0`.
    pub fn cells_before_wall(&self, range_cm: f64, direction: Direction) -> u32 {
        let (px, py) = self.pitch();
        let (half, pitch) = if direction.is_horizontal() {
            (self.cell_width / 2.0, px)
        } else {
            (self.cell_height / 2.0, py)
        };
        let steps = ((range_cm - half) / pitch).round();
        if steps.is_finite() && steps > 0.0 {
            steps as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> PhysicalGeometry {
        PhysicalGeometry::new(1.0, 20.0, 18.0).unwrap()
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(PhysicalGeometry::new(0.0, 20.0, 20.0).is_err());
        assert!(PhysicalGeometry::new(1.0, f64::NAN, 20.0).is_err());
        assert!(PhysicalGeometry::new(1.0, 20.0, -3.0).is_err());
    }

    #[test]
    fn first_cell_center_is_offset_by_one_wall() {
        let g = geom();
        assert_eq!(g.cell_to_cm(0.0, 0.0), (11.0, 10.0));
        assert_eq!(g.cell_to_cm(2.0, 1.0), (53.0, 29.0));
    }

    #[test]
    fn axes_are_independent() {
        let g = geom();
        let (x, y) = g.cell_to_cm(3.0, 0.0);
        assert_eq!(g.cm_to_cell(x, y), (3.0, 0.0));
        let (x, y) = g.cell_to_cm(0.0, 4.0);
        assert_eq!(g.cm_to_cell(x, y), (0.0, 4.0));
    }

    #[test]
    fn range_to_cell_count() {
        let g = geom();
        // Adjacent wall: face at half a cell from center.
        assert_eq!(g.cells_before_wall(10.0, Direction::Right), 0);
        // One open cell in between: half + pitch.
        assert_eq!(g.cells_before_wall(31.0, Direction::Left), 1);
        // Vertical uses cell_height: 9 + 2 * 19.
        assert_eq!(g.cells_before_wall(47.0, Direction::Down), 2);
        assert_eq!(g.cells_before_wall(0.5, Direction::Up), 0);
        assert_eq!(g.cells_before_wall(f64::NAN, Direction::Up), 0);
    }
}
