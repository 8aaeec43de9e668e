//! Pixel ↔ cell transforms for a maze rendered onto a pixel surface.
//!
//! The surface is divided evenly into `cells_x * cells_y` cells. Cell sizes
//! may be fractional (a 600 px surface over 7 cells gives 85.71 px cells);
//! results are floored to whole pixels and whole cells.

use crate::error::SpaceError;
use micromaze_core::{GridCoord, PixelCoord};

/// Maps between a `cells_x * cells_y` maze and its pixel surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    cells_x: u32,
    cells_y: u32,
    surface_width: u32,
    surface_height: u32,
}

impl GridGeometry {
    /// Create a geometry for a maze of `cells_x * cells_y` cells drawn on a
    /// `surface_width * surface_height` pixel surface.
    ///
    /// # Examples
    ///
    /// ```
    /// use micromaze_core::{GridCoord, PixelCoord};
    /// use micromaze_space::GridGeometry;
    ///
    /// let g = GridGeometry::new(3, 3, 60, 60).unwrap();
    /// assert_eq!(g.cell_to_pixel(GridCoord::new(1, 2)), Some(PixelCoord::new(30, 50)));
    /// assert_eq!(g.pixel_to_cell(PixelCoord::new(59, 0)), GridCoord::new(2, 0));
    /// ```
    pub fn new(
        cells_x: u32,
        cells_y: u32,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Self, SpaceError> {
        if cells_x == 0 || cells_y == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if surface_width == 0 || surface_height == 0 {
            return Err(SpaceError::EmptySurface);
        }
        Ok(Self {
            cells_x,
            cells_y,
            surface_width,
            surface_height,
        })
    }

    /// Number of cells along `x`.
    pub fn cells_x(&self) -> u32 {
        self.cells_x
    }

    /// Number of cells along `y`.
    pub fn cells_y(&self) -> u32 {
        self.cells_y
    }

    /// Surface width in pixels.
    pub fn surface_width(&self) -> u32 {
        self.surface_width
    }

    /// Surface height in pixels.
    pub fn surface_height(&self) -> u32 {
        self.surface_height
    }

    /// Cell size in pixels as `(width, height)`, possibly fractional.
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.surface_width as f64 / self.cells_x as f64,
            self.surface_height as f64 / self.cells_y as f64,
        )
    }

    /// Pixel at the center of `cell`, or `None` if the cell is outside
    /// the maze.
    pub fn cell_to_pixel(&self, cell: GridCoord) -> Option<PixelCoord> {
        if !cell.in_bounds(self.cells_x, self.cells_y) {
            return None;
        }
        let (cw, ch) = self.cell_size();
        let px = ((cell.x as f64 + 0.5) * cw).floor() as u32;
        let py = ((cell.y as f64 + 0.5) * ch).floor() as u32;
        Some(PixelCoord::new(
            px.min(self.surface_width - 1),
            py.min(self.surface_height - 1),
        ))
    }

    /// Cell containing `pixel`: `floor(pixel / extent * cells)` per axis.
    ///
    /// Pixels past the surface edge map past the last cell; callers scan
    /// within the surface only.
    pub fn pixel_to_cell(&self, pixel: PixelCoord) -> GridCoord {
        let x = (pixel.x as f64 / self.surface_width as f64 * self.cells_x as f64).floor();
        let y = (pixel.y as f64 / self.surface_height as f64 * self.cells_y as f64).floor();
        GridCoord::new(x as i32, y as i32)
    }
}
