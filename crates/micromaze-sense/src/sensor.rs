//! Simulated four-way range sensor.
//!
//! Each enabled sensor walks outward from the sensing cell's center pixel,
//! one pixel per step, until it meets an obstruction or runs off the
//! surface. A hit is mapped back to the wall segment it belongs to and that
//! segment is marked in the [`WallGrid`].

use crate::error::SenseError;
use crate::surface::OccupancySurface;
use micromaze_core::{Direction, GridCoord, PixelCoord, WallCoord};
use micromaze_space::{GridGeometry, WallGrid};
use smallvec::SmallVec;
use std::fmt;

/// Default pixels subtracted from a hit before locating its cell.
///
/// Rendered wall lines have thickness, so the first obstruction pixel may
/// straddle a cell boundary. Backing off a few pixels lands the point
/// inside the last open cell before the wall.
pub const DEFAULT_CALIBRATION_PX: u32 = 3;

/// One sensor's result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reading {
    /// First obstruction found this many pixels from the cell center.
    Detected(u32),
    /// Ran off the surface without meeting an obstruction, or the sensor
    /// is disabled.
    #[default]
    NoDetection,
}

impl Reading {
    /// The pixel offset, if anything was detected.
    pub fn offset(self) -> Option<u32> {
        match self {
            Reading::Detected(d) => Some(d),
            Reading::NoDetection => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Detected(d) => write!(f, "{d}px"),
            Reading::NoDetection => f.write_str("-"),
        }
    }
}

/// Readings from all four sensors, indexed by [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SensorReading {
    readings: [Reading; 4],
}

impl SensorReading {
    /// The reading for `direction`.
    pub fn get(&self, direction: Direction) -> Reading {
        self.readings[direction.index()]
    }

    fn set(&mut self, direction: Direction, reading: Reading) {
        self.readings[direction.index()] = reading;
    }

    /// Iterate in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Reading)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Number of sensors that detected something.
    pub fn detections(&self) -> usize {
        self.readings
            .iter()
            .filter(|r| matches!(r, Reading::Detected(_)))
            .count()
    }
}

/// Which of the four sensors are fitted and enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorMask {
    enabled: [bool; 4],
}

impl SensorMask {
    /// All four sensors on.
    pub const fn all() -> Self {
        Self { enabled: [true; 4] }
    }

    /// All four sensors off.
    pub const fn none() -> Self {
        Self {
            enabled: [false; 4],
        }
    }

    /// Return a copy with `direction` switched on or off.
    pub const fn with(mut self, direction: Direction, enabled: bool) -> Self {
        self.enabled[direction.index()] = enabled;
        self
    }

    /// Whether the sensor facing `direction` is on.
    pub const fn is_enabled(&self, direction: Direction) -> bool {
        self.enabled[direction.index()]
    }
}

impl Default for SensorMask {
    fn default() -> Self {
        Self::all()
    }
}

/// Sensor configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorConfig {
    /// Enabled sensors. Default: all four.
    pub mask: SensorMask,
    /// Pixels subtracted from a hit before locating its wall segment.
    /// Default: [`DEFAULT_CALIBRATION_PX`].
    pub calibration_px: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mask: SensorMask::all(),
            calibration_px: DEFAULT_CALIBRATION_PX,
        }
    }
}

/// Result of [`SensorSimulator::sense`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SenseOutcome {
    /// Raw readings.
    pub reading: SensorReading,
    /// Segments that changed from open to wall during this sweep.
    pub newly_marked: SmallVec<[WallCoord; 4]>,
}

/// Casts the four sensor rays and writes detected walls into a grid.
#[derive(Clone, Debug)]
pub struct SensorSimulator {
    geometry: GridGeometry,
    config: SensorConfig,
}

impl SensorSimulator {
    /// Create a simulator for surfaces matching `geometry`.
    pub fn new(geometry: GridGeometry, config: SensorConfig) -> Self {
        Self { geometry, config }
    }

    /// The pixel/cell geometry in use.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// The sensor configuration in use.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    fn check_surface(&self, surface: &dyn OccupancySurface) -> Result<(), SenseError> {
        let expected = (self.geometry.surface_width(), self.geometry.surface_height());
        let actual = (surface.width(), surface.height());
        if expected != actual {
            return Err(SenseError::SurfaceMismatch { expected, actual });
        }
        Ok(())
    }

    /// Pixel `offset` steps from `origin` toward `direction`. The offset
    /// must not exceed [`Self::max_offset`].
    fn ray_pixel(&self, origin: PixelCoord, direction: Direction, offset: u32) -> PixelCoord {
        match direction {
            Direction::Left => PixelCoord::new(origin.x - offset, origin.y),
            Direction::Right => PixelCoord::new(origin.x + offset, origin.y),
            Direction::Up => PixelCoord::new(origin.x, origin.y - offset),
            Direction::Down => PixelCoord::new(origin.x, origin.y + offset),
        }
    }

    /// Largest offset that stays on the surface.
    fn max_offset(&self, origin: PixelCoord, direction: Direction) -> u32 {
        match direction {
            Direction::Left => origin.x,
            Direction::Right => self.geometry.surface_width() - 1 - origin.x,
            Direction::Up => origin.y,
            Direction::Down => self.geometry.surface_height() - 1 - origin.y,
        }
    }

    fn cast(
        &self,
        surface: &dyn OccupancySurface,
        origin: PixelCoord,
        direction: Direction,
    ) -> Reading {
        (0..=self.max_offset(origin, direction))
            .find(|&offset| surface.is_obstruction(self.ray_pixel(origin, direction, offset)))
            .map_or(Reading::NoDetection, Reading::Detected)
    }

    /// Cast every enabled ray from `cell` without touching any grid.
    pub fn scan(
        &self,
        surface: &dyn OccupancySurface,
        cell: GridCoord,
    ) -> Result<SensorReading, SenseError> {
        self.check_surface(surface)?;
        let origin = self
            .geometry
            .cell_to_pixel(cell)
            .ok_or(SenseError::CellOutOfBounds { cell })?;
        let mut reading = SensorReading::default();
        for direction in Direction::ALL {
            if self.config.mask.is_enabled(direction) {
                reading.set(direction, self.cast(surface, origin, direction));
            }
        }
        Ok(reading)
    }

    /// The wall segment a hit `offset` pixels from `cell` belongs to.
    ///
    /// Returns `None` for a zero offset: the sensing origin is itself inside
    /// a wall line and the hit cannot be placed.
    pub fn segment_for_hit(
        &self,
        cell: GridCoord,
        direction: Direction,
        offset: u32,
    ) -> Option<WallCoord> {
        if offset == 0 {
            return None;
        }
        let origin = self.geometry.cell_to_pixel(cell)?;
        let backed_off = offset
            .saturating_sub(self.config.calibration_px)
            .min(self.max_offset(origin, direction));
        let point = self.ray_pixel(origin, direction, backed_off);
        let hit_cell = self.geometry.pixel_to_cell(point);
        Some(WallGrid::segment_between(hit_cell, direction))
    }

    /// Scan from `cell` and mark every detected wall in `grid`.
    ///
    /// Each enabled direction marks at most one segment. Rays that run off
    /// the surface mark nothing.
    pub fn sense(
        &self,
        surface: &dyn OccupancySurface,
        cell: GridCoord,
        grid: &mut WallGrid,
    ) -> Result<SenseOutcome, SenseError> {
        if !grid.contains(cell) {
            return Err(SenseError::CellOutOfBounds { cell });
        }
        let reading = self.scan(surface, cell)?;
        let mut newly_marked = SmallVec::new();
        for (direction, r) in reading.iter() {
            let Some(offset) = r.offset() else {
                log::trace!("sensor {direction} at {cell}: no detection");
                continue;
            };
            let Some(segment) = self.segment_for_hit(cell, direction, offset) else {
                log::trace!("sensor {direction} at {cell}: origin inside wall");
                continue;
            };
            let changed = grid.mark_wall_segment(segment)?;
            log::trace!(
                "sensor {direction} at {cell}: hit at {offset}px -> {segment} (new: {changed})"
            );
            if changed {
                newly_marked.push(segment);
            }
        }
        Ok(SenseOutcome {
            reading,
            newly_marked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelSurface;
    use micromaze_space::NodeState;

    const CELL_PX: u32 = 20;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    /// A 3x1 maze, 20 px cells, with a 2 px border and one interior wall
    /// between cells 1 and 2.
    fn corridor() -> (PixelSurface, SensorSimulator, WallGrid) {
        let mut s = PixelSurface::blank(3 * CELL_PX, CELL_PX, 3).unwrap();
        s.fill_rect(0, 0, 60, 2, 255);
        s.fill_rect(0, 18, 60, 2, 255);
        s.fill_rect(0, 0, 2, 20, 255);
        s.fill_rect(58, 0, 2, 20, 255);
        s.fill_rect(38, 0, 4, 20, 255);
        let geometry = GridGeometry::new(3, 1, 60, 20).unwrap();
        let sim = SensorSimulator::new(geometry, SensorConfig::default());
        let grid = WallGrid::new(3, 1, c(0, 0), c(2, 0)).unwrap();
        (s, sim, grid)
    }

    #[test]
    fn readings_are_first_obstruction_offsets() {
        let (s, sim, _) = corridor();
        // Cell 0 center is (10, 10).
        let r = sim.scan(&s, c(0, 0)).unwrap();
        assert_eq!(r.get(Direction::Left), Reading::Detected(9));
        assert_eq!(r.get(Direction::Right), Reading::Detected(28));
        assert_eq!(r.get(Direction::Up), Reading::Detected(9));
        assert_eq!(r.get(Direction::Down), Reading::Detected(8));
        assert_eq!(r.detections(), 4);
    }

    #[test]
    fn far_wall_is_attributed_to_the_right_segment() {
        let (s, sim, mut grid) = corridor();
        let out = sim.sense(&s, c(0, 0), &mut grid).unwrap();
        // Only the interior wall between cells 1 and 2 is new; the rest
        // are border nodes that were already walls.
        let seg = WallGrid::segment_between(c(1, 0), Direction::Right);
        assert_eq!(out.newly_marked.as_slice(), &[seg]);
        assert_eq!(grid.state(seg), NodeState::Wall);
        assert!(grid.is_passable(c(0, 0), Direction::Right));
    }

    #[test]
    fn resensing_is_idempotent() {
        let (s, sim, mut grid) = corridor();
        sim.sense(&s, c(1, 0), &mut grid).unwrap();
        let snapshot = grid.clone();
        let out = sim.sense(&s, c(1, 0), &mut grid).unwrap();
        assert!(out.newly_marked.is_empty());
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn clear_ray_is_no_detection() {
        let s = PixelSurface::blank(60, 20, 1).unwrap();
        let geometry = GridGeometry::new(3, 1, 60, 20).unwrap();
        let sim = SensorSimulator::new(geometry, SensorConfig::default());
        let mut grid = WallGrid::new(3, 1, c(0, 0), c(2, 0)).unwrap();
        let out = sim.sense(&s, c(1, 0), &mut grid).unwrap();
        assert_eq!(out.reading.get(Direction::Right), Reading::NoDetection);
        assert_eq!(out.reading.detections(), 0);
        assert!(out.newly_marked.is_empty());
        assert!(grid.is_passable(c(1, 0), Direction::Right));
    }

    #[test]
    fn disabled_sensor_marks_nothing() {
        let (s, _, mut grid) = corridor();
        let geometry = GridGeometry::new(3, 1, 60, 20).unwrap();
        let config = SensorConfig {
            mask: SensorMask::all().with(Direction::Right, false),
            ..SensorConfig::default()
        };
        let sim = SensorSimulator::new(geometry, config);
        let out = sim.sense(&s, c(1, 0), &mut grid).unwrap();
        assert_eq!(out.reading.get(Direction::Right), Reading::NoDetection);
        assert!(out.newly_marked.is_empty());
        assert!(grid.is_passable(c(1, 0), Direction::Right));
    }

    #[test]
    fn origin_inside_wall_reads_zero_and_marks_nothing() {
        let mut s = PixelSurface::blank(20, 20, 1).unwrap();
        s.paint(PixelCoord::new(10, 10), 1);
        let geometry = GridGeometry::new(1, 1, 20, 20).unwrap();
        let sim = SensorSimulator::new(geometry, SensorConfig::default());
        let r = sim.scan(&s, c(0, 0)).unwrap();
        assert_eq!(r.get(Direction::Left), Reading::Detected(0));
        assert_eq!(sim.segment_for_hit(c(0, 0), Direction::Left, 0), None);
    }

    #[test]
    fn rejects_mismatched_surface_and_bad_cell() {
        let (_, sim, mut grid) = corridor();
        let wrong = PixelSurface::blank(30, 20, 1).unwrap();
        assert_eq!(
            sim.scan(&wrong, c(0, 0)),
            Err(SenseError::SurfaceMismatch {
                expected: (60, 20),
                actual: (30, 20)
            })
        );
        let (s, _, _) = corridor();
        assert_eq!(
            sim.sense(&s, c(3, 0), &mut grid),
            Err(SenseError::CellOutOfBounds { cell: c(3, 0) })
        );
    }
}
