//! Running counters for an exploration session.
//!
//! [`SessionMetrics`] accumulates over the whole run and is updated after
//! every move, so a caller driving `solve_step` can sample it per tick.

/// Counters collected while exploring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    /// Moves made.
    pub moves: u64,
    /// Flood fills computed, including the one at session start.
    pub flood_fills: u64,
    /// Interior wall segments discovered by the sensors.
    pub walls_discovered: u64,
    /// Individual sensor readings that detected an obstruction.
    pub sensor_detections: u64,
    /// Moves that entered a cell visited before.
    pub revisits: u64,
    /// Cells with a known path to the goal after the latest flood fill.
    pub last_reached_cells: usize,
}

impl SessionMetrics {
    /// Fraction of moves that revisited a cell, or 0 before the first move.
    pub fn revisit_ratio(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.revisits as f64 / self.moves as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SessionMetrics::default();
        assert_eq!(m.moves, 0);
        assert_eq!(m.flood_fills, 0);
        assert_eq!(m.walls_discovered, 0);
        assert_eq!(m.sensor_detections, 0);
        assert_eq!(m.revisits, 0);
        assert_eq!(m.last_reached_cells, 0);
        assert_eq!(m.revisit_ratio(), 0.0);
    }

    #[test]
    fn revisit_ratio() {
        let m = SessionMetrics {
            moves: 8,
            revisits: 2,
            ..SessionMetrics::default()
        };
        assert_eq!(m.revisit_ratio(), 0.25);
    }
}
