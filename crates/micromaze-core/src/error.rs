//! Error type for the exploration step.
//!
//! Lower-level crates define their own errors (`SpaceError`, `SenseError`,
//! `ConfigError`); [`SolveError`] is what a caller driving the solver sees.

use crate::coord::GridCoord;
use std::error::Error;
use std::fmt;

/// Errors from a single solver step (`move_once`, `solve`, `solve_step`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Every segment around the current cell is a wall; there is no
    /// legal move.
    Stuck {
        /// The cell the agent is trapped in.
        cell: GridCoord,
    },
    /// The current cell has no known path to the goal. Walls are never
    /// removed, so the session cannot recover.
    GoalUnreachable {
        /// The cell the agent is standing in.
        cell: GridCoord,
    },
    /// The configured move budget ran out before the goal was reached.
    MoveLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
    /// A sensor sweep failed to record its observation.
    SensorFailed {
        /// The cell being sensed.
        cell: GridCoord,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stuck { cell } => write!(f, "stuck at {cell}: no passable neighbour"),
            Self::GoalUnreachable { cell } => {
                write!(f, "goal unreachable from {cell} under known walls")
            }
            Self::MoveLimitExceeded { limit } => {
                write!(f, "move limit of {limit} exceeded before reaching the goal")
            }
            Self::SensorFailed { cell, reason } => {
                write!(f, "sensor sweep at {cell} failed: {reason}")
            }
        }
    }
}

impl Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stuck_names_the_cell() {
        let e = SolveError::Stuck {
            cell: GridCoord::new(2, 3),
        };
        assert_eq!(e.to_string(), "stuck at (2, 3): no passable neighbour");
    }

    #[test]
    fn limit_is_reported() {
        let e = SolveError::MoveLimitExceeded { limit: 10 };
        assert!(e.to_string().contains("10"));
    }
}
