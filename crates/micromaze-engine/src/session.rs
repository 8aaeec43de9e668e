//! The exploration session: sense, flood, move, repeat.

use crate::config::{ConfigError, SessionConfig};
use crate::metrics::SessionMetrics;
use crate::robot::RobotState;
use crate::solver;
use micromaze_core::{Direction, GridCoord, SolveError, WallCoord};
use micromaze_flood::{DistanceField, FloodFill};
use micromaze_sense::{OccupancySurface, SenseOutcome, SensorReading, SensorSimulator};
use micromaze_space::WallGrid;
use smallvec::SmallVec;

/// What one call to [`ExplorationSession::move_once`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Cell before the move.
    pub from: GridCoord,
    /// Cell after the move. Equal to `from` when no move was made.
    pub to: GridCoord,
    /// Direction moved, or `None` if the robot was already at the goal.
    pub direction: Option<Direction>,
    /// Sensor readings taken at `to`.
    pub reading: SensorReading,
    /// Wall segments discovered by those readings.
    pub newly_marked: SmallVec<[WallCoord; 4]>,
    /// Whether `to` is the goal.
    pub goal_reached: bool,
}

/// One owned exploration run over a fixed surface.
///
/// Construction senses the start cell and computes the first distance
/// field, so a fresh session is always ready to move. The surface is read
/// by the simulated sensors only; nothing else in the session looks at it.
#[derive(Debug)]
pub struct ExplorationSession<S> {
    config: SessionConfig,
    surface: S,
    sensor: SensorSimulator,
    grid: WallGrid,
    distances: DistanceField,
    robot: RobotState,
    metrics: SessionMetrics,
}

impl<S: OccupancySurface> ExplorationSession<S> {
    /// Validate `config` against `surface` and take the first reading.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`SessionConfig::validate`] or
    /// [`SessionConfig::geometry_for`], or
    /// [`ConfigError::InitialSense`] if the start cell cannot be sensed.
    pub fn new(config: SessionConfig, surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let geometry = config.geometry_for(&surface)?;
        let mut grid = WallGrid::new(config.width, config.height, config.start, config.goal)?;
        let sensor = SensorSimulator::new(geometry, config.sensor);
        let outcome = sensor
            .sense(&surface, config.start, &mut grid)
            .map_err(ConfigError::InitialSense)?;
        let distances = FloodFill::compute(&grid, config.goal);
        let robot = RobotState::new(config.start, config.width, config.height);

        let mut metrics = SessionMetrics::default();
        record_sense(&mut metrics, &outcome);
        record_flood(&mut metrics, &distances);
        log::debug!(
            "session {}x{} from {} to {}: {} walls seen at start",
            config.width,
            config.height,
            config.start,
            config.goal,
            outcome.newly_marked.len()
        );

        Ok(Self {
            config,
            surface,
            sensor,
            grid,
            distances,
            robot,
            metrics,
        })
    }

    /// Make one move toward the goal.
    ///
    /// Picks the next cell, senses there, recomputes the distance field and
    /// advances the robot. When already at the goal this does nothing and
    /// reports `direction: None`.
    ///
    /// # Errors
    ///
    /// - [`SolveError::MoveLimitExceeded`] once `max_moves` moves are spent.
    /// - [`SolveError::Stuck`] if every segment around the robot is a wall.
    /// - [`SolveError::GoalUnreachable`] if the robot can move but the
    ///   current cell has no known path to the goal.
    /// - [`SolveError::SensorFailed`] if the new cell cannot be sensed.
    ///
    /// On error the robot does not move.
    pub fn move_once(&mut self) -> Result<StepReport, SolveError> {
        let from = self.robot.current();
        if self.is_solved() {
            return Ok(StepReport {
                from,
                to: from,
                direction: None,
                reading: SensorReading::default(),
                newly_marked: SmallVec::new(),
                goal_reached: true,
            });
        }
        if let Some(limit) = self.config.max_moves {
            if self.robot.moves() >= limit {
                log::warn!("move limit {limit} reached at {from}");
                return Err(SolveError::MoveLimitExceeded { limit });
            }
        }

        let (direction, to) = solver::next_move(
            &self.grid,
            &self.distances,
            from,
            Some(self.robot.previous()),
        )
        .inspect_err(|e| log::warn!("{e}"))?;
        if !self.distances.get(from).is_reached() {
            log::warn!("goal {} unreachable from {from}", self.config.goal);
            return Err(SolveError::GoalUnreachable { cell: from });
        }

        let outcome = self
            .sensor
            .sense(&self.surface, to, &mut self.grid)
            .map_err(|e| SolveError::SensorFailed {
                cell: to,
                reason: e.to_string(),
            })?;
        self.distances = FloodFill::compute(&self.grid, self.config.goal);
        if self.robot.advance(to) {
            self.metrics.revisits += 1;
        }
        self.metrics.moves += 1;
        record_sense(&mut self.metrics, &outcome);
        record_flood(&mut self.metrics, &self.distances);

        let goal_reached = self.grid.is_end(to);
        log::debug!(
            "move {}: {from} -> {to} ({direction}), distance {}, {} new walls",
            self.robot.moves(),
            self.distances.get(to),
            outcome.newly_marked.len()
        );
        Ok(StepReport {
            from,
            to,
            direction: Some(direction),
            reading: outcome.reading,
            newly_marked: outcome.newly_marked,
            goal_reached,
        })
    }

    /// Move until the goal is reached and return the total move count.
    ///
    /// # Errors
    ///
    /// The first error from [`Self::move_once`].
    pub fn solve(&mut self) -> Result<u64, SolveError> {
        while !self.is_solved() {
            self.move_once()?;
        }
        log::info!(
            "reached {} in {} moves ({} walls discovered)",
            self.config.goal,
            self.robot.moves(),
            self.metrics.walls_discovered
        );
        Ok(self.robot.moves())
    }

    /// Make at most one move and report whether the goal is reached.
    ///
    /// Meant to be called once per tick by an outer loop such as a render
    /// loop. Calling it after the goal is reached is a no-op.
    ///
    /// # Errors
    ///
    /// As [`Self::move_once`].
    pub fn solve_step(&mut self) -> Result<bool, SolveError> {
        if self.is_solved() {
            return Ok(true);
        }
        self.move_once()?;
        let done = self.is_solved();
        if done {
            log::info!(
                "reached {} in {} moves",
                self.config.goal,
                self.robot.moves()
            );
        }
        Ok(done)
    }

    /// True when the robot stands on the goal.
    pub fn is_solved(&self) -> bool {
        self.grid.is_end(self.robot.current())
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The surface being explored.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Walls discovered so far.
    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    /// The distance field from the latest flood fill.
    pub fn distances(&self) -> &DistanceField {
        &self.distances
    }

    /// Robot position and history.
    pub fn robot(&self) -> &RobotState {
        &self.robot
    }

    /// Counters accumulated so far.
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// ASCII view of the known walls with the robot and its trail.
    pub fn render(&self) -> String {
        self.grid
            .render_with_robot(self.robot.current(), self.robot.history())
    }
}

fn record_sense(metrics: &mut SessionMetrics, outcome: &SenseOutcome) {
    metrics.sensor_detections += outcome.reading.detections() as u64;
    metrics.walls_discovered += outcome.newly_marked.len() as u64;
}

fn record_flood(metrics: &mut SessionMetrics, field: &DistanceField) {
    metrics.flood_fills += 1;
    metrics.last_reached_cells = field.reached_count();
}
