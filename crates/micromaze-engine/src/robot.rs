//! The robot's position and movement history.

use micromaze_core::GridCoord;

/// Where the robot is, where it just came from, and every cell it has
/// stood in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotState {
    width: u32,
    height: u32,
    current: GridCoord,
    previous: GridCoord,
    history: Vec<GridCoord>,
    visits: Vec<u32>,
}

impl RobotState {
    /// A robot standing at `start` in a `width x height` maze.
    pub(crate) fn new(start: GridCoord, width: u32, height: u32) -> Self {
        let mut state = Self {
            width,
            height,
            current: start,
            previous: start,
            history: vec![start],
            visits: vec![0; width as usize * height as usize],
        };
        state.bump(start);
        state
    }

    fn index(&self, cell: GridCoord) -> Option<usize> {
        cell.in_bounds(self.width, self.height)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    fn bump(&mut self, cell: GridCoord) -> u32 {
        match self.index(cell) {
            Some(i) => {
                self.visits[i] += 1;
                self.visits[i]
            }
            None => 0,
        }
    }

    /// Step to `to`. Returns true if `to` had been visited before.
    pub(crate) fn advance(&mut self, to: GridCoord) -> bool {
        self.previous = self.current;
        self.current = to;
        self.history.push(to);
        self.bump(to) > 1
    }

    /// The cell the robot occupies.
    pub fn current(&self) -> GridCoord {
        self.current
    }

    /// The cell occupied before the last move. Equal to the start cell
    /// until the first move.
    pub fn previous(&self) -> GridCoord {
        self.previous
    }

    /// Every cell occupied so far, starting with the start cell.
    pub fn history(&self) -> &[GridCoord] {
        &self.history
    }

    /// Number of moves made.
    pub fn moves(&self) -> u64 {
        self.history.len() as u64 - 1
    }

    /// Whether the robot has ever stood in `cell`.
    pub fn has_visited(&self, cell: GridCoord) -> bool {
        self.visit_count(cell) > 0
    }

    /// How many times the robot has entered `cell`, counting the start.
    pub fn visit_count(&self, cell: GridCoord) -> u32 {
        self.index(cell).map_or(0, |i| self.visits[i])
    }

    /// Number of distinct cells visited.
    pub fn distinct_visited(&self) -> usize {
        self.visits.iter().filter(|&&n| n > 0).count()
    }
}
