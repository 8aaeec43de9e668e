//! The four cardinal directions.

use std::fmt;

/// A cardinal direction in screen orientation (`y` grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Toward decreasing `x`.
    Left = 0,
    /// Toward increasing `x`.
    Right = 1,
    /// Toward decreasing `y`.
    Up = 2,
    /// Toward increasing `y`.
    Down = 3,
}

impl Direction {
    /// All directions in exploration order: left, right, up, down.
    ///
    /// Flood fill and move generation both iterate in this order, so it
    /// fixes tie-breaking throughout the workspace.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Index into per-direction arrays, matching [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for left and right.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
