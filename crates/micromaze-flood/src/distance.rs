//! Per-cell distance to the goal.

use micromaze_core::GridCoord;
use std::cmp::Ordering;
use std::fmt;

/// Hop distance to the goal, or `Unreached` when no known path exists.
///
/// `Unreached` orders after every reached distance, so "smaller is closer"
/// holds across both variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    /// Reachable in this many moves.
    Reached(u32),
    /// No path under the known walls.
    #[default]
    Unreached,
}

impl Distance {
    /// The hop count, if reached.
    pub fn hops(self) -> Option<u32> {
        match self {
            Distance::Reached(n) => Some(n),
            Distance::Unreached => None,
        }
    }

    /// True for `Reached`.
    pub fn is_reached(self) -> bool {
        matches!(self, Distance::Reached(_))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Reached(a), Distance::Reached(b)) => a.cmp(b),
            (Distance::Reached(_), Distance::Unreached) => Ordering::Less,
            (Distance::Unreached, Distance::Reached(_)) => Ordering::Greater,
            (Distance::Unreached, Distance::Unreached) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reached(n) => write!(f, "{n}"),
            Distance::Unreached => f.write_str("."),
        }
    }
}

/// Distances for every cell of a `width x height` maze, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    width: u32,
    height: u32,
    goal: GridCoord,
    cells: Vec<Distance>,
}

impl DistanceField {
    /// A field with every cell unreached.
    pub(crate) fn unreached(width: u32, height: u32, goal: GridCoord) -> Self {
        Self {
            width,
            height,
            goal,
            cells: vec![Distance::Unreached; width as usize * height as usize],
        }
    }

    pub(crate) fn index(&self, cell: GridCoord) -> Option<usize> {
        cell.in_bounds(self.width, self.height)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    pub(crate) fn set(&mut self, cell: GridCoord, distance: Distance) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = distance;
        }
    }

    /// Maze width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Maze height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The cell this field is rooted at.
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Distance of `cell`. Cells outside the maze are `Unreached`.
    pub fn get(&self, cell: GridCoord) -> Distance {
        self.index(cell).map_or(Distance::Unreached, |i| self.cells[i])
    }

    /// Number of cells with a known path to the goal.
    pub fn reached_count(&self) -> usize {
        self.cells.iter().filter(|d| d.is_reached()).count()
    }

    /// Largest reached distance.
    pub fn max_distance(&self) -> Option<u32> {
        self.cells.iter().filter_map(|d| d.hops()).max()
    }

    /// Row-major view of all distances.
    pub fn as_slice(&self) -> &[Distance] {
        &self.cells
    }
}

impl fmt::Display for DistanceField {
    /// One row per line, right-aligned columns, `.` for unreached cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_distance().map_or(1, |m| m.to_string().len());
        for row in self.cells.chunks(self.width as usize) {
            let line: Vec<String> = row
                .iter()
                .map(|d| format!("{:>width$}", d.to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
