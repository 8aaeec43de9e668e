//! Move selection.
//!
//! Pure functions over a wall grid and distance field; the session calls
//! them once per move and applies the result.

use micromaze_core::{Direction, GridCoord, SolveError};
use micromaze_flood::DistanceField;
use micromaze_space::WallGrid;
use smallvec::SmallVec;

/// One candidate move: the direction taken and the cell it lands in.
pub type Candidate = (Direction, GridCoord);

/// Cells reachable in one move from `cell`, in left, right, up, down order.
///
/// A candidate exists where the segment next to `cell` is not a wall; the
/// landing cell is found by crossing that segment to the next cell center.
pub fn possible_moves(grid: &WallGrid, cell: GridCoord) -> SmallVec<[Candidate; 4]> {
    grid.open_neighbours(cell)
}

/// Move the candidate landing in `previous` to the back of the list,
/// keeping the order of the others.
pub fn demote_previous(candidates: &mut SmallVec<[Candidate; 4]>, previous: Option<GridCoord>) {
    let Some(previous) = previous else {
        return;
    };
    if let Some(pos) = candidates.iter().position(|&(_, c)| c == previous) {
        let back = candidates.remove(pos);
        candidates.push(back);
    }
}

/// The candidate with the smallest distance. Ties go to the earliest in
/// the list.
pub fn select_move(candidates: &[Candidate], field: &DistanceField) -> Option<Candidate> {
    candidates.iter().copied().min_by_key(|&(_, c)| field.get(c))
}

/// Choose the next move from `current`.
///
/// Going back to `previous` is chosen only when every other option is
/// strictly farther from the goal.
///
/// # Errors
///
/// [`SolveError::Stuck`] if no segment around `current` is passable.
pub fn next_move(
    grid: &WallGrid,
    field: &DistanceField,
    current: GridCoord,
    previous: Option<GridCoord>,
) -> Result<Candidate, SolveError> {
    let mut candidates = possible_moves(grid, current);
    demote_previous(&mut candidates, previous);
    select_move(&candidates, field).ok_or(SolveError::Stuck { cell: current })
}
