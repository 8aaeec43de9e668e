//! Seeded maze generators.

use crate::fixtures::MazeLayout;
use micromaze_core::{Direction, GridCoord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A perfect maze (exactly one path between any two cells) carved by a
/// randomised depth-first backtracker from `(0, 0)`.
///
/// The same seed always produces the same layout.
pub fn perfect_maze(width: u32, height: u32, seed: u64) -> MazeLayout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut layout = MazeLayout::closed(width, height);
    if width == 0 || height == 0 {
        return layout;
    }
    let idx = |c: GridCoord| c.y as usize * width as usize + c.x as usize;
    let mut visited = vec![false; width as usize * height as usize];
    let mut stack = vec![GridCoord::new(0, 0)];
    visited[0] = true;

    while let Some(&cell) = stack.last() {
        let options: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| {
                let n = cell.step(d);
                n.in_bounds(width, height) && !visited[idx(n)]
            })
            .collect();
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let direction = options[rng.random_range(0..options.len())];
        let next = cell.step(direction);
        layout.remove_wall(cell, direction);
        visited[idx(next)] = true;
        stack.push(next);
    }
    layout
}

/// An open layout where each interior segment is walled with probability
/// `density`. The result may leave cells disconnected.
pub fn random_walls(width: u32, height: u32, density: f64, seed: u64) -> MazeLayout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut layout = MazeLayout::open(width, height);
    let p = density.clamp(0.0, 1.0);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let cell = GridCoord::new(x, y);
            for direction in [Direction::Right, Direction::Down] {
                if rng.random_bool(p) {
                    layout.add_wall(cell, direction);
                }
            }
        }
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_maze_is_deterministic() {
        assert_eq!(perfect_maze(8, 6, 42), perfect_maze(8, 6, 42));
        assert_ne!(perfect_maze(8, 6, 42), perfect_maze(8, 6, 43));
    }

    #[test]
    fn perfect_maze_is_a_spanning_tree() {
        let (w, h) = (9, 7);
        let m = perfect_maze(w, h, 7);
        let interior = MazeLayout::closed(w, h).wall_count();
        // A spanning tree over w*h cells has w*h - 1 open edges.
        assert_eq!(interior - m.wall_count(), (w * h - 1) as usize);
    }

    #[test]
    fn random_walls_respects_extremes() {
        assert_eq!(random_walls(5, 5, 0.0, 1).wall_count(), 0);
        assert_eq!(
            random_walls(5, 5, 1.0, 1).wall_count(),
            MazeLayout::closed(5, 5).wall_count()
        );
    }
}
