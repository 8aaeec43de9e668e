//! Reference distance oracle.

use crate::fixtures::MazeLayout;
use micromaze_core::{Direction, GridCoord};
use std::collections::HashMap;

/// Hop distance from every cell to `goal` through `layout`, row-major.
///
/// Works on the layout's wall set rather than a `WallGrid`, and expands the
/// frontier a whole layer at a time, so it shares no code path with the
/// flood fill it checks.
pub fn reference_distances(layout: &MazeLayout, goal: GridCoord) -> Vec<Option<u32>> {
    let (w, h) = (layout.width(), layout.height());
    let mut dist: HashMap<GridCoord, u32> = HashMap::new();
    if goal.in_bounds(w, h) {
        dist.insert(goal, 0);
        let mut layer = vec![goal];
        let mut depth = 0;
        while !layer.is_empty() {
            depth += 1;
            let mut next_layer = Vec::new();
            for cell in layer {
                for direction in Direction::ALL {
                    if layout.has_wall(cell, direction) {
                        continue;
                    }
                    let next = cell.step(direction);
                    if !dist.contains_key(&next) {
                        dist.insert(next, depth);
                        next_layer.push(next);
                    }
                }
            }
            layer = next_layer;
        }
    }

    let mut out = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            out.push(dist.get(&GridCoord::new(x, y)).copied());
        }
    }
    out
}
