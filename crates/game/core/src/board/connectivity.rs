//! Base-to-base reachability.
//!
//! A wall placement is only legal if some orthogonal path between the two home
//! bases survives it. A single wall can complete a blockage built from several
//! earlier walls, so this cannot be checked locally and always runs over the
//! full candidate wall set.

use std::collections::VecDeque;

use super::{CELL_COUNT, home_base, index_of, orthogonal_neighbors};
use crate::state::{PlayerColor, WallSet};

/// Breadth-first search from Red's base over orthogonal edges, skipping cells
/// that hold an intact wall. Returns true iff Blue's base is reached.
pub fn has_path(walls: &WallSet) -> bool {
    let start = home_base(PlayerColor::Red);
    let goal = home_base(PlayerColor::Blue);

    let Some(start_index) = index_of(start) else {
        return false;
    };

    let mut visited = [false; CELL_COUNT];
    let mut frontier = VecDeque::with_capacity(CELL_COUNT);
    visited[start_index] = true;
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if cell == goal {
            return true;
        }

        for next in orthogonal_neighbors(cell) {
            if walls.blocks(next) {
                continue;
            }
            let Some(index) = index_of(next) else {
                continue;
            };
            if !visited[index] {
                visited[index] = true;
                frontier.push_back(next);
            }
        }
    }

    false
}
