//! Breadth-first search to the nearest pickup.
//!
//! Passable cells form an unweighted graph. The frontier is FIFO, cells
//! are marked visited when first enqueued, and neighbours are expanded in
//! `Direction::ALL` order, so among equally short paths the one whose
//! steps come earliest in `up, down, left, right` order wins.
//!
//! The start cell is never a goal, even if it holds a requested pickup.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::board::Board;
use crate::core::{Coord, Direction};

/// Which pickups count as a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetKinds {
    pub coins: bool,
    pub magnets: bool,
}

impl TargetKinds {
    pub const COINS: TargetKinds = TargetKinds { coins: true, magnets: false };
    pub const MAGNETS: TargetKinds = TargetKinds { coins: false, magnets: true };
    pub const ANY: TargetKinds = TargetKinds { coins: true, magnets: true };

    /// Check whether `coord` currently holds a requested pickup.
    #[must_use]
    pub fn matches(self, board: &Board, coord: Coord) -> bool {
        (self.coins && board.is_coin(coord)) || (self.magnets && board.is_magnet(coord))
    }
}

/// Shortest path from `start` to the nearest cell holding a requested
/// pickup.
///
/// Returns the steps in order, or an empty vector if no such cell is
/// reachable.
#[must_use]
pub fn find_path(start: Coord, board: &Board, targets: TargetKinds) -> Vec<Direction> {
    if !board.in_bounds(start) {
        return Vec::new();
    }

    // cell -> (previous cell, step taken from it)
    let mut parents: FxHashMap<Coord, (Coord, Direction)> = FxHashMap::default();
    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if cell != start && targets.matches(board, cell) {
            return rebuild(&parents, start, cell);
        }

        for direction in Direction::ALL {
            let Some(next) = board.neighbor(cell, direction) else {
                continue;
            };
            if visited.insert(next) {
                parents.insert(next, (cell, direction));
                frontier.push_back(next);
            }
        }
    }

    Vec::new()
}

/// First step toward the nearest requested pickup.
#[must_use]
pub fn first_step(start: Coord, board: &Board, targets: TargetKinds) -> Option<Direction> {
    find_path(start, board, targets).first().copied()
}

fn rebuild(parents: &FxHashMap<Coord, (Coord, Direction)>, start: Coord, goal: Coord) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut cell = goal;
    while cell != start {
        let Some(&(previous, direction)) = parents.get(&cell) else {
            break;
        };
        path.push(direction);
        cell = previous;
    }
    path.reverse();
    path
}

/// Apply a path to `start`, returning the cells visited after each step.
///
/// Stops early at the first illegal step.
#[must_use]
pub fn walk(start: Coord, board: &Board, path: &[Direction]) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(path.len());
    let mut cell = start;
    for &direction in path {
        match board.neighbor(cell, direction) {
            Some(next) => {
                cells.push(next);
                cell = next;
            }
            None => break,
        }
    }
    cells
}
