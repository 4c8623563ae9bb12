//! The pursuing hazard.
//!
//! The hazard advances once every `move_delay` successful token moves. Each
//! time it is due it may re-target a random token, then steps to the legal
//! neighbour closest (Manhattan) to its target. Directions are shuffled
//! before comparison, and only a strictly closer candidate replaces the
//! current best, so ties go to a random direction.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Coord, Direction, GameRng, TokenId, TokenMap};

use super::token::Token;

/// The pursuing non-player entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    position: Coord,
    target: TokenId,
    move_delay: u32,
    move_counter: u32,
    retarget_probability: f64,
}

impl Hazard {
    /// Create a hazard at `position` chasing token A.
    #[must_use]
    pub fn new(position: Coord, move_delay: u32, retarget_probability: f64) -> Self {
        Self {
            position,
            target: TokenId::A,
            move_delay,
            move_counter: 0,
            retarget_probability,
        }
    }

    /// Pick a spawn cell.
    ///
    /// Prefers free cells (no obstacle, coin or magnet) inside
    /// `[margin, size-1-margin]` on both axes, then free cells anywhere
    /// except the start corners, then any passable cell. Returns `None`
    /// only when every cell is an obstacle, which a generated board never
    /// produces.
    pub fn pick_spawn(board: &Board, margin: usize, rng: &mut GameRng) -> Option<Coord> {
        let size = board.size();
        let inner = |c: &Coord| {
            c.row >= margin && c.col >= margin && c.row + margin < size && c.col + margin < size
        };

        let preferred: Vec<Coord> = board.cells().filter(|&c| board.is_free(c) && inner(&c)).collect();
        if let Some(&cell) = rng.choose(&preferred) {
            return Some(cell);
        }

        let free: Vec<Coord> = board
            .cells()
            .filter(|&c| board.is_free(c) && !board.is_start_corner(c))
            .collect();
        if let Some(&cell) = rng.choose(&free) {
            return Some(cell);
        }

        let passable: Vec<Coord> = board.cells().filter(|&c| board.is_passable(c)).collect();
        rng.choose(&passable).copied()
    }

    /// Builder: start with a different target.
    #[must_use]
    pub fn with_target(mut self, target: TokenId) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> TokenId {
        self.target
    }

    #[must_use]
    pub fn move_delay(&self) -> u32 {
        self.move_delay
    }

    #[must_use]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Exact cell-level collision with a token.
    #[must_use]
    pub fn collides_with(&self, token: &Token) -> bool {
        self.position == token.position()
    }

    /// Count one token turn and move if due.
    ///
    /// Returns the direction taken, or `None` if the hazard waited or had
    /// no legal neighbour.
    pub fn advance(&mut self, tokens: &TokenMap<Token>, board: &Board, rng: &mut GameRng) -> Option<Direction> {
        self.move_counter += 1;
        if self.move_counter < self.move_delay {
            return None;
        }
        self.move_counter = 0;

        if rng.gen_bool(self.retarget_probability) {
            self.target = TokenId::from_index(rng.gen_range_usize(0..2));
        }

        let goal = tokens[self.target].position();
        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        let mut best: Option<(Direction, Coord, usize)> = None;
        for direction in directions {
            let Some(next) = board.neighbor(self.position, direction) else {
                continue;
            };
            let distance = next.manhattan(goal);
            if best.map_or(true, |(_, _, d)| distance < d) {
                best = Some((direction, next, distance));
            }
        }

        let (direction, next, _) = best?;
        trace!("hazard {} -> {} chasing {}", self.position, next, self.target);
        self.position = next;
        Some(direction)
    }
}
