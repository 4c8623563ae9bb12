//! Player tokens: position, score, facing, magnet window and lives.
//!
//! A move resolves in a fixed order: bounds/obstacle check, commit the
//! position, pick up a magnet, collect the coin underfoot, then (if the
//! magnet is active, including when it was just picked up) sweep coins in
//! the magnet radius and spend one magnet move.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Direction, Facing, GameConfig, TokenId};

/// Legal directions from a cell. At most four, never heap-allocated.
pub type MoveSet = SmallVec<[Direction; 4]>;

/// A movable player piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    position: Coord,
    score: u32,
    facing: Facing,
    magnet_active: bool,
    magnet_moves_left: u32,
    magnet_duration: u32,
    magnet_radius: usize,
    lives: u32,
}

impl Token {
    /// Spawn a token at its start corner with full lives and no score.
    #[must_use]
    pub fn new(id: TokenId, config: &GameConfig) -> Self {
        Self {
            id,
            position: id.start_corner(config.board_size),
            score: 0,
            facing: id.default_facing(),
            magnet_active: false,
            magnet_moves_left: 0,
            magnet_duration: config.magnet_duration,
            magnet_radius: config.magnet_radius,
            lives: config.starting_lives,
        }
    }

    /// Place the token somewhere other than its start corner.
    #[must_use]
    pub fn with_position(mut self, position: Coord) -> Self {
        self.position = position;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        self.id.symbol()
    }

    #[must_use]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[must_use]
    pub fn magnet_active(&self) -> bool {
        self.magnet_active
    }

    #[must_use]
    pub fn magnet_moves_left(&self) -> u32 {
        self.magnet_moves_left
    }

    #[must_use]
    pub fn magnet_radius(&self) -> usize {
        self.magnet_radius
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    // === Movement ===

    /// Try to step one cell in `direction`.
    ///
    /// Horizontal directions update facing even when the step is illegal.
    /// Returns `false` without touching position, score or the board if
    /// the target is off the board or an obstacle.
    pub fn try_move(&mut self, direction: Direction, board: &mut Board) -> bool {
        if let Some(facing) = direction.facing() {
            self.facing = facing;
        }

        let Some(target) = board.neighbor(self.position, direction) else {
            return false;
        };
        self.position = target;

        if board.remove_magnet(target) {
            self.magnet_active = true;
            self.magnet_moves_left = self.magnet_duration;
            debug!("{} picked up a magnet at {}", self.id, target);
        }

        if let Some(value) = board.remove_coin(target) {
            self.score += value;
        }

        if self.magnet_active {
            let swept = board.collect_coins_in_radius(target, self.magnet_radius);
            self.score += swept.len() as u32;
            self.magnet_moves_left = self.magnet_moves_left.saturating_sub(1);
            if self.magnet_moves_left == 0 {
                self.magnet_active = false;
            }
        }

        true
    }

    /// Directions leading to an in-bounds, non-obstacle cell.
    ///
    /// Other tokens and the hazard do not block movement.
    #[must_use]
    pub fn available_moves(&self, board: &Board) -> MoveSet {
        Direction::ALL
            .into_iter()
            .filter(|&d| board.neighbor(self.position, d).is_some())
            .collect()
    }

    // === Lives ===

    /// Lose a life and respawn at the start corner with default facing.
    ///
    /// Returns the remaining lives.
    pub fn hit(&mut self, board_size: usize) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.position = self.id.start_corner(board_size);
        self.facing = self.id.default_facing();
        self.lives
    }

    /// Grant extra lives. Returns the new total.
    pub fn add_life(&mut self, amount: u32) -> u32 {
        self.lives += amount;
        self.lives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_at(row: usize, col: usize) -> Token {
        Token::new(TokenId::A, &GameConfig::default()).with_position(Coord::new(row, col))
    }

    #[test]
    fn test_spawn_state() {
        let config = GameConfig::default();
        let b = Token::new(TokenId::B, &config);
        assert_eq!(b.position(), Coord::new(7, 7));
        assert_eq!(b.facing(), Facing::Left);
        assert_eq!(b.lives(), 3);
        assert_eq!(b.score(), 0);
        assert!(!b.magnet_active());
        assert_eq!(b.symbol(), 'B');
    }

    #[test]
    fn test_move_onto_coin() {
        let mut board = Board::empty(8).with_coin(Coord::new(0, 1), 1);
        let mut token = token_at(0, 0);

        assert!(token.try_move(Direction::Right, &mut board));
        assert_eq!(token.position(), Coord::new(0, 1));
        assert_eq!(token.score(), 1);
        assert!(!board.is_coin(Coord::new(0, 1)));
    }

    #[test]
    fn test_coin_value_counts() {
        let mut board = Board::empty(8).with_coin(Coord::new(1, 0), 5);
        let mut token = token_at(0, 0);
        token.try_move(Direction::Down, &mut board);
        assert_eq!(token.score(), 5);
    }

    #[test]
    fn test_blocked_move_changes_facing_only() {
        let mut board = Board::empty(8).with_obstacle(Coord::new(3, 2));
        let mut token = token_at(3, 3);
        let before_board = board.clone();

        assert!(!token.try_move(Direction::Left, &mut board));
        assert_eq!(token.position(), Coord::new(3, 3));
        assert_eq!(token.facing(), Facing::Left);
        assert_eq!(token.score(), 0);
        assert_eq!(board, before_board);
    }

    #[test]
    fn test_out_of_bounds_move() {
        let mut board = Board::empty(8);
        let mut token = token_at(0, 0);
        assert!(!token.try_move(Direction::Up, &mut board));
        assert!(!token.try_move(Direction::Left, &mut board));
        assert_eq!(token.position(), Coord::new(0, 0));
    }

    #[test]
    fn test_magnet_sweeps_on_pickup_move() {
        let mut board = Board::empty(8)
            .with_magnet(Coord::new(1, 0))
            .with_coin(Coord::new(2, 0), 1)
            .with_coin(Coord::new(2, 1), 1)
            .with_coin(Coord::new(3, 0), 1);
        let mut token = token_at(0, 0);

        assert!(token.try_move(Direction::Down, &mut board));
        assert!(token.magnet_active());
        assert_eq!(token.magnet_moves_left(), 2);
        assert_eq!(token.score(), 2);
        assert!(!board.is_magnet(Coord::new(1, 0)));
        assert!(board.is_coin(Coord::new(3, 0)));
    }

    #[test]
    fn test_magnet_expires_after_duration() {
        let mut board = Board::empty(8).with_magnet(Coord::new(0, 1));
        let mut token = token_at(0, 0);

        token.try_move(Direction::Right, &mut board);
        assert_eq!(token.magnet_moves_left(), 2);
        token.try_move(Direction::Right, &mut board);
        assert_eq!(token.magnet_moves_left(), 1);
        assert!(token.magnet_active());
        token.try_move(Direction::Right, &mut board);
        assert_eq!(token.magnet_moves_left(), 0);
        assert!(!token.magnet_active());

        // Later coins in range are not swept.
        board.place_coin(Coord::new(1, 4), 1);
        token.try_move(Direction::Right, &mut board);
        assert!(board.is_coin(Coord::new(1, 4)));
    }

    #[test]
    fn test_second_magnet_refreshes_window() {
        let mut board = Board::empty(8)
            .with_magnet(Coord::new(0, 1))
            .with_magnet(Coord::new(0, 2));
        let mut token = token_at(0, 0);

        token.try_move(Direction::Right, &mut board);
        token.try_move(Direction::Right, &mut board);
        assert_eq!(token.magnet_moves_left(), 2);
    }

    #[test]
    fn test_available_moves() {
        let board = Board::empty(8).with_obstacle(Coord::new(0, 1));
        let token = token_at(0, 0);
        let moves = token.available_moves(&board);
        assert_eq!(moves.as_slice(), &[Direction::Down]);

        let centre = token_at(4, 4);
        assert_eq!(centre.available_moves(&board).len(), 4);
    }

    #[test]
    fn test_hit_resets_position_and_facing() {
        let config = GameConfig::default();
        let mut token = Token::new(TokenId::B, &config).with_position(Coord::new(3, 3));
        let mut board = Board::empty(8);
        token.try_move(Direction::Right, &mut board);
        assert_eq!(token.facing(), Facing::Right);

        assert_eq!(token.hit(8), 2);
        assert_eq!(token.position(), Coord::new(7, 7));
        assert_eq!(token.facing(), Facing::Left);

        token.hit(8);
        token.hit(8);
        assert!(token.is_out_of_lives());
        assert_eq!(token.hit(8), 0);
    }

    #[test]
    fn test_add_life() {
        let mut token = token_at(0, 0);
        assert_eq!(token.add_life(2), 5);
    }
}
