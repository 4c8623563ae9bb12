//! Turn sequencing and end-of-game rules.
//!
//! `TurnEngine` owns the board, both tokens and the hazard, and is the only
//! place they are mutated during play. A turn is:
//!
//! 1. The current token tries to move. An illegal move changes nothing and
//!    the turn stays with the same token.
//! 2. The hazard counts the turn and moves if it is due.
//! 3. Collisions are resolved: a token sharing the hazard's cell loses a
//!    life, respawns at its corner and becomes invulnerable for a while.
//! 4. The turn passes to the other token.
//! 5. End conditions are checked.

use log::{debug, info};
use std::time::Duration;

use crate::actors::{Hazard, Token};
use crate::board::Board;
use crate::core::{Direction, EndReason, GameConfig, GamePhase, GameRng, TokenId, TokenMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(TokenId),
    /// Equal scores when the coins ran out.
    Draw,
}

impl GameResult {
    /// Check if a token won.
    #[must_use]
    pub fn is_winner(&self, token: TokenId) -> bool {
        matches!(self, GameResult::Winner(t) if *t == token)
    }
}

/// Game state and the rules that advance it.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: GameConfig,
    board: Board,
    tokens: TokenMap<Token>,
    hazard: Hazard,
    current: TokenId,
    phase: GamePhase,
    end_reason: Option<EndReason>,
    invulnerable_since: TokenMap<Option<Duration>>,
    turn_number: u32,
    rng: GameRng,
}

impl TurnEngine {
    /// Start a game on `board` with fresh tokens at their corners.
    #[must_use]
    pub fn new(config: GameConfig, board: Board, hazard: Hazard, rng: GameRng) -> Self {
        let tokens = TokenMap::new(|id| Token::new(id, &config));
        Self::from_parts(config, board, tokens, hazard, rng)
    }

    /// Start a game from explicit pieces. Used for scripted scenarios.
    #[must_use]
    pub fn from_parts(config: GameConfig, board: Board, tokens: TokenMap<Token>, hazard: Hazard, rng: GameRng) -> Self {
        let mut engine = Self {
            config,
            board,
            tokens,
            hazard,
            current: TokenId::A,
            phase: GamePhase::InProgress,
            end_reason: None,
            invulnerable_since: TokenMap::with_value(None),
            turn_number: 1,
            rng,
        };
        engine.check_end();
        engine
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenMap<Token> {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id]
    }

    #[must_use]
    pub fn hazard(&self) -> &Hazard {
        &self.hazard
    }

    /// Token whose turn it is.
    #[must_use]
    pub fn current(&self) -> TokenId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Number of the turn in progress, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Check whether hits on `token` are currently ignored.
    #[must_use]
    pub fn is_invulnerable(&self, token: TokenId, now: Duration) -> bool {
        self.invulnerable_since[token]
            .is_some_and(|since| now.saturating_sub(since) <= self.config.invulnerability_window)
    }

    /// Outcome, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.end_reason? {
            EndReason::OutOfLives { loser } => Some(GameResult::Winner(loser.opponent())),
            EndReason::CoinsExhausted => {
                let a = self.tokens[TokenId::A].score();
                let b = self.tokens[TokenId::B].score();
                Some(match a.cmp(&b) {
                    std::cmp::Ordering::Greater => GameResult::Winner(TokenId::A),
                    std::cmp::Ordering::Less => GameResult::Winner(TokenId::B),
                    std::cmp::Ordering::Equal => GameResult::Draw,
                })
            }
        }
    }

    // === Turn flow ===

    /// Clear invulnerability whose window has elapsed.
    pub fn expire_invulnerability(&mut self, now: Duration) {
        let window = self.config.invulnerability_window;
        for (_, since) in self.invulnerable_since.iter_mut() {
            if since.is_some_and(|t| now.saturating_sub(t) > window) {
                *since = None;
            }
        }
    }

    /// Play one turn for the current token.
    ///
    /// Returns `false` if the game is not in progress or the move is
    /// illegal. In both cases nothing changes and the turn does not pass.
    pub fn apply_move(&mut self, direction: Direction, now: Duration) -> bool {
        if self.phase != GamePhase::InProgress {
            return false;
        }
        self.expire_invulnerability(now);

        let mover = self.current;
        if !self.tokens[mover].try_move(direction, &mut self.board) {
            debug!("{} cannot move {}", mover, direction);
            return false;
        }
        debug!(
            "turn {}: {} moved {} to {} (score {})",
            self.turn_number,
            mover,
            direction,
            self.tokens[mover].position(),
            self.tokens[mover].score()
        );

        self.hazard.advance(&self.tokens, &self.board, &mut self.rng);
        self.resolve_collisions(now);

        self.current = mover.opponent();
        self.turn_number += 1;
        self.check_end();
        true
    }

    /// Apply hazard hits. Returns the tokens that lost a life.
    fn resolve_collisions(&mut self, now: Duration) -> Vec<TokenId> {
        let mut hit = Vec::new();
        for id in TokenId::all() {
            if !self.hazard.collides_with(&self.tokens[id]) || self.is_invulnerable(id, now) {
                continue;
            }
            let remaining = self.tokens[id].hit(self.board.size());
            self.invulnerable_since[id] = Some(now);
            debug!("hazard caught {} at {}, {} lives left", id, self.hazard.position(), remaining);
            hit.push(id);
        }
        hit
    }

    /// Move to `Ended` if a token is out of lives or the coins are gone.
    /// Running out of lives takes precedence.
    pub fn check_end(&mut self) -> Option<EndReason> {
        if self.phase != GamePhase::InProgress {
            return self.end_reason;
        }

        let reason = if let Some(loser) = TokenId::all().find(|&id| self.tokens[id].is_out_of_lives()) {
            EndReason::OutOfLives { loser }
        } else if self.board.coins_exhausted() {
            EndReason::CoinsExhausted
        } else {
            return None;
        };

        self.phase = GamePhase::Ended;
        self.end_reason = Some(reason);
        info!("game over after {} turns: {:?}, result {:?}", self.turn_number - 1, reason, self.result());
        Some(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    fn engine_with(board: Board, hazard_at: Coord, delay: u32) -> TurnEngine {
        let config = GameConfig::default().with_hazard_move_delay(delay).with_hazard_retarget_probability(0.0);
        let hazard = Hazard::new(hazard_at, delay, 0.0);
        TurnEngine::new(config, board, hazard, GameRng::new(1))
    }

    #[test]
    fn test_game_result_is_winner() {
        assert!(GameResult::Winner(TokenId::B).is_winner(TokenId::B));
        assert!(!GameResult::Winner(TokenId::B).is_winner(TokenId::A));
        assert!(!GameResult::Draw.is_winner(TokenId::A));
    }

    #[test]
    fn test_legal_move_passes_turn() {
        let board = Board::empty(8).with_coin(Coord::new(5, 5), 1);
        let mut engine = engine_with(board, Coord::new(4, 4), 100);

        assert_eq!(engine.current(), TokenId::A);
        assert!(engine.apply_move(Direction::Right, Duration::ZERO));
        assert_eq!(engine.current(), TokenId::B);
        assert_eq!(engine.turn_number(), 2);
        assert_eq!(engine.hazard().move_counter(), 1);
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let board = Board::empty(8).with_coin(Coord::new(5, 5), 1);
        let mut engine = engine_with(board, Coord::new(4, 4), 1);

        assert!(!engine.apply_move(Direction::Up, Duration::ZERO));
        assert_eq!(engine.current(), TokenId::A);
        assert_eq!(engine.hazard().position(), Coord::new(4, 4));
        assert_eq!(engine.hazard().move_counter(), 0);
    }

    #[test]
    fn test_coins_exhausted_ends_game() {
        let board = Board::empty(8).with_coin(Coord::new(0, 1), 1);
        let mut engine = engine_with(board, Coord::new(4, 4), 100);

        assert!(engine.apply_move(Direction::Right, Duration::ZERO));
        assert_eq!(engine.phase(), GamePhase::Ended);
        assert_eq!(engine.end_reason(), Some(EndReason::CoinsExhausted));
        assert_eq!(engine.result(), Some(GameResult::Winner(TokenId::A)));

        // No more moves once ended.
        assert!(!engine.apply_move(Direction::Up, Duration::ZERO));
    }

    #[test]
    fn test_empty_board_ends_immediately_as_draw() {
        let engine = engine_with(Board::empty(8), Coord::new(4, 4), 2);
        assert_eq!(engine.phase(), GamePhase::Ended);
        assert_eq!(engine.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_collision_costs_life_and_grants_invulnerability() {
        let board = Board::empty(8).with_coin(Coord::new(7, 0), 1);
        let mut engine = engine_with(board, Coord::new(0, 1), 100);

        assert!(engine.apply_move(Direction::Right, Duration::from_millis(10)));
        let a = engine.token(TokenId::A);
        assert_eq!(a.lives(), 2);
        assert_eq!(a.position(), Coord::new(0, 0));
        assert!(engine.is_invulnerable(TokenId::A, Duration::from_millis(3000)));
        assert!(!engine.is_invulnerable(TokenId::A, Duration::from_millis(3011)));
    }

    #[test]
    fn test_invulnerable_token_is_ignored() {
        let board = Board::empty(8).with_coin(Coord::new(7, 0), 1);
        let mut engine = engine_with(board, Coord::new(0, 1), 100);

        engine.apply_move(Direction::Right, Duration::ZERO);
        engine.apply_move(Direction::Up, Duration::ZERO); // B: illegal
        engine.apply_move(Direction::Left, Duration::ZERO); // B
        engine.apply_move(Direction::Right, Duration::from_millis(500)); // A walks into the hazard again
        assert_eq!(engine.token(TokenId::A).lives(), 2);
        assert_eq!(engine.token(TokenId::A).position(), Coord::new(0, 1));
    }

    #[test]
    fn test_expire_invulnerability() {
        let board = Board::empty(8).with_coin(Coord::new(7, 0), 1);
        let mut engine = engine_with(board, Coord::new(0, 1), 100);
        engine.apply_move(Direction::Right, Duration::ZERO);

        engine.expire_invulnerability(Duration::from_millis(2999));
        assert!(engine.is_invulnerable(TokenId::A, Duration::from_millis(2999)));
        engine.expire_invulnerability(Duration::from_millis(3001));
        assert!(!engine.is_invulnerable(TokenId::A, Duration::from_millis(0)));
    }
}
