//! Top-level game session.
//!
//! `GameSession` owns the RNG, the clock, the per-token controllers and
//! the turn engine. Presentation code drives it with `new_game`, then
//! `tick` (or `apply_move`) once per frame, and renders from `snapshot`.
//! Nothing outside the session mutates board or actor state.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::actors::{Hazard, Token};
use crate::ai::{Controller, DecisionContext};
use crate::board::{Board, BoardGenerator};
use crate::core::{
    Clock, ConfigError, Coord, Direction, EndReason, GameConfig, GameMode, GamePhase, GameRng, MonotonicClock,
    TokenId, TokenMap,
};
use crate::rules::{GameResult, TurnEngine};

/// Boards generated per `new_game` before settling for one without a free
/// non-corner cell.
const MAX_BOARD_ATTEMPTS: usize = 16;

/// Per-token view for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub token: Token,
    pub invulnerable: bool,
}

/// Read-only copy of everything presentation code draws.
///
/// Cloning the board is O(1): it shares structure with the live board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board_size: usize,
    pub board: Board,
    pub tokens: TokenMap<TokenSnapshot>,
    pub hazard: Option<Coord>,
    pub current_turn: TokenId,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub end_reason: Option<EndReason>,
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    /// Winning token, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<TokenId> {
        match self.result? {
            GameResult::Winner(token) => Some(token),
            GameResult::Draw => None,
        }
    }
}

/// A sequence of games sharing one seed, clock and configuration.
pub struct GameSession<C: Clock = MonotonicClock> {
    config: GameConfig,
    generator: BoardGenerator,
    rng: GameRng,
    ai_rng: GameRng,
    clock: C,
    mode: GameMode,
    controllers: TokenMap<Controller>,
    engine: Option<TurnEngine>,
    games_started: u32,
}

impl GameSession<MonotonicClock> {
    /// Create a session on wall-clock time.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_clock(config, seed, MonotonicClock::new())
    }
}

impl<C: Clock> GameSession<C> {
    /// Create a session on a custom clock.
    pub fn with_clock(config: GameConfig, seed: u64, clock: C) -> Result<Self, ConfigError> {
        let generator = BoardGenerator::from_config(&config)?;
        let rng = GameRng::new(seed);
        let ai_rng = rng.for_context("ai");
        let mode = GameMode::default();
        Ok(Self {
            config,
            generator,
            rng,
            ai_rng,
            clock,
            mode,
            controllers: Controller::for_mode(mode),
            engine: None,
            games_started: 0,
        })
    }

    /// Start a fresh game: new board, tokens at their corners with full
    /// lives, hazard at a new spawn cell, token A to move.
    pub fn new_game(&mut self, mode: GameMode) {
        let mut game_rng = self.rng.fork();
        self.ai_rng = game_rng.for_context("ai");

        let board = self.generate_board(&mut game_rng);
        let size = board.size();
        let spawn = Hazard::pick_spawn(&board, self.config.hazard_spawn_margin, &mut game_rng)
            .unwrap_or(Coord::new(size / 2, size / 2));
        let hazard = Hazard::new(spawn, self.config.hazard_move_delay, self.config.hazard_retarget_probability);

        self.mode = mode;
        self.controllers = Controller::for_mode(mode);
        self.games_started += 1;
        info!(
            "game {} ({}, seed {}): {} coins, {} magnets, hazard at {}",
            self.games_started,
            mode,
            game_rng.seed(),
            board.coin_count(),
            board.magnets().count(),
            spawn
        );

        self.engine = Some(TurnEngine::new(self.config.clone(), board, hazard, game_rng.fork()));
    }

    fn generate_board(&self, rng: &mut GameRng) -> Board {
        let mut board = self.generator.generate(rng);
        for attempt in 1..MAX_BOARD_ATTEMPTS {
            if board.cells().any(|c| board.is_free(c) && !board.is_start_corner(c)) {
                return board;
            }
            warn!("board {} has no free cell for the hazard, regenerating", attempt);
            board = self.generator.generate(rng);
        }
        board
    }

    /// Run one frame.
    ///
    /// Expires invulnerability, asks the current token's controller for a
    /// direction (`input` for a human, the policy for the AI), applies it
    /// and checks for the end of the game. Returns whether a move was
    /// applied.
    pub fn tick(&mut self, input: Option<Direction>) -> bool {
        let now = self.clock.now();
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        engine.expire_invulnerability(now);
        if engine.phase() != GamePhase::InProgress {
            return false;
        }

        let current = engine.current();
        let ctx = DecisionContext {
            token: engine.token(current),
            board: engine.board(),
            input,
        };
        let moved = match self.controllers[current].decide(&ctx, &mut self.ai_rng) {
            Some(direction) => engine.apply_move(direction, now),
            None => false,
        };
        engine.check_end();
        moved
    }

    /// Apply a move for the current token regardless of its controller.
    ///
    /// Returns `false` if no game is in progress or the move is illegal.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let now = self.clock.now();
        match self.engine.as_mut() {
            Some(engine) => engine.apply_move(direction, now),
            None => false,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of games started in this session.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    #[must_use]
    pub fn controller(&self, token: TokenId) -> &Controller {
        &self.controllers[token]
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.engine.as_ref().map_or(GamePhase::NotStarted, TurnEngine::phase)
    }

    /// Token to move. `A` before the first game.
    #[must_use]
    pub fn current_turn(&self) -> TokenId {
        self.engine.as_ref().map_or(TokenId::A, TurnEngine::current)
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.engine.as_ref().map(TurnEngine::board)
    }

    #[must_use]
    pub fn token(&self, token: TokenId) -> Option<&Token> {
        self.engine.as_ref().map(|e| e.token(token))
    }

    #[must_use]
    pub fn hazard(&self) -> Option<&Hazard> {
        self.engine.as_ref().map(TurnEngine::hazard)
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.engine.as_ref().and_then(TurnEngine::end_reason)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.engine.as_ref().and_then(TurnEngine::result)
    }

    #[must_use]
    pub fn is_invulnerable(&self, token: TokenId) -> bool {
        let now = self.clock.now();
        self.engine.as_ref().is_some_and(|e| e.is_invulnerable(token, now))
    }

    /// Elapsed clock time, as seen by the invulnerability check.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Copy of the current state for rendering.
    ///
    /// Before the first `new_game` this shows an empty board with both
    /// tokens at their corners and no hazard.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let now = self.clock.now();
        match &self.engine {
            Some(engine) => GameSnapshot {
                board_size: engine.board().size(),
                board: engine.board().clone(),
                tokens: engine.tokens().map(|id, token| TokenSnapshot {
                    token: token.clone(),
                    invulnerable: engine.is_invulnerable(id, now),
                }),
                hazard: Some(engine.hazard().position()),
                current_turn: engine.current(),
                phase: engine.phase(),
                mode: self.mode,
                end_reason: engine.end_reason(),
                result: engine.result(),
            },
            None => GameSnapshot {
                board_size: self.config.board_size,
                board: Board::empty(self.config.board_size),
                tokens: TokenMap::new(|id| TokenSnapshot {
                    token: Token::new(id, &self.config),
                    invulnerable: false,
                }),
                hazard: None,
                current_turn: TokenId::A,
                phase: GamePhase::NotStarted,
                mode: self.mode,
                end_reason: None,
                result: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    fn session(seed: u64) -> GameSession<ManualClock> {
        GameSession::with_clock(GameConfig::default(), seed, ManualClock::new()).unwrap()
    }

    #[test]
    fn test_not_started() {
        let mut session = session(1);
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert!(!session.tick(Some(Direction::Right)));
        assert!(!session.apply_move(Direction::Right));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.hazard, None);
        assert_eq!(snapshot.tokens[TokenId::B].token.position(), Coord::new(7, 7));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_board_size(0);
        assert_eq!(GameSession::new(config, 1).err(), Some(ConfigError::ZeroBoardSize));
    }

    #[test]
    fn test_new_game_resets_state() {
        let mut session = session(7);
        session.new_game(GameMode::HumanVsHuman);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.phase, GamePhase::InProgress);
        assert_eq!(snapshot.current_turn, TokenId::A);
        assert_eq!(snapshot.tokens[TokenId::A].token.position(), Coord::new(0, 0));
        assert_eq!(snapshot.tokens[TokenId::A].token.lives(), 3);
        assert_eq!(snapshot.tokens[TokenId::B].token.score(), 0);

        let hazard = snapshot.hazard.unwrap();
        assert!(snapshot.board.is_passable(hazard));
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut a = session(99);
        let mut b = session(99);
        a.new_game(GameMode::HumanVsAi);
        b.new_game(GameMode::HumanVsAi);
        assert_eq!(a.snapshot(), b.snapshot());

        // A second game in the same session gets a fresh stream.
        a.new_game(GameMode::HumanVsAi);
        assert_eq!(a.games_started(), 2);
    }

    #[test]
    fn test_human_tick_without_input_waits() {
        let mut session = session(3);
        session.new_game(GameMode::HumanVsHuman);
        let before = session.snapshot();
        assert!(!session.tick(None));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_ai_moves_on_its_turn() {
        let mut session = session(11);
        session.new_game(GameMode::HumanVsAi);
        assert!(session.controller(TokenId::B).is_ai());

        // Drive token A until it makes a legal move; B then moves by itself.
        let moved = Direction::ALL.into_iter().any(|d| session.tick(Some(d)));
        if moved && session.phase() == GamePhase::InProgress {
            assert_eq!(session.current_turn(), TokenId::B);
            assert!(session.tick(None));
            assert_eq!(session.current_turn(), TokenId::A);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = session(5);
        session.new_game(GameMode::HumanVsAi);
        let snapshot = session.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
