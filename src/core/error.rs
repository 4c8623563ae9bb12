//! Error types.
//!
//! Illegal moves are not errors: `Token::try_move` and
//! `GameSession::apply_move` return `false` and leave state untouched.
//! A controller with no legal move returns `None`. The only rejected
//! inputs are bad configurations and unparseable presentation strings.

use thiserror::Error;

/// Invalid game configuration, rejected at construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size must be positive")]
    ZeroBoardSize,

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("starting lives must be positive")]
    ZeroLives,

    #[error("hazard move delay must be positive")]
    ZeroMoveDelay,

    #[error("magnet duration must be positive")]
    ZeroMagnetDuration,
}

/// Unknown direction name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction '{0}' (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

/// Unknown game mode name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown game mode '{0}' (expected human-vs-human or human-vs-ai)")]
pub struct ParseModeError(pub String);
