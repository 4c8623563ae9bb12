//! # coin-chase
//!
//! A turn-based grid game engine: two tokens race to collect coins on a
//! square board, magnets briefly let a token sweep nearby coins, and a
//! hazard chases the tokens and costs them lives.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random decision draws from an explicit
//!    seeded `GameRng`. Time enters only through a `Clock`, so a seed and a
//!    `ManualClock` replay a game exactly.
//!
//! 2. **Single Owner**: `GameSession` owns the board and all actors and is
//!    the only thing that mutates them. Presentation code reads snapshots.
//!
//! 3. **Configuration Over Constants**: every tunable lives in
//!    `GameConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Board**: obstacles, coins and magnets are `im` sets and
//!   maps, so snapshots are O(1) clones.
//!
//! - **Strict Turn Order**: one actor moves per tick. The AI's decision and
//!   the hazard's step are plain function calls that finish before the
//!   turn passes.
//!
//! ## Modules
//!
//! - `core`: coordinates, token ids, RNG, clock, configuration, errors
//! - `board`: board state and generation
//! - `actors`: tokens and the hazard
//! - `ai`: breadth-first pathfinding and token controllers
//! - `rules`: the turn engine
//! - `session`: `GameSession` and snapshots

pub mod core;
pub mod board;
pub mod actors;
pub mod ai;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, MonotonicClock,
    Coord, Direction, Facing,
    TokenId, TokenMap,
    GameRng,
    GameConfig, GenerationPolicy,
    ConfigError, ParseDirectionError, ParseModeError,
    EndReason, GameMode, GamePhase,
};

pub use crate::board::{Board, BoardGenerator, CellContent, Coin};

pub use crate::actors::{Hazard, MoveSet, Token};

pub use crate::ai::{AiController, Controller, DecisionContext, HumanController, TargetKinds};

pub use crate::rules::{GameResult, TurnEngine};

pub use crate::session::{GameSession, GameSnapshot, TokenSnapshot};
