//! Core engine types: coordinates, token identity, RNG, clock,
//! configuration, errors and session state enums.
//!
//! Everything here is independent of board contents and game rules.

pub mod clock;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{GameConfig, GenerationPolicy};
pub use coord::{Coord, Direction, Facing};
pub use error::{ConfigError, ParseDirectionError, ParseModeError};
pub use player::{TokenId, TokenMap};
pub use rng::GameRng;
pub use state::{EndReason, GameMode, GamePhase};
