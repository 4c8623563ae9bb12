//! Turn rules.
//!
//! `TurnEngine` sequences a turn: token move, hazard step, collisions,
//! turn hand-off and the end check. It never reads input or the clock
//! itself; callers pass the direction and the current time in.

pub mod engine;

pub use engine::{GameResult, TurnEngine};
