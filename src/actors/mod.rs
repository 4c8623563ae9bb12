//! Movable entities: the two tokens and the hazard.

pub mod hazard;
pub mod token;

pub use hazard::Hazard;
pub use token::{MoveSet, Token};
