//! Board storage and procedural generation.

pub mod generator;
pub mod grid;

pub use generator::BoardGenerator;
pub use grid::{Board, CellContent, Coin};
