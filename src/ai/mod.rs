//! Automated decision making: shortest-path search and token controllers.

pub mod controller;
pub mod pathfinder;

pub use controller::{AiController, Controller, DecisionContext, HumanController};
pub use pathfinder::{find_path, first_step, walk, TargetKinds};
