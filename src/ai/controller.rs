//! Per-token controllers.
//!
//! Each token is driven by a `Controller`. The session asks the current
//! token's controller for a direction once per tick through a single
//! `decide` call:
//!
//! - `Human` passes through the raw input reported by presentation code.
//! - `Ai` follows the greedy pickup policy: nearest magnet while no magnet
//!   is active, else nearest coin, else a random legal step.
//!
//! `None` means "no move this tick"; the turn stays with the token.

use crate::actors::Token;
use crate::board::Board;
use crate::core::{Direction, GameMode, GameRng, TokenId, TokenMap};

use super::pathfinder::{first_step, TargetKinds};

/// Everything a controller may look at when deciding.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    /// The token being controlled.
    pub token: &'a Token,
    /// Current board.
    pub board: &'a Board,
    /// Raw direction reported by the input source this tick, if any.
    pub input: Option<Direction>,
}

/// Passes raw input through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HumanController;

impl HumanController {
    #[must_use]
    pub fn decide(&self, ctx: &DecisionContext<'_>) -> Option<Direction> {
        ctx.input
    }
}

/// Greedy pickup-chasing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AiController;

impl AiController {
    /// Pick the next step. Returns `None` only when the token has no
    /// legal move at all.
    pub fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Option<Direction> {
        let start = ctx.token.position();

        if !ctx.token.magnet_active() {
            if let Some(step) = first_step(start, ctx.board, TargetKinds::MAGNETS) {
                return Some(step);
            }
        }

        if let Some(step) = first_step(start, ctx.board, TargetKinds::COINS) {
            return Some(step);
        }

        let moves = ctx.token.available_moves(ctx.board);
        rng.choose(&moves).copied()
    }
}

/// Controller for one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human(HumanController),
    Ai(AiController),
}

impl Controller {
    /// Controllers for both tokens under a game mode. Token A is always
    /// human.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> TokenMap<Controller> {
        TokenMap::new(|token| match (mode, token) {
            (GameMode::HumanVsAi, TokenId::B) => Controller::Ai(AiController),
            _ => Controller::Human(HumanController),
        })
    }

    /// Ask for a direction.
    pub fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Option<Direction> {
        match self {
            Controller::Human(human) => human.decide(ctx),
            Controller::Ai(ai) => ai.decide(ctx, rng),
        }
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        matches!(self, Controller::Ai(_))
    }
}
