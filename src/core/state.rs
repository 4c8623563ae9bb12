//! Session-level state enums shared by the turn engine, the session and
//! the presentation bindings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseModeError;
use super::player::TokenId;

/// Lifecycle of a game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Tokens are taking turns.
    InProgress,
    /// An end condition was reached. See `EndReason`.
    Ended,
}

/// Who controls the second token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Both tokens take raw input from the presentation layer.
    HumanVsHuman,
    /// Token A takes raw input, token B follows the AI policy.
    #[default]
    HumanVsAi,
}

impl GameMode {
    /// Name used by presentation code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsAi => "human-vs-ai",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human-vs-human" | "pvp" => Ok(GameMode::HumanVsHuman),
            "human-vs-ai" | "pve" => Ok(GameMode::HumanVsAi),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// The last coin was collected.
    CoinsExhausted,
    /// A token lost its last life.
    OutOfLives { loser: TokenId },
}
