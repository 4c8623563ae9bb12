//! Game configuration.
//!
//! `GameConfig` carries every tunable constant: board size, generation
//! policy and probabilities, magnet strength, lives, hazard pacing and the
//! invulnerability window. `validate` rejects impossible values before a
//! session is built.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// How the board generator lays out obstacles and pickups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationPolicy {
    /// Quadrant-mirrored diagonal obstacle pattern thinned by
    /// `obstacle_density`, then one draw per free cell for magnet/coin.
    #[default]
    Symmetric,
    /// Legacy layout: one draw per cell, classified as magnet, coin,
    /// obstacle or empty by cumulative thresholds.
    IndependentDensity,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square board.
    pub board_size: usize,

    /// Obstacle layout policy.
    pub generation: GenerationPolicy,

    /// Symmetric policy: probability a pattern candidate is kept.
    /// Independent policy: width of the obstacle threshold band.
    pub obstacle_density: f64,

    /// Probability a free cell holds a coin.
    pub coin_probability: f64,

    /// Probability a free cell holds a magnet. Checked before coins.
    pub magnet_probability: f64,

    /// Score awarded by a coin stepped on directly.
    pub coin_value: u32,

    /// Moves a picked-up magnet stays active, including the pickup move.
    pub magnet_duration: u32,

    /// Chebyshev radius swept by an active magnet.
    pub magnet_radius: usize,

    /// Lives each token starts with.
    pub starting_lives: u32,

    /// The hazard moves once every `hazard_move_delay` successful moves.
    pub hazard_move_delay: u32,

    /// Chance the hazard picks a new random target each time it moves.
    pub hazard_retarget_probability: f64,

    /// Preferred hazard spawn region is `[margin, size-1-margin]` on both axes.
    pub hazard_spawn_margin: usize,

    /// Time a token ignores further hazard hits after being hit.
    pub invulnerability_window: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            generation: GenerationPolicy::Symmetric,
            obstacle_density: 0.85,
            coin_probability: 0.5,
            magnet_probability: 0.1,
            coin_value: 1,
            magnet_duration: 3,
            magnet_radius: 1,
            starting_lives: 3,
            hazard_move_delay: 2,
            hazard_retarget_probability: 0.3,
            hazard_spawn_margin: 2,
            invulnerability_window: Duration::from_millis(3000),
        }
    }
}

impl GameConfig {
    /// Superseded preset: independent per-cell draws with sparse obstacles.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            generation: GenerationPolicy::IndependentDensity,
            obstacle_density: 0.08,
            coin_probability: 0.3,
            magnet_probability: 0.04,
            ..Self::default()
        }
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }

        for (name, value) in [
            ("obstacle_density", self.obstacle_density),
            ("coin_probability", self.coin_probability),
            ("magnet_probability", self.magnet_probability),
            ("hazard_retarget_probability", self.hazard_retarget_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        if self.hazard_move_delay == 0 {
            return Err(ConfigError::ZeroMoveDelay);
        }
        if self.magnet_duration == 0 {
            return Err(ConfigError::ZeroMagnetDuration);
        }

        Ok(())
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_generation(mut self, policy: GenerationPolicy) -> Self {
        self.generation = policy;
        self
    }

    /// Set obstacle, coin and magnet probabilities together.
    #[must_use]
    pub fn with_probabilities(mut self, obstacle: f64, coin: f64, magnet: f64) -> Self {
        self.obstacle_density = obstacle;
        self.coin_probability = coin;
        self.magnet_probability = magnet;
        self
    }

    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    #[must_use]
    pub fn with_hazard_move_delay(mut self, delay: u32) -> Self {
        self.hazard_move_delay = delay;
        self
    }

    #[must_use]
    pub fn with_hazard_retarget_probability(mut self, probability: f64) -> Self {
        self.hazard_retarget_probability = probability;
        self
    }

    #[must_use]
    pub fn with_invulnerability_window(mut self, window: Duration) -> Self {
        self.invulnerability_window = window;
        self
    }

    #[must_use]
    pub fn with_magnet(mut self, duration: u32, radius: usize) -> Self {
        self.magnet_duration = duration;
        self.magnet_radius = radius;
        self
    }
}
