//! Procedural board generation.
//!
//! Two layouts are supported:
//!
//! - **Symmetric** (default): obstacle candidates come from a
//!   quadrant-mirrored diagonal pattern. Candidates on the central row or
//!   column are always dropped, every other candidate survives with
//!   probability `obstacle_density`, and one dropped central candidate is
//!   put back. The outer ring is then cleared. Each remaining free cell
//!   gets one draw: magnet below `magnet_probability`, coin below
//!   `magnet_probability + coin_probability`, else empty.
//!
//! - **Independent density** (legacy): one draw per non-corner cell,
//!   classified as magnet, coin, obstacle or empty by cumulative
//!   thresholds in that order.
//!
//! Both layouts keep the start corners free of everything.

use log::debug;

use super::grid::Board;
use crate::core::{ConfigError, Coord, GameConfig, GameRng, GenerationPolicy};

/// Builds boards from a layout policy and probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardGenerator {
    size: usize,
    policy: GenerationPolicy,
    obstacle_density: f64,
    coin_probability: f64,
    magnet_probability: f64,
    coin_value: u32,
}

impl BoardGenerator {
    /// Create a symmetric-policy generator.
    ///
    /// Rejects a zero size and probabilities outside `[0, 1]`.
    pub fn new(
        size: usize,
        obstacle_density: f64,
        coin_probability: f64,
        magnet_probability: f64,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig::default()
            .with_board_size(size)
            .with_probabilities(obstacle_density, coin_probability, magnet_probability);
        Self::from_config(&config)
    }

    /// Create a generator from the board fields of a game configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            size: config.board_size,
            policy: config.generation,
            obstacle_density: config.obstacle_density,
            coin_probability: config.coin_probability,
            magnet_probability: config.magnet_probability,
            coin_value: config.coin_value,
        })
    }

    /// Switch layout policy.
    #[must_use]
    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate a board.
    pub fn generate(&self, rng: &mut GameRng) -> Board {
        let board = match self.policy {
            GenerationPolicy::Symmetric => {
                let mut board = Board::empty(self.size);
                for coord in self.symmetric_obstacles(rng) {
                    board.place_obstacle(coord);
                }
                self.scatter_pickups(&mut board, rng);
                board
            }
            GenerationPolicy::IndependentDensity => self.independent_layout(rng),
        };

        debug!(
            "generated {:?} board {}x{}: {} obstacles, {} coins, {} magnets",
            self.policy,
            self.size,
            self.size,
            board.obstacles().count(),
            board.coin_count(),
            board.magnets().count()
        );
        board
    }

    /// Mirrored diagonal pattern, with duplicates, in generation order.
    fn pattern_candidates(&self) -> Vec<Coord> {
        let s = self.size;
        let half = (s + 1) / 2;
        let mut candidates = Vec::new();

        for i in (1..half).step_by(2) {
            for j in i..half {
                candidates.push(Coord::new(i, j));
                candidates.push(Coord::new(s - i - 1, s - j - 1));
                candidates.push(Coord::new(i, s - j - 1));
                candidates.push(Coord::new(s - i - 1, j));
            }
        }

        for i in (1..half).step_by(2) {
            for j in i..half {
                candidates.push(Coord::new(j, i));
                candidates.push(Coord::new(s - j - 1, s - i - 1));
                candidates.push(Coord::new(j, s - i - 1));
                candidates.push(Coord::new(s - j - 1, i));
            }
        }

        candidates
    }

    /// Thinned, deduplicated, ring-cleared obstacle set in row-major order.
    fn symmetric_obstacles(&self, rng: &mut GameRng) -> Vec<Coord> {
        let s = self.size;
        let middle = if s % 2 == 0 { (s + 1) / 2 } else { s / 2 };

        let mut kept = Vec::new();
        let mut removed = Vec::new();

        for candidate in self.pattern_candidates() {
            if candidate.row == middle || candidate.col == middle {
                removed.push(candidate);
            } else if rng.gen_f64() >= 1.0 - self.obstacle_density {
                kept.push(candidate);
            }
        }

        if let Some(&restored) = rng.choose(&removed) {
            kept.push(restored);
        }

        kept.sort();
        kept.dedup();
        kept.retain(|c| !c.is_on_ring(s));
        kept
    }

    fn scatter_pickups(&self, board: &mut Board, rng: &mut GameRng) {
        let cells: Vec<Coord> = board.cells().collect();
        for coord in cells {
            if board.is_obstacle(coord) || board.is_start_corner(coord) {
                continue;
            }

            let roll = rng.gen_f64();
            if roll < self.magnet_probability {
                board.place_magnet(coord);
            } else if roll < self.magnet_probability + self.coin_probability {
                board.place_coin(coord, self.coin_value);
            }
        }
    }

    fn independent_layout(&self, rng: &mut GameRng) -> Board {
        let mut board = Board::empty(self.size);
        let magnet_limit = self.magnet_probability;
        let coin_limit = magnet_limit + self.coin_probability;
        let obstacle_limit = coin_limit + self.obstacle_density;

        let cells: Vec<Coord> = board.cells().collect();
        for coord in cells {
            if board.is_start_corner(coord) {
                continue;
            }

            let roll = rng.gen_f64();
            if roll < magnet_limit {
                board.place_magnet(coord);
            } else if roll < coin_limit {
                board.place_coin(coord, self.coin_value);
            } else if roll < obstacle_limit {
                board.place_obstacle(coord);
            }
        }

        board
    }
}
