//! Live board contents: obstacles, coins and magnets.
//!
//! Each collection is an `im` ordered persistent structure, so cloning a
//! board for a snapshot is O(1) and iteration is always row-major.
//!
//! A cell holds at most one of {obstacle, coin, magnet}. The two start
//! corners never hold an obstacle. Obstacles are fixed after generation;
//! coins and magnets are removed as tokens collect them.

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};

use crate::core::{Coord, Direction, TokenId};

/// A coin on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub coord: Coord,
    pub value: u32,
}

/// What a cell currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Obstacle,
    Coin(u32),
    Magnet,
}

/// Square game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    obstacles: OrdSet<Coord>,
    #[serde(with = "coin_list")]
    coins: OrdMap<Coord, u32>,
    magnets: OrdSet<Coord>,
}

impl Board {
    /// Create an empty board with `size` cells per side.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            obstacles: OrdSet::new(),
            coins: OrdMap::new(),
            magnets: OrdSet::new(),
        }
    }

    /// Cells per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `coord` is on the board.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Check whether `coord` is one of the two start corners.
    #[must_use]
    pub fn is_start_corner(&self, coord: Coord) -> bool {
        TokenId::all().any(|t| t.start_corner(self.size) == coord)
    }

    // === Queries ===

    #[must_use]
    pub fn is_obstacle(&self, coord: Coord) -> bool {
        self.obstacles.contains(&coord)
    }

    #[must_use]
    pub fn is_coin(&self, coord: Coord) -> bool {
        self.coins.contains_key(&coord)
    }

    #[must_use]
    pub fn is_magnet(&self, coord: Coord) -> bool {
        self.magnets.contains(&coord)
    }

    /// In bounds and not an obstacle.
    #[must_use]
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_obstacle(coord)
    }

    /// Passable and holding no pickup.
    #[must_use]
    pub fn is_free(&self, coord: Coord) -> bool {
        self.is_passable(coord) && !self.is_coin(coord) && !self.is_magnet(coord)
    }

    /// Value of the coin at `coord`, if any.
    #[must_use]
    pub fn coin_value(&self, coord: Coord) -> Option<u32> {
        self.coins.get(&coord).copied()
    }

    /// Content of a single cell.
    #[must_use]
    pub fn content(&self, coord: Coord) -> CellContent {
        if self.is_obstacle(coord) {
            CellContent::Obstacle
        } else if let Some(value) = self.coin_value(coord) {
            CellContent::Coin(value)
        } else if self.is_magnet(coord) {
            CellContent::Magnet
        } else {
            CellContent::Empty
        }
    }

    /// Passable neighbour of `coord` in `direction`.
    #[must_use]
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord
            .step(direction, self.size)
            .filter(|&next| !self.is_obstacle(next))
    }

    /// Number of coins left.
    #[must_use]
    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }

    /// Check whether all coins are gone.
    #[must_use]
    pub fn coins_exhausted(&self) -> bool {
        self.coins.is_empty()
    }

    /// Obstacles in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.obstacles.iter().copied()
    }

    /// Coins in row-major order.
    pub fn coins(&self) -> impl Iterator<Item = Coin> + '_ {
        self.coins.iter().map(|(&coord, &value)| Coin { coord, value })
    }

    /// Magnets in row-major order.
    pub fn magnets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.magnets.iter().copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    // === Placement ===

    /// Place an obstacle. Fails on out-of-bounds cells, start corners and
    /// occupied cells.
    pub fn place_obstacle(&mut self, coord: Coord) -> bool {
        if !self.in_bounds(coord) || self.is_start_corner(coord) || self.content(coord) != CellContent::Empty {
            return false;
        }
        self.obstacles.insert(coord);
        true
    }

    /// Place a coin. Fails on out-of-bounds or occupied cells.
    pub fn place_coin(&mut self, coord: Coord, value: u32) -> bool {
        if !self.in_bounds(coord) || self.content(coord) != CellContent::Empty {
            return false;
        }
        self.coins.insert(coord, value);
        true
    }

    /// Place a magnet. Fails on out-of-bounds or occupied cells.
    pub fn place_magnet(&mut self, coord: Coord) -> bool {
        if !self.in_bounds(coord) || self.content(coord) != CellContent::Empty {
            return false;
        }
        self.magnets.insert(coord);
        true
    }

    /// Builder form of `place_obstacle`. Invalid placements are ignored.
    #[must_use]
    pub fn with_obstacle(mut self, coord: Coord) -> Self {
        self.place_obstacle(coord);
        self
    }

    /// Builder form of `place_coin`. Invalid placements are ignored.
    #[must_use]
    pub fn with_coin(mut self, coord: Coord, value: u32) -> Self {
        self.place_coin(coord, value);
        self
    }

    /// Builder form of `place_magnet`. Invalid placements are ignored.
    #[must_use]
    pub fn with_magnet(mut self, coord: Coord) -> Self {
        self.place_magnet(coord);
        self
    }

    // === Mutation ===

    /// Remove the coin at `coord`, returning its value.
    pub fn remove_coin(&mut self, coord: Coord) -> Option<u32> {
        self.coins.remove(&coord)
    }

    /// Remove the magnet at `coord`. Returns whether one was there.
    pub fn remove_magnet(&mut self, coord: Coord) -> bool {
        self.magnets.remove(&coord).is_some()
    }

    /// Remove and return every coin within Chebyshev `radius` of `center`.
    ///
    /// Only the square neighbourhood is scanned, in row-major order.
    pub fn collect_coins_in_radius(&mut self, center: Coord, radius: usize) -> Vec<Coin> {
        let last = self.size.saturating_sub(1);
        let rows = center.row.saturating_sub(radius)..=center.row.saturating_add(radius).min(last);
        let cols = center.col.saturating_sub(radius)..=center.col.saturating_add(radius).min(last);

        let mut collected = Vec::new();
        for row in rows {
            for col in cols.clone() {
                let coord = Coord::new(row, col);
                if let Some(value) = self.coins.remove(&coord) {
                    collected.push(Coin { coord, value });
                }
            }
        }
        collected
    }
}

/// Coins as a list of `Coin`, so formats without struct map keys (JSON)
/// can carry a board.
mod coin_list {
    use im::OrdMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Coin;
    use crate::core::Coord;

    pub fn serialize<S: Serializer>(coins: &OrdMap<Coord, u32>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(coins.iter().map(|(&coord, &value)| Coin { coord, value }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OrdMap<Coord, u32>, D::Error> {
        let coins = Vec::<Coin>::deserialize(deserializer)?;
        Ok(coins.into_iter().map(|c| (c.coord, c.value)).collect())
    }
}
