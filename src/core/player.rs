//! Token identification and per-token data storage.
//!
//! ## TokenId
//!
//! The game always has exactly two tokens. `TokenId::A` starts in the
//! top-left corner facing right, `TokenId::B` in the bottom-right corner
//! facing left.
//!
//! ## TokenMap
//!
//! Fixed two-slot storage indexed by `TokenId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::{Coord, Facing};

/// Token identifier (0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(u8);

impl TokenId {
    /// The first token, starting at `(0, 0)`.
    pub const A: TokenId = TokenId(0);
    /// The second token, starting at `(size-1, size-1)`.
    pub const B: TokenId = TokenId(1);

    /// Token for a 0-based index. Any index other than 0 maps to `B`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index == 0 {
            Self::A
        } else {
            Self::B
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other token.
    #[must_use]
    pub const fn opponent(self) -> Self {
        TokenId(1 - self.0)
    }

    /// Display symbol (`'A'` or `'B'`).
    #[must_use]
    pub const fn symbol(self) -> char {
        if self.0 == 0 {
            'A'
        } else {
            'B'
        }
    }

    /// Start corner on a board of `size` cells per side. Both corners
    /// collapse to `(0, 0)` on boards smaller than 2.
    #[must_use]
    pub const fn start_corner(self, size: usize) -> Coord {
        let last = size.saturating_sub(1);
        if self.0 == 0 {
            Coord::new(0, 0)
        } else {
            Coord::new(last, last)
        }
    }

    /// Facing at spawn: each token faces the other.
    #[must_use]
    pub const fn default_facing(self) -> Facing {
        if self.0 == 0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// Both tokens, in turn order.
    pub fn all() -> impl Iterator<Item = TokenId> {
        [Self::A, Self::B].into_iter()
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.symbol())
    }
}

/// Per-token data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use coin_chase::core::{TokenId, TokenMap};
///
/// let mut lives: TokenMap<u32> = TokenMap::with_value(3);
/// lives[TokenId::B] -= 1;
/// assert_eq!(lives[TokenId::A], 3);
/// assert_eq!(lives[TokenId::B], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenMap<T> {
    data: [T; 2],
}

impl<T> TokenMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(TokenId) -> T) -> Self {
        Self {
            data: [factory(TokenId::A), factory(TokenId::B)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a token's data.
    #[must_use]
    pub fn get(&self, token: TokenId) -> &T {
        &self.data[token.index()]
    }

    /// Get a mutable reference to a token's data.
    pub fn get_mut(&mut self, token: TokenId) -> &mut T {
        &mut self.data[token.index()]
    }

    /// Iterate over (TokenId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TokenId::from_index(i), v))
    }

    /// Iterate over (TokenId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TokenId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (TokenId::from_index(i), v))
    }

    /// Transform each entry.
    pub fn map<U>(&self, f: impl Fn(TokenId, &T) -> U) -> TokenMap<U> {
        TokenMap::new(|token| f(token, self.get(token)))
    }
}

impl<T: Default> Default for TokenMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<TokenId> for TokenMap<T> {
    type Output = T;

    fn index(&self, token: TokenId) -> &Self::Output {
        self.get(token)
    }
}

impl<T> IndexMut<TokenId> for TokenMap<T> {
    fn index_mut(&mut self, token: TokenId) -> &mut Self::Output {
        self.get_mut(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id_basics() {
        assert_eq!(TokenId::A.index(), 0);
        assert_eq!(TokenId::B.index(), 1);
        assert_eq!(TokenId::A.opponent(), TokenId::B);
        assert_eq!(TokenId::B.opponent(), TokenId::A);
        assert_eq!(format!("{}", TokenId::B), "Token B");
    }

    #[test]
    fn test_start_corners_and_facing() {
        assert_eq!(TokenId::A.start_corner(8), Coord::new(0, 0));
        assert_eq!(TokenId::B.start_corner(8), Coord::new(7, 7));
        assert_eq!(TokenId::A.default_facing(), Facing::Right);
        assert_eq!(TokenId::B.default_facing(), Facing::Left);
    }

    #[test]
    fn test_start_corner_on_degenerate_sizes() {
        assert_eq!(TokenId::B.start_corner(1), Coord::new(0, 0));
        assert_eq!(TokenId::B.start_corner(0), Coord::new(0, 0));
    }

    #[test]
    fn test_token_map_new() {
        let map: TokenMap<usize> = TokenMap::new(|t| t.index() * 10);
        assert_eq!(map[TokenId::A], 0);
        assert_eq!(map[TokenId::B], 10);
    }

    #[test]
    fn test_token_map_iter_and_map() {
        let mut map: TokenMap<i32> = TokenMap::with_value(1);
        for (token, value) in map.iter_mut() {
            *value += token.index() as i32;
        }
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TokenId::A, &1), (TokenId::B, &2)]);

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[TokenId::B], 4);
    }

    #[test]
    fn test_token_map_serialization() {
        let map: TokenMap<u32> = TokenMap::new(|t| t.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: TokenMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
