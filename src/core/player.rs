//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of a match. `Player::A` is rendered as `X`,
//! `Player::B` as `O`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First symbol, `X`.
    A,
    /// Second symbol, `O`.
    B,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Board symbol used in text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }

    /// Parse a board symbol (`X`/`O`, case-insensitive).
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Player::A),
            'O' | 'o' => Some(Player::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gravity_ttt::core::{Player, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[Player::B] += 1;
///
/// assert_eq!(wins[Player::A], 0);
/// assert_eq!(wins[Player::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::A), factory(Player::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
