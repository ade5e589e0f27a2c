//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The game is strictly two-player, so the only
//! valid ids are `PlayerId::FIRST` and `PlayerId::SECOND`.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`, with a split borrow for
//! rules that move things between the two players.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier (0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Seat 0.
    pub const FIRST: PlayerId = PlayerId(0);
    /// Seat 1.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID. Returns `None` for anything but 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id < 2 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in order.
    ///
    /// ```
    /// use duel_engine::core::PlayerId;
    ///
    /// let [a, b] = PlayerId::both();
    /// assert_eq!(a.opponent(), b);
    /// ```
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [Self::FIRST, Self::SECOND]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data for exactly two players.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{PlayerId, PlayerPair};
///
/// let mut privileges: PlayerPair<u8> = PlayerPair::default();
/// privileges[PlayerId::SECOND] = 1;
///
/// let (second, first) = privileges.split_mut(PlayerId::SECOND);
/// *second -= 1;
/// *first += 1;
/// assert_eq!(privileges[PlayerId::FIRST], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow both entries mutably: `player` first, the opponent second.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if player == PlayerId::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
