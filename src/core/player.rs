//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game seats exactly two players. `PlayerId` is a closed enum so that
//! role bookkeeping (signaler vs. judge) is total: every player has exactly
//! one `other()`.
//!
//! ## PlayerPair
//!
//! Per-player data storage with O(1) access, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two fixed seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Seat number as shown to participants (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::P1 => 1,
            PlayerId::P2 => 2,
        }
    }

    /// Both player IDs in seat order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::P1, PlayerId::P2]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage, one entry per seat.
///
/// ## Example
///
/// ```
/// use signal_duel::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<i32> = PlayerPair::with_value(16);
/// scores[PlayerId::P1] += 1;
/// scores[PlayerId::P2] -= 1;
/// assert_eq!(scores[PlayerId::P1], 17);
/// assert_eq!(scores[PlayerId::P2], 15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    p1: T,
    p2: T,
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values.
    pub const fn new(p1: T, p2: T) -> Self {
        Self { p1, p2 }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            p1: value.clone(),
            p2: value,
        }
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::P1 => &self.p1,
            PlayerId::P2 => &self.p2,
        }
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::P1 => &mut self.p1,
            PlayerId::P2 => &mut self.p2,
        }
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::P1, &self.p1), (PlayerId::P2, &self.p2)].into_iter()
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
