//! Dealt hands and rounds.

use serde::{Deserialize, Serialize};

use crate::core::{CardSlot, PlayerId, PlayerPair};
use crate::signal::{self, SignalLevel};

/// One player's two dealt card values for a round.
///
/// Cards have no identity beyond their value. The inner card is the one
/// revealed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    pub inner: u8,
    pub outer: u8,
}

impl Hand {
    /// Create a hand from (inner, outer) card values.
    #[must_use]
    pub const fn new(inner: u8, outer: u8) -> Self {
        Self { inner, outer }
    }

    /// The card in the given slot.
    #[must_use]
    pub const fn card(&self, slot: CardSlot) -> u8 {
        match slot {
            CardSlot::Inner => self.inner,
            CardSlot::Outer => self.outer,
        }
    }

    /// Sum of both card values.
    #[must_use]
    pub fn total(&self) -> i64 {
        i64::from(self.inner) + i64::from(self.outer)
    }

    /// Signal-relevant value: 0 when the total busts, the total otherwise.
    #[must_use]
    pub fn value(&self) -> i64 {
        signal::hand_value(self.total())
    }

    /// The hand's true signal level, if it has one.
    #[must_use]
    pub fn level(&self) -> Option<SignalLevel> {
        signal::signal_level(self.value())
    }
}

/// A dealt round: one hand per player. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    hands: PlayerPair<Hand>,
}

impl Round {
    /// Create a round from both players' hands.
    #[must_use]
    pub const fn new(p1: Hand, p2: Hand) -> Self {
        Self {
            hands: PlayerPair::new(p1, p2),
        }
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Hand {
        *self.hands.get(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_totals() {
        let hand = Hand::new(9, 10);
        assert_eq!(hand.total(), 19);
        assert_eq!(hand.value(), 19);
        assert_eq!(hand.level(), Some(SignalLevel::High));
    }

    #[test]
    fn test_bust_hand() {
        let hand = Hand::new(10, 11);
        assert_eq!(hand.total(), 21);
        assert_eq!(hand.value(), 0);
        assert_eq!(hand.level(), None);
    }

    #[test]
    fn test_card_slots() {
        let hand = Hand::new(7, 8);
        assert_eq!(hand.card(CardSlot::Inner), 7);
        assert_eq!(hand.card(CardSlot::Outer), 8);
    }

    #[test]
    fn test_round_hands() {
        let round = Round::new(Hand::new(7, 8), Hand::new(9, 10));
        assert_eq!(round.hand(PlayerId::P1), Hand::new(7, 8));
        assert_eq!(round.hand(PlayerId::P2), Hand::new(9, 10));
    }
}
