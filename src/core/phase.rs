//! Round phases.
//!
//! A round moves through a fixed sequence of phases. The phase alone decides
//! which player may act and what kind of action is accepted; invalid
//! combinations are rejected by the state machine, never silently absorbed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// The per-round phase sequence.
///
/// `WaitBothStart` and `Showdown` are the only phases that accept a ready
/// action, and they accept it from either player. Every other phase names
/// exactly one authorized actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Both players must press ready before the first round starts.
    WaitBothStart,
    /// Player 1 reveals their inner card.
    P1Inner,
    /// Player 2 reveals their inner card.
    P2Inner,
    /// Player 1 reveals their outer card.
    P1Outer,
    /// Player 2 reveals their outer card.
    P2Outer,
    /// The signaler commits a signal level.
    Signaler,
    /// The judge commits a verdict.
    Judge,
    /// Choices are revealed; both players ready up to continue.
    Showdown,
}

impl Phase {
    /// Phases in which a ready action is accepted from either player.
    #[must_use]
    pub const fn accepts_ready(self) -> bool {
        matches!(self, Phase::WaitBothStart | Phase::Showdown)
    }

    /// The first reveal phase of a round, depending on who signals.
    ///
    /// The signaler's inner card is always revealed first.
    #[must_use]
    pub const fn first_reveal(signaler: PlayerId) -> Self {
        match signaler {
            PlayerId::P1 => Phase::P1Inner,
            PlayerId::P2 => Phase::P2Inner,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::WaitBothStart => "wait_both_start",
            Phase::P1Inner => "p1_inner",
            Phase::P2Inner => "p2_inner",
            Phase::P1Outer => "p1_outer",
            Phase::P2Outer => "p2_outer",
            Phase::Signaler => "signaler",
            Phase::Judge => "judge",
            Phase::Showdown => "showdown",
        };
        f.write_str(name)
    }
}
