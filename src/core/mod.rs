//! Core types: players, phases, actions, RNG.
//!
//! These are the building blocks the session state machine and the plan
//! providers are written in terms of.

pub mod action;
pub mod phase;
pub mod player;
pub mod rng;

pub use action::{ActionKind, CardSlot, PlayerAction};
pub use phase::Phase;
pub use player::{PlayerId, PlayerPair};
pub use rng::DealRng;
