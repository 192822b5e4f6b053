//! # signal-duel
//!
//! Engine for a two-player, round-based signaling/deception card game played
//! at a shared display. One player (the signaler) privately knows two dealt
//! card values and publicly commits to a coarse signal about their sum; the
//! other (the judge) decides whether to trust the signal or call it a bluff.
//! Roles alternate every round; rounds come in four fixed blocks, two of
//! which track a running stake score.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: one [`Session`] aggregate owns all mutable state;
//!    every operation takes it explicitly. Nothing ambient, nothing global.
//!
//! 2. **Guards over locks**: a single action is processed to completion at a
//!    time, and the phase state machine alone decides who may act. Rejected
//!    actions are silent no-ops.
//!
//! 3. **Pure outcome rules**: truthfulness, winner, and draw are recomputed
//!    on demand from committed choices; the only side effect (moving a stake
//!    point) sits behind an explicit once-per-round guard.
//!
//! 4. **Replaceable edges**: round plans come from a [`RoundPlanProvider`]
//!    and accepted actions go to an [`ActionLog`]; rendering stays entirely
//!    with callers.
//!
//! ## Modules
//!
//! - `core`: player identities, phases, actions, deal RNG
//! - `signal`: signal/verdict vocabulary and the card classifier
//! - `plan`: hands, rounds, blocks, plan providers
//! - `session`: the state machine, outcome engine, ledger, progression
//! - `journal`: per-action records and sinks
//! - `error`: I/O-edge error types

pub mod core;
pub mod error;
pub mod journal;
pub mod plan;
pub mod session;
pub mod signal;

// Re-export commonly used types
pub use crate::core::{ActionKind, CardSlot, DealRng, Phase, PlayerAction, PlayerId, PlayerPair};

pub use crate::signal::{signal_level, SignalLevel, Verdict};

pub use crate::plan::{
    Block, BlockSource, FilePlanProvider, GeneratedPlanProvider, Hand, Round, RoundPlanProvider,
    BLOCK_COUNT,
};

pub use crate::session::{Outcome, ScoreLedger, Session, STARTING_SCORE};

pub use crate::journal::{ActionLog, JsonlLog, LogRecord, MemoryLog, NullLog};

pub use crate::error::{JournalError, PlanError};
