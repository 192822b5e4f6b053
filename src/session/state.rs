//! The session aggregate.
//!
//! One `Session` owns everything mutable: the loaded blocks, the block/round
//! cursors, the two roles, the phase, the per-round choices, and the stake
//! ledger. All core operations take the session explicitly; there is no
//! ambient state. Rendering state lives entirely with callers.

use tracing::debug;

use super::ledger::ScoreLedger;
use crate::core::{Phase, PlayerId, PlayerPair};
use crate::error::PlanError;
use crate::plan::{Block, RoundPlanProvider, BLOCK_COUNT};
use crate::signal::{SignalLevel, Verdict};

/// A single game session over four blocks of rounds.
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) blocks: Vec<Block>,
    pub(super) block_cursor: usize,
    pub(super) round_cursor: usize,
    pub(super) in_block_pause: bool,
    pub(super) finished: bool,

    pub(super) signaler: PlayerId,
    pub(super) judge: PlayerId,
    pub(super) phase: Phase,

    /// Write-once per round; cleared at round setup.
    pub(super) signals: PlayerPair<Option<SignalLevel>>,
    /// Write-once per round; cleared at round setup.
    pub(super) verdicts: PlayerPair<Option<Verdict>>,
    /// Consumed together when both are set; cleared at round setup.
    pub(super) ready: PlayerPair<bool>,

    pub(super) ledger: ScoreLedger,
    /// Guards the once-per-round score application.
    pub(super) score_applied: bool,

    pub(super) event_seq: u64,
}

impl Session {
    /// Create a session over four loaded blocks. Player 1 signals first.
    pub fn new(blocks: Vec<Block>) -> Result<Self, PlanError> {
        if blocks.len() != BLOCK_COUNT {
            return Err(PlanError::BlockCount {
                found: blocks.len(),
            });
        }

        let mut session = Self {
            blocks,
            block_cursor: 0,
            round_cursor: 0,
            in_block_pause: false,
            finished: false,
            signaler: PlayerId::P1,
            judge: PlayerId::P2,
            phase: Phase::WaitBothStart,
            signals: PlayerPair::with_value(None),
            verdicts: PlayerPair::with_value(None),
            ready: PlayerPair::with_value(false),
            ledger: ScoreLedger::new(),
            score_applied: false,
            event_seq: 0,
        };
        session.setup_round();
        Ok(session)
    }

    /// Create a session from a plan provider.
    pub fn from_provider(provider: &impl RoundPlanProvider) -> Result<Self, PlanError> {
        Self::new(provider.load_blocks()?)
    }

    /// Reset all per-round transient state for the round under the cursor.
    ///
    /// Also applies the ledger block policy when a playable round exists;
    /// with no round in play (pause, finished, empty block) the ledger is
    /// left untouched until a round becomes available.
    pub(super) fn setup_round(&mut self) {
        self.signals = PlayerPair::with_value(None);
        self.verdicts = PlayerPair::with_value(None);
        self.ready = PlayerPair::with_value(false);
        self.score_applied = false;

        if let Some(block) = self.current_block() {
            let (index, stake) = (block.index(), block.stake());
            self.ledger.enter_block(index, stake);
            debug!(
                block = index,
                round = self.round_cursor + 1,
                stake,
                signaler = %self.signaler,
                "round set up"
            );
        }
    }

    /// Exchange the signaler and judge roles.
    pub(super) fn swap_roles(&mut self) {
        std::mem::swap(&mut self.signaler, &mut self.judge);
    }

    pub(super) fn next_seq(&mut self) -> u64 {
        let seq = self.event_seq;
        self.event_seq += 1;
        seq
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player currently in the signaler role.
    #[must_use]
    pub fn signaler(&self) -> PlayerId {
        self.signaler
    }

    /// The player currently in the judge role.
    #[must_use]
    pub fn judge(&self) -> PlayerId {
        self.judge
    }

    /// A player's committed signal for the current round.
    #[must_use]
    pub fn signal_of(&self, player: PlayerId) -> Option<SignalLevel> {
        *self.signals.get(player)
    }

    /// A player's committed verdict for the current round.
    #[must_use]
    pub fn verdict_of(&self, player: PlayerId) -> Option<Verdict> {
        *self.verdicts.get(player)
    }

    /// Whether a player has pressed ready and is waiting on the other.
    #[must_use]
    pub fn is_ready(&self, player: PlayerId) -> bool {
        *self.ready.get(player)
    }

    /// Stake ledger snapshot, `None` outside stake blocks.
    #[must_use]
    pub fn scores(&self) -> Option<PlayerPair<i32>> {
        self.ledger.scores()
    }

    /// Whether the current round plays for stake points.
    #[must_use]
    pub fn stake_active(&self) -> bool {
        self.current_block().is_some_and(Block::stake)
    }

    /// The loaded blocks, in play order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
