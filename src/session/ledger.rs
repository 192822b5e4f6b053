//! Running stake score for stake-bearing blocks.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};

/// Points each player holds when a stake block begins.
pub const STARTING_SCORE: i32 = 16;

/// Per-block running score.
///
/// Present only while a stake-bearing block is active. Every decided round
/// moves exactly one point from loser to winner, so the two entries always
/// sum to `2 * STARTING_SCORE`. The ledger remembers which block it was last
/// reset for so re-entering the same block never wipes a running score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    block: Option<u8>,
    scores: Option<PlayerPair<i32>>,
}

impl ScoreLedger {
    /// An empty ledger, as between stake blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both entries to the starting score, tagged with the owning block.
    pub fn reset(&mut self, block_index: u8) {
        self.block = Some(block_index);
        self.scores = Some(PlayerPair::with_value(STARTING_SCORE));
    }

    /// Drop the score entirely (entering a non-stake block).
    pub fn clear(&mut self) {
        self.block = None;
        self.scores = None;
    }

    /// Apply the ledger policy for entering a block.
    ///
    /// First entry into a stake block (a block other than the one the ledger
    /// was last reset for) resets to the starting scores; re-entering the
    /// same stake block keeps the running score; a non-stake block clears.
    pub fn enter_block(&mut self, block_index: u8, stake: bool) {
        if stake {
            if self.block != Some(block_index) {
                self.reset(block_index);
            }
        } else {
            self.clear();
        }
    }

    /// Move one point from the loser to the winner.
    ///
    /// No-op when no stake block is active. The caller guards against
    /// applying more than once per round.
    pub fn apply(&mut self, winner: PlayerId) {
        if let Some(scores) = &mut self.scores {
            scores[winner] += 1;
            scores[winner.other()] -= 1;
        }
    }

    /// Read-only snapshot, `None` outside stake blocks.
    #[must_use]
    pub fn scores(&self) -> Option<PlayerPair<i32>> {
        self.scores
    }

    /// The block the ledger was last reset for.
    #[must_use]
    pub fn block(&self) -> Option<u8> {
        self.block
    }
}
