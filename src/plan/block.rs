//! Blocks: ordered groups of rounds with a stake flag.

use serde::{Deserialize, Serialize};

use super::round::Round;

/// Number of blocks in every session plan.
pub const BLOCK_COUNT: usize = 4;

/// An ordered sequence of rounds played back to back.
///
/// The stake flag is provider configuration, never inferred from the round
/// data. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    index: u8,
    stake: bool,
    rounds: Vec<Round>,
}

impl Block {
    /// Create a block. `index` is the 1-based position in the session plan.
    #[must_use]
    pub fn new(index: u8, stake: bool, rounds: Vec<Round>) -> Self {
        Self {
            index,
            stake,
            rounds,
        }
    }

    /// 1-based block index in plan order.
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Whether a running stake score is tracked during this block.
    #[must_use]
    pub fn stake(&self) -> bool {
        self.stake
    }

    /// The block's rounds in play order.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds in this block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the block has no playable rounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
