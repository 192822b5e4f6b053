//! Session and block progression.
//!
//! The cursors walk the plan round by round, block by block. Between blocks
//! the session pauses and waits for the surrounding application to resume it
//! explicitly; past the last block it is finished for good.

use tracing::debug;

use super::state::Session;
use crate::core::Phase;
use crate::plan::{Block, Round};

impl Session {
    /// The block under the cursor, `None` when nothing is playable.
    ///
    /// Nothing is playable while the session is finished or paused, when the
    /// cursor has run past the plan, or when the active block has no rounds
    /// (an empty or unavailable plan file).
    #[must_use]
    pub fn current_block(&self) -> Option<&Block> {
        if self.finished || self.in_block_pause {
            return None;
        }
        let block = self.blocks.get(self.block_cursor)?;
        if self.round_cursor >= block.len() {
            return None;
        }
        Some(block)
    }

    /// The round under the cursor, `None` when nothing is playable.
    ///
    /// Callers must treat `None` as "no playable round" and keep the table
    /// idle; no round-dependent action will be accepted.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current_block()
            .map(|block| &block.rounds()[self.round_cursor])
    }

    /// 1-based round position within the active block.
    #[must_use]
    pub fn round_in_block(&self) -> Option<u32> {
        self.current_round().map(|_| self.round_cursor as u32 + 1)
    }

    /// Global 1-based round counter, derived, not stored: all rounds of
    /// finished blocks plus the cursor position in the active one.
    #[must_use]
    pub fn global_round(&self) -> u32 {
        let prior: usize = self
            .blocks
            .iter()
            .take(self.block_cursor)
            .map(Block::len)
            .sum();
        if self.block_cursor >= self.blocks.len() {
            return (prior as u32).max(1);
        }
        (prior + self.round_cursor) as u32 + 1
    }

    /// Whether the session has run past its last round.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Whether the session is paused between blocks.
    #[must_use]
    pub fn in_block_pause(&self) -> bool {
        self.in_block_pause
    }

    /// Move the cursor to the next round.
    ///
    /// Rolling off the end of a block enters the inter-block pause, staged
    /// at the next block that has rounds; blocks with no valid rounds are
    /// passed over. Rolling off the last playable block finishes the
    /// session.
    pub(super) fn advance(&mut self) {
        if self.finished {
            return;
        }
        if self.block_cursor >= self.blocks.len() {
            self.finished = true;
            return;
        }

        self.round_cursor += 1;
        if self.round_cursor >= self.blocks[self.block_cursor].len() {
            self.round_cursor = 0;
            self.block_cursor += 1;
            while self
                .blocks
                .get(self.block_cursor)
                .is_some_and(Block::is_empty)
            {
                debug!(block = self.block_cursor + 1, "skipping empty block");
                self.block_cursor += 1;
            }
            if self.block_cursor >= self.blocks.len() {
                self.finished = true;
                self.in_block_pause = false;
                debug!("session finished");
            } else {
                self.in_block_pause = true;
                debug!(next_block = self.block_cursor + 1, "entering block pause");
            }
        }
    }

    /// Clear the inter-block pause and stage the next block's first round.
    ///
    /// The pause itself is a presentation concern; the core only flags it.
    /// Resuming returns to `WaitBothStart` so both players ready up into the
    /// new block. No-op unless currently paused.
    pub fn resume_from_pause(&mut self) {
        if !self.in_block_pause {
            return;
        }
        self.in_block_pause = false;
        self.setup_round();
        self.phase = Phase::WaitBothStart;
        debug!(block = self.block_cursor + 1, "resumed from block pause");
    }
}
