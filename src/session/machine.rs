//! The per-round phase state machine.
//!
//! `apply_action` is a total function over (phase, actor, action): either the
//! action is accepted, the session mutates, and exactly one journal record is
//! appended, or it is rejected with no state change and no record. The phase
//! guards are what serialize the two players; there is no other mutual
//! exclusion anywhere.

use tracing::{debug, trace};

use super::state::Session;
use crate::core::{ActionKind, CardSlot, Phase, PlayerAction, PlayerId, PlayerPair};
use crate::journal::{self, ActionLog, LogRecord};
use crate::plan::Round;
use crate::signal::{SignalLevel, Verdict};

/// Round position snapshot taken before an action is applied.
///
/// A showdown continue moves the cursor to the next round, so the journal
/// context must be captured first: both ready records of a continue then
/// describe the round that just ended, not the one being staged.
struct RoundContext {
    block: Option<u8>,
    round_in_block: Option<u32>,
    round: Option<Round>,
}

impl RoundContext {
    fn capture(session: &Session) -> Self {
        Self {
            block: session.current_block().map(|b| b.index()),
            round_in_block: session.round_in_block(),
            round: session.current_round().copied(),
        }
    }
}

impl Session {
    /// Process one player action.
    ///
    /// Returns whether the action was accepted. Rejected actions are
    /// complete no-ops; callers surface them only by ignoring the input.
    pub fn apply_action(
        &mut self,
        actor: PlayerId,
        action: PlayerAction,
        log: &mut dyn ActionLog,
    ) -> bool {
        let context = RoundContext::capture(self);
        let accepted = match action {
            PlayerAction::Ready => self.accept_ready(actor),
            PlayerAction::Reveal(slot) => self.accept_reveal(actor, slot),
            PlayerAction::Signal(level) => self.accept_signal(actor, level),
            PlayerAction::Call(verdict) => self.accept_call(actor, verdict),
        };

        if !accepted {
            trace!(%actor, ?action, phase = %self.phase, "action rejected");
            return false;
        }

        debug!(%actor, ?action, phase = %self.phase, "action accepted");
        let record = self.record_for(actor, action, context);
        log.append(record);
        true
    }

    /// Ready press. Valid from either player in `WaitBothStart` and
    /// `Showdown`; the two flags are consumed together.
    fn accept_ready(&mut self, actor: PlayerId) -> bool {
        if !self.phase.accepts_ready() {
            return false;
        }
        // Starting a round depends on round data; an exhausted or empty
        // plan keeps the table idle.
        if self.phase == Phase::WaitBothStart && self.current_round().is_none() {
            return false;
        }
        if *self.ready.get(actor) {
            return false;
        }

        *self.ready.get_mut(actor) = true;
        if self.ready.iter().all(|(_, &ready)| ready) {
            self.ready = PlayerPair::with_value(false);
            if self.phase == Phase::Showdown {
                self.next_round();
            } else {
                self.phase = Phase::first_reveal(self.signaler);
            }
        }
        true
    }

    /// Card reveal. Each reveal phase names exactly one player and one of
    /// their own cards; everything else is rejected.
    fn accept_reveal(&mut self, actor: PlayerId, slot: CardSlot) -> bool {
        let (expected_actor, expected_slot, next) = match self.phase {
            Phase::P1Inner => (PlayerId::P1, CardSlot::Inner, Phase::P2Inner),
            Phase::P2Inner => (PlayerId::P2, CardSlot::Inner, Phase::P1Outer),
            Phase::P1Outer => (PlayerId::P1, CardSlot::Outer, Phase::P2Outer),
            Phase::P2Outer => (PlayerId::P2, CardSlot::Outer, Phase::Signaler),
            _ => return false,
        };
        if actor != expected_actor || slot != expected_slot || self.current_round().is_none() {
            return false;
        }

        self.phase = next;
        true
    }

    /// Signal commitment, only by the active signaler, write-once.
    fn accept_signal(&mut self, actor: PlayerId, level: SignalLevel) -> bool {
        if self.phase != Phase::Signaler || actor != self.signaler {
            return false;
        }
        if self.signals.get(actor).is_some() || self.current_round().is_none() {
            return false;
        }

        *self.signals.get_mut(actor) = Some(level);
        self.phase = Phase::Judge;
        true
    }

    /// Verdict commitment, only by the active judge, write-once. Reaching
    /// showdown settles the round's stake consequence immediately.
    fn accept_call(&mut self, actor: PlayerId, verdict: Verdict) -> bool {
        if self.phase != Phase::Judge || actor != self.judge {
            return false;
        }
        if self.verdicts.get(actor).is_some() || self.current_round().is_none() {
            return false;
        }

        *self.verdicts.get_mut(actor) = Some(verdict);
        self.phase = Phase::Showdown;
        self.settle();
        true
    }

    /// Leave showdown into the next round: clear the scoring guard, swap
    /// roles, advance the cursor, reset transients, and continue straight
    /// into the first reveal phase. With nothing playable (pause, finished,
    /// empty block) the machine parks in `WaitBothStart` instead.
    fn next_round(&mut self) {
        self.swap_roles();
        self.advance();
        self.setup_round();
        if self.current_round().is_some() {
            self.phase = Phase::first_reveal(self.signaler);
        } else {
            self.phase = Phase::WaitBothStart;
        }
    }

    /// Build the journal record for an action that was just accepted.
    ///
    /// Round position and cards come from the pre-transition snapshot;
    /// winner and scores reflect the state after. Only the record that
    /// brought the round to showdown carries the winner label.
    fn record_for(
        &mut self,
        actor: PlayerId,
        action: PlayerAction,
        context: RoundContext,
    ) -> LogRecord {
        let seq = self.next_seq();

        let (signal, verdict) = match action {
            PlayerAction::Signal(level) => (Some(level), None),
            PlayerAction::Call(v) => (None, Some(v)),
            _ => (None, None),
        };

        let (winner, draw) = if action.kind() == ActionKind::CallChoice {
            self.outcome()
                .map_or((None, false), |o| (o.winner, o.draw))
        } else {
            (None, false)
        };

        LogRecord {
            seq,
            timestamp: journal::now_timestamp(),
            block: context.block,
            round_in_block: context.round_in_block,
            p1_cards: context.round.map(|r| {
                let hand = r.hand(PlayerId::P1);
                (hand.inner, hand.outer)
            }),
            p2_cards: context.round.map(|r| {
                let hand = r.hand(PlayerId::P2);
                (hand.inner, hand.outer)
            }),
            actor,
            action: action.kind(),
            signal,
            verdict,
            winner,
            draw,
            scores: self.scores(),
        }
    }
}
