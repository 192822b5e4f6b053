//! Truthful/bluff outcome engine.
//!
//! The outcome is a pure function of the current round and the committed
//! choices; it is recomputed on demand, any number of times, with identical
//! results. The only side effect in the neighborhood, moving a stake point,
//! lives in [`Session::settle`] behind the once-per-round guard.

use tracing::debug;

use super::state::Session;
use crate::core::PlayerId;
use crate::plan::Round;
use crate::signal::{self, SignalLevel, Verdict};

/// Derived result of a round, never stored.
///
/// Inputs are echoed for display and journal use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Round winner; `None` before both choices exist or on a draw.
    pub winner: Option<PlayerId>,
    /// Whether the committed signal matched the hand; `None` before a
    /// signal exists.
    pub truthful: Option<bool>,
    /// True when the round is voided as a tie.
    pub draw: bool,
    /// The signaler's true level, `None` on bust.
    pub actual_level: Option<SignalLevel>,
    /// The signaler's hand value (0 on bust).
    pub actual_value: i64,
    /// The signaler's raw card total.
    pub actual_total: i64,
    /// The judge's raw card total.
    pub judge_total: i64,
    /// The committed signal, if any.
    pub signal_choice: Option<SignalLevel>,
    /// The committed verdict, if any.
    pub verdict_choice: Option<Verdict>,
    /// Whether this round plays for stake points.
    pub stake: bool,
}

/// Evaluate a round's outcome from its inputs.
///
/// Verdict Truth: the judge wins iff the signal was truthful. Verdict
/// Bluff: the judge wins iff it was not. One override: when the judge
/// correctly trusts a truthful signal and their own total equals the
/// signaler's, the round is voided as a draw.
#[must_use]
pub fn evaluate(
    round: &Round,
    signaler: PlayerId,
    judge: PlayerId,
    signal_choice: Option<SignalLevel>,
    verdict_choice: Option<Verdict>,
    stake: bool,
) -> Outcome {
    let signaler_hand = round.hand(signaler);
    let judge_hand = round.hand(judge);

    let actual_total = signaler_hand.total();
    let actual_value = signaler_hand.value();
    let actual_level = signaler_hand.level();
    let judge_total = judge_hand.total();

    let truthful = match (signal_choice, actual_level) {
        (None, _) => None,
        (Some(choice), Some(level)) => Some(choice == level),
        // A committed signal about a bust hand is never truthful.
        (Some(_), None) if signal::is_bust(actual_total) => Some(false),
        (Some(_), None) => None,
    };

    let mut winner = None;
    let mut draw = false;
    if let (Some(verdict), Some(truthful)) = (verdict_choice, truthful) {
        winner = Some(match verdict {
            Verdict::Truth if truthful => judge,
            Verdict::Truth => signaler,
            Verdict::Bluff if !truthful => judge,
            Verdict::Bluff => signaler,
        });

        if truthful && verdict == Verdict::Truth && actual_total == judge_total {
            winner = None;
            draw = true;
        }
    }

    Outcome {
        winner,
        truthful,
        draw,
        actual_level,
        actual_value,
        actual_total,
        judge_total,
        signal_choice,
        verdict_choice,
        stake,
    }
}

impl Session {
    /// Outcome of the round in play, `None` when nothing is playable.
    ///
    /// Usable before the round completes: fields the committed choices have
    /// not decided yet stay unset.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let round = self.current_round()?;
        Some(evaluate(
            round,
            self.signaler,
            self.judge,
            *self.signals.get(self.signaler),
            *self.verdicts.get(self.judge),
            self.stake_active(),
        ))
    }

    /// Apply the round's score consequence to the ledger, at most once.
    ///
    /// Only stake rounds with a decided winner move a point; draws and
    /// undecided rounds leave the ledger untouched. Safe to call again:
    /// the guard makes it a no-op.
    pub fn settle(&mut self) {
        if self.score_applied {
            return;
        }
        let Some(outcome) = self.outcome() else {
            return;
        };
        if !outcome.stake {
            return;
        }

        if let Some(winner) = outcome.winner {
            self.ledger.apply(winner);
            debug!(%winner, scores = ?self.ledger.scores(), "stake point applied");
        }
        self.score_applied = true;
    }
}
