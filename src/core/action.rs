//! Player actions.
//!
//! The action vocabulary is closed: a ready press, a reveal of one of the
//! actor's own two cards, a signal choice, or a verdict call. The state
//! machine in `session` is a total function over (phase, actor, action);
//! anything it does not explicitly accept is a guarded no-op.

use serde::{Deserialize, Serialize};

use crate::signal::{SignalLevel, Verdict};

/// Which of a player's two dealt cards an action refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSlot {
    /// The card closer to the table center; always revealed first.
    Inner,
    /// The card closer to the table edge; revealed second.
    Outer,
}

/// An action submitted by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Ready/continue press. Valid in `WaitBothStart` and `Showdown`.
    Ready,
    /// Reveal the actor's own inner or outer card.
    Reveal(CardSlot),
    /// Commit a signal level. Only the active signaler may do this.
    Signal(SignalLevel),
    /// Commit a verdict. Only the active judge may do this.
    Call(Verdict),
}

impl PlayerAction {
    /// Flattened label used in journal records.
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            PlayerAction::Ready => ActionKind::Ready,
            PlayerAction::Reveal(CardSlot::Inner) => ActionKind::RevealInner,
            PlayerAction::Reveal(CardSlot::Outer) => ActionKind::RevealOuter,
            PlayerAction::Signal(_) => ActionKind::SignalChoice,
            PlayerAction::Call(_) => ActionKind::CallChoice,
        }
    }
}

/// The kind of an accepted action, as it appears in the journal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Ready,
    RevealInner,
    RevealOuter,
    SignalChoice,
    CallChoice,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Ready => "ready",
            ActionKind::RevealInner => "reveal_inner",
            ActionKind::RevealOuter => "reveal_outer",
            ActionKind::SignalChoice => "signal_choice",
            ActionKind::CallChoice => "call_choice",
        };
        f.write_str(name)
    }
}
