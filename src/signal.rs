//! Signal vocabulary and the card/signal classifier.
//!
//! A hand's two cards sum to a total. Totals of 20, 21, and 22 are "bust"
//! and carry no valid signal level; everything else maps to one of three
//! coarse levels the signaler may announce. The mapping is pure and shared
//! by the outcome engine and any front end that previews levels.

use serde::{Deserialize, Serialize};

/// Card totals that bust: they have no valid signal level and a value of 0.
pub const BUST_TOTALS: [i64; 3] = [20, 21, 22];

/// The only vocabulary the signaler may use to describe their hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLevel {
    Low,
    Mid,
    High,
}

impl std::fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignalLevel::Low => "low",
            SignalLevel::Mid => "mid",
            SignalLevel::High => "high",
        };
        f.write_str(name)
    }
}

/// The judge's two possible calls on a committed signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Trust the signal as truthful.
    Truth,
    /// Accuse the signal of being a lie.
    Bluff,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::Truth => "truth",
            Verdict::Bluff => "bluff",
        };
        f.write_str(name)
    }
}

/// Whether a card total busts.
#[must_use]
pub fn is_bust(total: i64) -> bool {
    BUST_TOTALS.contains(&total)
}

/// The signal-relevant value of a total: 0 when bust, the total otherwise.
#[must_use]
pub fn hand_value(total: i64) -> i64 {
    if is_bust(total) {
        0
    } else {
        total
    }
}

/// Map a hand value to its signal level.
///
/// Non-positive and bust values have no level; a committed signal compared
/// against such a hand is never truthful. The trailing arms keep the study's
/// historical behavior for values outside 14..=19 (23 and above classify
/// Mid, positive values below 14 classify Low) even though the documented
/// card ranges never produce them.
#[must_use]
pub fn signal_level(value: i64) -> Option<SignalLevel> {
    if value <= 0 || is_bust(value) {
        return None;
    }
    match value {
        19 => Some(SignalLevel::High),
        16..=18 => Some(SignalLevel::Mid),
        14 | 15 => Some(SignalLevel::Low),
        v if v >= 16 => Some(SignalLevel::Mid),
        _ => Some(SignalLevel::Low),
    }
}
