//! Action journal: one record per accepted player action.
//!
//! The session state machine builds a `LogRecord` for every accepted action
//! and hands it to an `ActionLog` sink; rejected actions never reach the
//! sink. Records are self-contained: block position, both hands, the action,
//! a monotonic sequence number, and, once a round reaches showdown, the
//! winner label and the ledger snapshot for stake blocks. Round position and
//! cards name the round the action acted on, so both ready presses of a
//! showdown continue are attributed to the round that just ended.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::error;

use crate::core::{ActionKind, PlayerId, PlayerPair};
use crate::error::JournalError;
use crate::signal::{SignalLevel, Verdict};

const TIMESTAMP_FORMAT: &[FormatItem<'_>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Wall-clock timestamp string for a record, millisecond precision.
#[must_use]
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| String::from("??:??:??.???"))
}

/// One accepted action, as written to the journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Monotonic per-session sequence number.
    pub seq: u64,
    /// Wall-clock time of acceptance, `HH:MM:SS.mmm`.
    pub timestamp: String,
    /// 1-based block index; absent when no round is in play.
    pub block: Option<u8>,
    /// 1-based round position within the block; absent with `block`.
    pub round_in_block: Option<u32>,
    /// Player 1's (inner, outer) card values for the round in play.
    pub p1_cards: Option<(u8, u8)>,
    /// Player 2's (inner, outer) card values for the round in play.
    pub p2_cards: Option<(u8, u8)>,
    /// Who acted.
    pub actor: PlayerId,
    /// What kind of action was accepted.
    pub action: ActionKind,
    /// The committed signal level, on signal-choice records.
    pub signal: Option<SignalLevel>,
    /// The committed verdict, on call-choice records.
    pub verdict: Option<Verdict>,
    /// Winner label, on the record that brings the round to showdown.
    pub winner: Option<PlayerId>,
    /// Whether the showdown voided the round as a draw.
    pub draw: bool,
    /// Ledger snapshot, present while a stake block is active.
    pub scores: Option<PlayerPair<i32>>,
}

/// Append-only sink for accepted-action records.
///
/// A single process handles one action at a time, so sinks are written
/// synchronously after each transition and need no internal locking.
pub trait ActionLog {
    fn append(&mut self, record: LogRecord);
}

/// In-memory sink, for tests and post-session inspection.
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    records: Vec<LogRecord>,
}

impl MemoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records appended so far, in order.
    #[must_use]
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ActionLog for MemoryLog {
    fn append(&mut self, record: LogRecord) {
        self.records.push(record);
    }
}

/// Sink that discards every record. For sessions that do not keep a trail.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLog;

impl ActionLog for NullLog {
    fn append(&mut self, _record: LogRecord) {}
}

/// File sink writing one JSON object per line, append-only.
#[derive(Debug)]
pub struct JsonlLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonlLog {
    /// Open (or create) the journal file for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| JournalError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// The file this sink appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_append(&mut self, record: &LogRecord) -> Result<(), JournalError> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl ActionLog for JsonlLog {
    fn append(&mut self, record: LogRecord) {
        // A failing journal must not disturb game state; the record is lost
        // and the failure is surfaced through logging only.
        if let Err(err) = self.try_append(&record) {
            error!(file = %self.path.display(), error = %err, "dropping journal record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(seq: u64) -> LogRecord {
        LogRecord {
            seq,
            timestamp: now_timestamp(),
            block: Some(2),
            round_in_block: Some(3),
            p1_cards: Some((7, 8)),
            p2_cards: Some((9, 10)),
            actor: PlayerId::P1,
            action: ActionKind::SignalChoice,
            signal: Some(SignalLevel::Mid),
            verdict: None,
            winner: None,
            draw: false,
            scores: Some(PlayerPair::new(16, 16)),
        }
    }

    #[test]
    fn test_memory_log_appends_in_order() {
        let mut log = MemoryLog::new();
        log.append(sample_record(0));
        log.append(sample_record(1));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].seq, 0);
        assert_eq!(log.records()[1].seq, 1);
    }

    #[test]
    fn test_record_roundtrip() {
        let record = sample_record(5);
        let json = serde_json::to_string(&record).unwrap();
        let back: LogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_jsonl_log_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");

        let mut log = JsonlLog::open(&path).unwrap();
        log.append(sample_record(0));
        log.append(sample_record(1));
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: LogRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.seq, 0);
        assert_eq!(first.action, ActionKind::SignalChoice);
    }

    #[test]
    fn test_jsonl_log_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");

        JsonlLog::open(&path).unwrap().append(sample_record(0));
        JsonlLog::open(&path).unwrap().append(sample_record(1));

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = now_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[5..6], ":");
        assert_eq!(&ts[8..9], ".");
    }
}
