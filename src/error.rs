//! Crate error types.
//!
//! Guard-rejected player actions are deliberately not errors: the state
//! machine answers them with a no-op. Errors exist only at the I/O edges,
//! where a plan source or a journal sink can genuinely fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from round-plan providers.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A provider handed over something other than the four fixed blocks.
    #[error("round plan must contain exactly 4 blocks, found {found}")]
    BlockCount { found: usize },

    /// A provider could not produce its plan at all.
    #[error("failed to load round plan from {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from journal sinks.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to open journal file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append journal record")]
    Write(#[from] std::io::Error),

    #[error("failed to encode journal record")]
    Encode(#[from] serde_json::Error),
}
