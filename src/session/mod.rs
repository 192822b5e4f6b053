//! Session state: the phase state machine, outcome engine, stake ledger,
//! and block/round progression.

pub mod ledger;
pub mod machine;
pub mod outcome;
pub mod progress;
pub mod state;

pub use ledger::{ScoreLedger, STARTING_SCORE};
pub use outcome::{evaluate, Outcome};
pub use state::Session;
