//! Round plans: dealt hands, rounds, blocks, and the providers that load them.

pub mod block;
pub mod provider;
pub mod round;

pub use block::{Block, BLOCK_COUNT};
pub use provider::{BlockSource, FilePlanProvider, GeneratedPlanProvider, RoundPlanProvider};
pub use round::{Hand, Round};
