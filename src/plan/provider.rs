//! Round-plan providers.
//!
//! A provider supplies the four fixed blocks of a session. Which blocks are
//! stake-bearing is provider configuration, never inferred from the data.
//!
//! `FilePlanProvider` reads flat comma-separated files and tolerates broken
//! input: rows that do not yield two usable card values per player are
//! skipped (which also disposes of header rows), and a missing or unreadable
//! file simply produces an empty block. `GeneratedPlanProvider` deals
//! reproducible random rounds from a seed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::block::{Block, BLOCK_COUNT};
use super::round::{Hand, Round};
use crate::core::DealRng;
use crate::error::PlanError;

/// Cell range (exclusive end) holding player 1's card values in a plan row.
const P1_CELLS: (usize, usize) = (2, 4);
/// Cell range (exclusive end) holding player 2's card values in a plan row.
const P2_CELLS: (usize, usize) = (7, 9);

/// Supplies the session's four blocks of rounds.
pub trait RoundPlanProvider {
    /// Produce the four blocks in play order.
    fn load_blocks(&self) -> Result<Vec<Block>, PlanError>;
}

/// One block's source: a file name and its stake flag.
#[derive(Clone, Debug)]
pub struct BlockSource {
    pub file_name: String,
    pub stake: bool,
}

impl BlockSource {
    pub fn new(file_name: impl Into<String>, stake: bool) -> Self {
        Self {
            file_name: file_name.into(),
            stake,
        }
    }
}

/// Loads blocks from flat files in a plan directory.
#[derive(Clone, Debug)]
pub struct FilePlanProvider {
    dir: PathBuf,
    sources: Vec<BlockSource>,
}

impl FilePlanProvider {
    /// Provider with the study's default block order: plan files 1, 3, 2, 4,
    /// with the second and fourth positions stake-bearing.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_sources(
            dir,
            vec![
                BlockSource::new("pairs1.csv", false),
                BlockSource::new("pairs3.csv", true),
                BlockSource::new("pairs2.csv", false),
                BlockSource::new("pairs4.csv", true),
            ],
        )
    }

    /// Provider with custom block sources. Must name exactly four.
    #[must_use]
    pub fn with_sources(dir: impl Into<PathBuf>, sources: Vec<BlockSource>) -> Self {
        assert_eq!(
            sources.len(),
            BLOCK_COUNT,
            "a session plan has exactly {BLOCK_COUNT} blocks"
        );
        Self {
            dir: dir.into(),
            sources,
        }
    }
}

impl RoundPlanProvider for FilePlanProvider {
    fn load_blocks(&self) -> Result<Vec<Block>, PlanError> {
        let mut blocks = Vec::with_capacity(BLOCK_COUNT);
        for (pos, source) in self.sources.iter().enumerate() {
            let path = self.dir.join(&source.file_name);
            let rounds = read_rounds(&path);
            debug!(
                block = pos + 1,
                file = %path.display(),
                rounds = rounds.len(),
                stake = source.stake,
                "loaded plan block"
            );
            blocks.push(Block::new(pos as u8 + 1, source.stake, rounds));
        }
        Ok(blocks)
    }
}

/// Read one block file, skipping anything that is not a usable round row.
fn read_rounds(path: &Path) -> Vec<Round> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(file = %path.display(), error = %err, "plan file unavailable, block left empty");
            return Vec::new();
        }
    };

    text.lines()
        .filter_map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            if cells.iter().all(|cell| cell.trim().is_empty()) {
                return None;
            }
            let p1 = parse_cards(&cells, P1_CELLS.0, P1_CELLS.1)?;
            let p2 = parse_cards(&cells, P2_CELLS.0, P2_CELLS.1)?;
            Some(Round::new(p1, p2))
        })
        .collect()
}

/// Pick the first two usable card values out of a cell range.
///
/// A cell is usable when it parses as a number (decimals are truncated) and
/// fits a card value. Fewer than two usable cells means the row carries no
/// valid round for that player.
fn parse_cards(cells: &[&str], start: usize, end: usize) -> Option<Hand> {
    let mut values = [0u8; 2];
    let mut found = 0;

    for cell in cells.iter().take(end.min(cells.len())).skip(start) {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        let Ok(number) = cell.parse::<f64>() else {
            continue;
        };
        let truncated = number.trunc();
        if truncated < 1.0 || truncated > f64::from(u8::MAX) {
            continue;
        }
        values[found] = truncated as u8;
        found += 1;
        if found == 2 {
            return Some(Hand::new(values[0], values[1]));
        }
    }
    None
}

/// Deals reproducible random rounds instead of reading a plan from disk.
///
/// Card values are drawn uniformly from the study's 7..=11 card faces, so
/// totals land in 14..=22 and every level and bust case occurs.
#[derive(Clone, Debug)]
pub struct GeneratedPlanProvider {
    seed: u64,
    rounds_per_block: usize,
}

impl GeneratedPlanProvider {
    /// Smallest and largest card face dealt.
    pub const CARD_FACES: std::ops::RangeInclusive<u8> = 7..=11;

    #[must_use]
    pub fn new(seed: u64, rounds_per_block: usize) -> Self {
        Self {
            seed,
            rounds_per_block,
        }
    }
}

impl RoundPlanProvider for GeneratedPlanProvider {
    fn load_blocks(&self) -> Result<Vec<Block>, PlanError> {
        let mut rng = DealRng::new(self.seed);
        let stake_layout = [false, true, false, true];

        let blocks = stake_layout
            .iter()
            .enumerate()
            .map(|(pos, &stake)| {
                let rounds = (0..self.rounds_per_block)
                    .map(|_| {
                        let mut deal = || rng.card_value(Self::CARD_FACES.clone());
                        let p1 = Hand::new(deal(), deal());
                        let p2 = Hand::new(deal(), deal());
                        Round::new(p1, p2)
                    })
                    .collect();
                Block::new(pos as u8 + 1, stake, rounds)
            })
            .collect();

        Ok(blocks)
    }
}
