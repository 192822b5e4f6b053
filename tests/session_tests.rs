//! Session-level behavior: block progression, pauses, role alternation,
//! ledger lifecycle across blocks, and degenerate plans.

use signal_duel::{
    Block, CardSlot, GeneratedPlanProvider, Hand, MemoryLog, Phase, PlayerAction, PlayerId, Round,
    RoundPlanProvider, Session, SignalLevel, Verdict,
};

mod common;

fn round() -> Round {
    Round::new(Hand::new(9, 10), Hand::new(7, 8))
}

fn blocks(sizes: [usize; 4], stakes: [bool; 4]) -> Vec<Block> {
    common::init_tracing();
    sizes
        .iter()
        .zip(stakes)
        .enumerate()
        .map(|(i, (&n, stake))| Block::new(i as u8 + 1, stake, vec![round(); n]))
        .collect()
}

/// Both players press ready (start from `WaitBothStart`, or continue out of
/// `Showdown`).
fn both_ready(session: &mut Session, log: &mut MemoryLog) {
    assert!(session.apply_action(PlayerId::P1, PlayerAction::Ready, log));
    assert!(session.apply_action(PlayerId::P2, PlayerAction::Ready, log));
}

/// Drive the active round from its first reveal phase to showdown.
fn play_current(session: &mut Session, log: &mut MemoryLog) {
    let signaler = session.signaler();
    let judge = signaler.other();
    assert!(session.apply_action(signaler, PlayerAction::Reveal(CardSlot::Inner), log));
    assert!(session.apply_action(judge, PlayerAction::Reveal(CardSlot::Inner), log));
    assert!(session.apply_action(signaler, PlayerAction::Reveal(CardSlot::Outer), log));
    assert!(session.apply_action(judge, PlayerAction::Reveal(CardSlot::Outer), log));
    assert!(session.apply_action(signaler, PlayerAction::Signal(SignalLevel::Mid), log));
    assert!(session.apply_action(judge, PlayerAction::Call(Verdict::Truth), log));
    assert_eq!(session.phase(), Phase::Showdown);
}

#[test]
fn test_roles_alternate_every_round() {
    let mut session = Session::new(blocks([4, 0, 0, 0], [false, true, false, true])).unwrap();
    let mut log = MemoryLog::new();

    both_ready(&mut session, &mut log);
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(session.signaler());
        play_current(&mut session, &mut log);
        // Continue out of showdown; the final continue runs off the plan
        // (blocks 2 through 4 are empty) and finishes the session.
        both_ready(&mut session, &mut log);
    }

    assert_eq!(
        seen,
        vec![PlayerId::P1, PlayerId::P2, PlayerId::P1, PlayerId::P2]
    );
    // Signaler at round k+1 is the judge of round k, even past the end.
    assert_eq!(session.signaler(), PlayerId::P1);
}

#[test]
fn test_empty_stake_block_is_skipped_without_error() {
    // Block 2 is stake-bearing but has no valid rounds.
    let mut session = Session::new(blocks([1, 0, 1, 0], [false, true, false, true])).unwrap();
    let mut log = MemoryLog::new();

    both_ready(&mut session, &mut log);
    play_current(&mut session, &mut log);
    both_ready(&mut session, &mut log);

    // Block 1 exhausted: the pause skips empty block 2 and stages block 3.
    assert!(session.in_block_pause());
    session.resume_from_pause();

    assert_eq!(session.current_block().unwrap().index(), 3);
    assert!(!session.stake_active());
    assert_eq!(session.scores(), None);
    assert_eq!(session.phase(), Phase::WaitBothStart);

    // Block 3 plays normally; the empty stake block cost nothing.
    both_ready(&mut session, &mut log);
    play_current(&mut session, &mut log);
    both_ready(&mut session, &mut log);
    // Block 4 is empty as well, so the session is done.
    assert!(session.finished());
}

#[test]
fn test_ledger_resets_per_stake_block_and_clears_between() {
    let mut session = Session::new(blocks([1, 1, 1, 1], [false, true, false, true])).unwrap();
    let mut log = MemoryLog::new();

    // Block 1: no stake.
    assert_eq!(session.scores(), None);
    both_ready(&mut session, &mut log);
    play_current(&mut session, &mut log);
    both_ready(&mut session, &mut log);
    session.resume_from_pause();

    // Block 2: stake; fresh 16/16 before any showdown.
    assert!(session.stake_active());
    let scores = session.scores().unwrap();
    assert_eq!(scores[PlayerId::P1], 16);
    assert_eq!(scores[PlayerId::P2], 16);

    both_ready(&mut session, &mut log);
    play_current(&mut session, &mut log);
    let scores = session.scores().unwrap();
    assert_eq!(scores[PlayerId::P1] + scores[PlayerId::P2], 32);
    assert_ne!(scores[PlayerId::P1], scores[PlayerId::P2]);
    both_ready(&mut session, &mut log);
    session.resume_from_pause();

    // Block 3: no stake; the running score is gone.
    assert!(!session.stake_active());
    assert_eq!(session.scores(), None);

    both_ready(&mut session, &mut log);
    play_current(&mut session, &mut log);
    both_ready(&mut session, &mut log);
    session.resume_from_pause();

    // Block 4: stake again; reset, not restored.
    let scores = session.scores().unwrap();
    assert_eq!(scores[PlayerId::P1], 16);
    assert_eq!(scores[PlayerId::P2], 16);
}

#[test]
fn test_session_finishes_after_last_round() {
    let mut session = Session::new(blocks([1, 1, 1, 1], [false, true, false, true])).unwrap();
    let mut log = MemoryLog::new();

    for _ in 0..4 {
        both_ready(&mut session, &mut log);
        play_current(&mut session, &mut log);
        both_ready(&mut session, &mut log);
        if session.in_block_pause() {
            session.resume_from_pause();
        }
    }

    assert!(session.finished());
    assert!(session.current_round().is_none());
    // A finished session accepts nothing.
    assert!(!session.apply_action(PlayerId::P1, PlayerAction::Ready, &mut log));
    assert!(!session.apply_action(
        PlayerId::P1,
        PlayerAction::Reveal(CardSlot::Inner),
        &mut log
    ));
}

#[test]
fn test_global_round_counter_spans_blocks() {
    let mut session = Session::new(blocks([2, 1, 0, 0], [false, true, false, true])).unwrap();
    let mut log = MemoryLog::new();

    assert_eq!(session.global_round(), 1);
    both_ready(&mut session, &mut log);
    play_current(&mut session, &mut log);
    both_ready(&mut session, &mut log);
    assert_eq!(session.global_round(), 2);

    play_current(&mut session, &mut log);
    both_ready(&mut session, &mut log);
    session.resume_from_pause();
    assert_eq!(session.global_round(), 3);
    assert_eq!(session.round_in_block(), Some(1));
    assert_eq!(session.current_block().unwrap().index(), 2);
}

#[test]
fn test_generated_plan_sessions_are_reproducible() {
    common::init_tracing();
    let provider = GeneratedPlanProvider::new(99, 4);
    let a = Session::from_provider(&provider).unwrap();
    let b = Session::from_provider(&provider).unwrap();

    assert_eq!(a.blocks(), b.blocks());
    assert_eq!(a.current_round(), b.current_round());
}

#[test]
fn test_provider_stake_layout_reaches_session() {
    common::init_tracing();
    let blocks = GeneratedPlanProvider::new(3, 2).load_blocks().unwrap();
    let session = Session::new(blocks).unwrap();

    let stakes: Vec<bool> = session.blocks().iter().map(Block::stake).collect();
    assert_eq!(stakes, vec![false, true, false, true]);
}
