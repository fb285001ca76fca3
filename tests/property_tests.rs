//! Property tests over random sequences of engine operations.
//!
//! After every operation the engine must still satisfy:
//! - every round totals 165 or 330
//! - totals equal the sum of the rounds
//! - a declared winner never changes
//! - the score options are bounded and sum correctly
//! - a snapshot restores to an equal state

use proptest::prelude::*;

use shelem_score::core::{RoundId, ScoringConfig, Side, SideMap, Suit};
use shelem_score::engine::ScoreEngine;
use shelem_score::persistence::SnapshotFormat;

#[derive(Clone, Debug)]
enum Op {
    SetTarget(i32, Side, Suit),
    Commit(i32, i32),
    CommitOption(usize),
    Delete(usize),
    Amend(usize, usize),
    Reset,
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Us), Just(Side::Them)]
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (60..=175i32, side(), suit()).prop_map(|(t, s, u)| Op::SetTarget(t, s, u)),
        2 => (-10..=340i32, -10..=340i32).prop_map(|(a, b)| Op::Commit(a, b)),
        6 => any::<usize>().prop_map(Op::CommitOption),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(r, o)| Op::Amend(r, o)),
        1 => Just(Op::Reset),
    ]
}

fn pick_round(engine: &ScoreEngine, index: usize) -> Option<RoundId> {
    let rounds = engine.rounds();
    if rounds.is_empty() {
        None
    } else {
        Some(rounds[index % rounds.len()].id)
    }
}

fn apply(engine: &mut ScoreEngine, op: &Op) {
    match *op {
        Op::SetTarget(target, setter, suit) => engine.set_target(target, setter, suit),
        Op::Commit(us, them) => {
            let _ = engine.commit_round(us, them);
        }
        Op::CommitOption(index) => {
            let options = engine.valid_score_options();
            let option = options[index % options.len()];
            let _ = engine.commit_round(option.us_score, option.them_score);
        }
        Op::Delete(index) => {
            if let Some(id) = pick_round(engine, index) {
                engine.delete_round(id);
            }
        }
        Op::Amend(index, option) => {
            if let Some(id) = pick_round(engine, index) {
                let split = (option % 34) as i32 * 5;
                let _ = engine.amend_round(id, split, 165 - split);
            }
        }
        Op::Reset => engine.reset_game(),
    }
}

fn check_invariants(engine: &ScoreEngine) {
    let state = engine.state();

    let mut sum = SideMap::new(0, 0);
    for round in state.rounds().iter() {
        assert!(
            round.total() == 165 || round.total() == 330,
            "round {:?} totals {}",
            round.id,
            round.total()
        );
        assert!(round.us_score >= 0 && round.them_score >= 0);
        assert!((85..=165).contains(&round.target));
        sum.us += round.us_score;
        sum.them += round.them_score;
    }
    assert_eq!(state.totals(), sum);

    assert_eq!(state.is_game_ended(), state.winner().is_some());

    if let Some(bid) = state.pending() {
        assert!((85..=165).contains(&bid.target));
        assert_eq!(bid.target % 5, 0);
    }

    let options = engine.valid_score_options();
    assert!(options.len() <= 35);
    let bonus_count = options.iter().filter(|o| o.total() == 330).count();
    assert!(bonus_count <= 1);
    assert!(options.iter().all(|o| o.total() == 165 || o.total() == 330));
}

proptest! {
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(op(), 1..80)) {
        let mut engine = ScoreEngine::default();
        let mut declared: Option<Side> = None;

        for op in &ops {
            apply(&mut engine, op);
            check_invariants(&engine);

            match op {
                Op::Reset => declared = None,
                _ => {
                    if let Some(winner) = declared {
                        prop_assert_eq!(engine.winner(), Some(winner));
                    }
                    declared = engine.winner();
                }
            }
        }
    }

    #[test]
    fn prop_snapshot_round_trip(ops in prop::collection::vec(op(), 0..60)) {
        let mut engine = ScoreEngine::default();
        for op in &ops {
            apply(&mut engine, op);
        }

        for format in [SnapshotFormat::Json, SnapshotFormat::Binary] {
            let bytes = format.encode(&engine.snapshot()).unwrap();
            let decoded = format.decode(&bytes).unwrap();

            let mut restored = ScoreEngine::new(ScoringConfig::default());
            restored.apply_snapshot(&decoded).unwrap();
            prop_assert_eq!(restored.state(), engine.state());
        }
    }

    #[test]
    fn prop_validation_is_pure(
        ops in prop::collection::vec(op(), 0..30),
        us in -10..=340i32,
        them in -10..=340i32,
    ) {
        let mut engine = ScoreEngine::default();
        for op in &ops {
            apply(&mut engine, op);
        }

        let before = engine.state().clone();
        let first = engine.validate_round_score(us, them);
        let second = engine.validate_round_score(us, them);

        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.state(), &before);
    }

    #[test]
    fn prop_reset_idempotent(ops in prop::collection::vec(op(), 0..30)) {
        let mut engine = ScoreEngine::default();
        for op in &ops {
            apply(&mut engine, op);
        }

        engine.reset_game();
        let once = engine.state().clone();
        engine.reset_game();
        prop_assert_eq!(engine.state(), &once);
    }
}
