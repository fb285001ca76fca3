//! Engine lifecycle and presentation-facing API tests.

use shelem_score::core::{Phase, ScoringConfig, Side, SideLabels, SideMap, Suit};
use shelem_score::engine::{ScoreEngine, Validation};
use shelem_score::rules::ScoreOption;

/// Walk one full round cycle through each phase.
#[test]
fn test_phase_cycle() {
    let mut engine = ScoreEngine::default();
    assert_eq!(engine.phase(), Phase::AwaitingTarget);

    engine.set_target(105, Side::Them, Suit::Diamond);
    assert_eq!(engine.phase(), Phase::TargetSet);

    engine.commit_round(60, 105).unwrap();
    assert_eq!(engine.phase(), Phase::AwaitingTarget);
}

/// After the game ends, bidding and committing still work.
#[test]
fn test_ended_game_stays_permissive() {
    let mut engine = ScoreEngine::new(ScoringConfig::new().with_winning_score(330));
    engine.set_target(165, Side::Us, Suit::Spade);
    engine.commit_round(330, 0).unwrap();
    assert_eq!(engine.phase(), Phase::Ended);

    engine.set_target(100, Side::Them, Suit::Heart);
    assert!(engine.pending().is_some());
    assert_eq!(engine.phase(), Phase::Ended);

    engine.commit_round(0, 330).unwrap();
    assert_eq!(engine.totals(), SideMap::new(330, 330));
    assert_eq!(engine.winner(), Some(Side::Us));
}

/// Labels are cosmetic: renaming sides changes nothing in scoring.
#[test]
fn test_labels_do_not_affect_scoring() {
    let mut plain = ScoreEngine::default();
    let mut labelled = ScoreEngine::new(
        ScoringConfig::new().with_labels(SideLabels::new("Team Rose", "Team Tulip")),
    );

    for engine in [&mut plain, &mut labelled] {
        engine.set_target(120, Side::Us, Suit::Spade);
        engine.commit_round(150, 15).unwrap();
    }

    assert_eq!(plain.state(), labelled.state());
    assert_eq!(labelled.label(Side::Us), "Team Rose");
    assert_eq!(plain.label(Side::Them), "Them");
}

/// Blank labels fall back to defaults.
#[test]
fn test_blank_labels_fall_back() {
    let mut engine = ScoreEngine::default();
    engine.set_labels(SideLabels::new("", "Guests"));

    assert_eq!(engine.label(Side::Us), "Us");
    assert_eq!(engine.label(Side::Them), "Guests");
}

/// The `{valid, reason}` value serializes the way a UI expects.
#[test]
fn test_validation_json() {
    let engine = ScoreEngine::default();

    let ok = serde_json::to_value(engine.check_round_score(100, 65)).unwrap();
    assert_eq!(ok["valid"], true);
    assert!(ok["reason"].is_null());

    let bad: Validation = engine.check_round_score(100, 70);
    assert!(!bad.valid);
    assert_eq!(
        bad.reason.as_deref(),
        Some("round total must be 165 or 330 (got 170)")
    );
}

/// Options follow the live bid and are rebuilt each call.
#[test]
fn test_options_track_pending_bid() {
    let mut engine = ScoreEngine::default();
    assert_eq!(engine.valid_score_options().len(), 34);

    engine.set_target(150, Side::Them, Suit::Club);
    let options = engine.valid_score_options();
    assert_eq!(
        options.as_slice(),
        &[
            ScoreOption::new(165, 0),
            ScoreOption::new(15, 150),
            ScoreOption::new(10, 155),
            ScoreOption::new(5, 160),
            ScoreOption::new(0, 330),
        ]
    );

    engine.commit_round(15, 150).unwrap();
    assert_eq!(engine.valid_score_options().len(), 34);
}

/// Deleting an unknown round changes nothing.
#[test]
fn test_delete_unknown_round_noop() {
    let mut engine = ScoreEngine::default();
    engine.set_target(100, Side::Us, Suit::Spade);
    let id = engine.commit_round(100, 65).unwrap();
    let before = engine.state().clone();

    engine.delete_round(id.next().unwrap());
    assert_eq!(engine.state(), &before);
}
