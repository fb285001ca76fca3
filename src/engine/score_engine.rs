//! The score engine: the only gate through which game state changes.
//!
//! ## Round cycle
//!
//! ```text
//! AwaitingTarget --set_target--> TargetSet --commit_round--> AwaitingTarget
//!        \                                                      /
//!         `------------- first total >= winning score -------> Ended
//! ```
//!
//! `Ended` is informational. `set_target` and `commit_round` stay callable
//! after the game ends; hiding those controls is up to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{AmendError, CommitError};
use crate::core::{
    GameState, PendingBid, Phase, Round, RoundId, ScoringConfig, Side, SideLabels, SideMap, Suit,
};
use crate::persistence::{GameSnapshot, SnapshotError, SnapshotStore};
use crate::rules::{self, InvalidScore, ScoreOptions};

/// Outcome of a validation, in a shape a UI can render directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

impl From<Result<(), InvalidScore>> for Validation {
    fn from(result: Result<(), InvalidScore>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                reason: None,
            },
            Err(err) => Self {
                valid: false,
                reason: Some(err.to_string()),
            },
        }
    }
}

/// Stateful score keeper for one game.
///
/// ## Example
///
/// ```
/// use shelem_score::core::{Side, Suit};
/// use shelem_score::engine::ScoreEngine;
///
/// let mut engine = ScoreEngine::default();
/// engine.set_target(120, Side::Us, Suit::Spade);
///
/// let id = engine.commit_round(150, 15).unwrap();
/// assert_eq!(engine.totals().us, 150);
/// assert_eq!(engine.round(id).unwrap().target, 120);
/// assert!(engine.pending().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
    state: GameState,
}

impl ScoreEngine {
    /// Create an engine with an empty game.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
        }
    }

    /// Create an engine around an existing state.
    #[must_use]
    pub fn with_state(config: ScoringConfig, state: GameState) -> Self {
        Self { config, state }
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Replace the display labels. Scoring is unaffected.
    pub fn set_labels(&mut self, labels: SideLabels) {
        self.config.labels = labels;
    }

    /// Display label for a side.
    #[must_use]
    pub fn label(&self, side: Side) -> &str {
        self.config.labels.get(side)
    }

    // === Queries ===

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rounds(&self) -> &im::Vector<Round> {
        self.state.rounds()
    }

    #[must_use]
    pub fn round(&self, id: RoundId) -> Option<&Round> {
        self.state.round(id)
    }

    #[must_use]
    pub fn totals(&self) -> SideMap<i32> {
        self.state.totals()
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingBid> {
        self.state.pending()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    #[must_use]
    pub fn is_game_ended(&self) -> bool {
        self.state.is_game_ended()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    // === Bidding ===

    /// Declare the bid for the next round.
    ///
    /// An out-of-range or off-step target is ignored.
    pub fn set_target(&mut self, target: i32, setter: Side, suit: Suit) {
        if !self.config.is_valid_target(target) {
            debug!(bid_target = target, %setter, "Ignoring invalid target");
            return;
        }
        self.state
            .set_pending(Some(PendingBid::new(target, setter, suit)));
    }

    // === Validation ===

    /// Check a proposed round score against the rules and the pending bid.
    pub fn validate_round_score(&self, us: i32, them: i32) -> Result<(), InvalidScore> {
        rules::validate_round_score(&self.config, self.state.pending(), us, them)
    }

    /// Same as `validate_round_score`, as a `{valid, reason}` value.
    #[must_use]
    pub fn check_round_score(&self, us: i32, them: i32) -> Validation {
        self.validate_round_score(us, them).into()
    }

    /// Every round score that would currently validate.
    #[must_use]
    pub fn valid_score_options(&self) -> ScoreOptions {
        rules::valid_score_options(&self.config, self.state.pending())
    }

    // === Mutation ===

    /// Record a round under the pending bid.
    ///
    /// A setter sweep is stored as the bonus score. On success the pending
    /// bid is cleared and the game-end check runs.
    pub fn commit_round(&mut self, us: i32, them: i32) -> Result<RoundId, CommitError> {
        self.validate_round_score(us, them)?;
        let bid = self.state.pending().ok_or(CommitError::TargetNotSet)?;

        let scores = rules::normalize_bonus(&self.config, bid, SideMap::new(us, them));
        let id = self
            .state
            .push_round(scores, bid)
            .ok_or(CommitError::RoundIdsExhausted)?;
        self.state.set_pending(None);

        debug!(
            round = %id,
            us = scores.us,
            them = scores.them,
            bid_target = bid.target,
            setter = %bid.setter,
            "Round committed"
        );

        self.settle();
        Ok(id)
    }

    /// Remove a round. Unknown IDs are ignored.
    ///
    /// A declared winner stays declared even if the totals fall back below
    /// the winning score.
    pub fn delete_round(&mut self, id: RoundId) {
        if self.state.remove_round(id).is_none() {
            debug!(round = %id, "Ignoring delete of unknown round");
            return;
        }
        debug!(round = %id, "Round deleted");
        self.settle();
    }

    /// Correct the scores of a committed round.
    ///
    /// The new scores are checked against the bid the round was played
    /// under, not the current pending bid.
    pub fn amend_round(&mut self, id: RoundId, us: i32, them: i32) -> Result<(), AmendError> {
        let bid = self
            .state
            .round(id)
            .map(Round::bid)
            .ok_or(AmendError::UnknownRound(id))?;

        rules::validate_round_score(&self.config, Some(bid), us, them)?;
        let scores = rules::normalize_bonus(&self.config, bid, SideMap::new(us, them));
        self.state.rescore_round(id, scores);

        debug!(round = %id, us = scores.us, them = scores.them, "Round amended");
        self.settle();
        Ok(())
    }

    /// Start over with an empty game. Labels are kept.
    pub fn reset_game(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
    }

    /// Declare a winner if none is declared and a side has crossed.
    fn settle(&mut self) {
        if self.state.is_game_ended() {
            return;
        }
        if let Some(side) = rules::crossing(self.state.totals(), self.config.winning_score) {
            let totals = self.state.totals();
            info!(winner = %side, us = totals.us, them = totals.them, "Game over");
            self.state.declare_winner(side);
        }
    }

    // === Snapshots ===

    /// Serializable copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    /// Replace the current state with a snapshot.
    ///
    /// A corrupt snapshot is rejected and the engine is left unchanged.
    pub fn apply_snapshot(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        self.state = snapshot.restore(&self.config)?;
        Ok(())
    }

    /// Persist the current state.
    pub fn save_to(&self, store: &mut impl SnapshotStore) -> Result<(), SnapshotError> {
        store.save(&self.snapshot())
    }
}
