//! Serializable snapshot of a game.
//!
//! The snapshot is the only shape that crosses the persistence boundary:
//!
//! ```json
//! {
//!   "rounds": [{ "id": 1, "usScore": 150, "themScore": 15,
//!                "target": 120, "targetSetter": "us", "suit": "spade" }],
//!   "totals": { "us": 150, "them": 15 },
//!   "gameEnded": false,
//!   "winner": null,
//!   "pendingTarget": null,
//!   "pendingTargetSetter": null,
//!   "pendingSuit": null,
//!   "nextRoundId": 2
//! }
//! ```
//!
//! Restoring checks every round and the pending bid against the scoring
//! rules. Stored totals are ignored and recomputed from the rounds; a game
//! not marked ended must not already be past the winning score.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use crate::core::{GameState, PendingBid, Round, RoundId, ScoringConfig, Side, SideMap, Suit};
use crate::rules;

/// Full persisted form of a `GameState`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub totals: SideMap<i32>,
    #[serde(default)]
    pub game_ended: bool,
    #[serde(default)]
    pub winner: Option<Side>,
    #[serde(default)]
    pub pending_target: Option<i32>,
    #[serde(default)]
    pub pending_target_setter: Option<Side>,
    #[serde(default)]
    pub pending_suit: Option<Suit>,
    #[serde(default)]
    pub next_round_id: Option<RoundId>,
}

impl GameSnapshot {
    /// Capture a state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let pending = state.pending();
        Self {
            rounds: state.rounds().iter().cloned().collect(),
            totals: state.totals(),
            game_ended: state.is_game_ended(),
            winner: state.winner(),
            pending_target: pending.map(|b| b.target),
            pending_target_setter: pending.map(|b| b.setter),
            pending_suit: pending.map(|b| b.suit),
            next_round_id: Some(state.next_round_id()),
        }
    }

    /// Rebuild a state, rejecting snapshots that break the scoring rules.
    pub fn restore(&self, config: &ScoringConfig) -> Result<GameState, SnapshotError> {
        let mut seen = FxHashSet::default();
        for round in &self.rounds {
            check_round(config, round)?;
            if !seen.insert(round.id) {
                return Err(SnapshotError::corrupt(format!("duplicate round id {}", round.id)));
            }
        }

        let pending = match (self.pending_target, self.pending_target_setter, self.pending_suit) {
            (Some(target), Some(setter), Some(suit)) => {
                if !config.is_valid_target(target) {
                    return Err(SnapshotError::corrupt(format!("invalid pending target {target}")));
                }
                Some(PendingBid::new(target, setter, suit))
            }
            (None, None, None) => None,
            _ => return Err(SnapshotError::corrupt("partial pending bid")),
        };

        if self.game_ended != self.winner.is_some() {
            return Err(SnapshotError::corrupt("game end flag disagrees with winner"));
        }

        let state = GameState::from_parts(
            self.rounds.iter().cloned().collect(),
            self.game_ended,
            self.winner,
            pending,
            self.next_round_id,
        );
        if !state.is_game_ended() {
            if let Some(side) = rules::crossing(state.totals(), config.winning_score) {
                return Err(SnapshotError::corrupt(format!(
                    "{side} is past the winning score but no winner is recorded"
                )));
            }
        }
        Ok(state)
    }
}

fn check_round(config: &ScoringConfig, round: &Round) -> Result<(), SnapshotError> {
    let scores = [round.us_score, round.them_score];
    if scores.iter().any(|&s| s < 0 || !config.on_step(s)) {
        return Err(SnapshotError::corrupt(format!("{} has an invalid score", round.id)));
    }
    let total = round.total();
    if total != config.round_points && total != config.bonus_points() {
        return Err(SnapshotError::corrupt(format!(
            "{} totals {total}",
            round.id
        )));
    }
    if round.id.next().is_none() {
        return Err(SnapshotError::corrupt(format!("{} is out of range", round.id)));
    }
    if !config.is_valid_target(round.target) {
        return Err(SnapshotError::corrupt(format!(
            "{} has invalid target {}",
            round.id, round.target
        )));
    }
    Ok(())
}

/// Byte encoding used by a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnapshotFormat {
    /// Human-readable JSON via `serde_json`.
    #[default]
    Json,
    /// Compact binary via `bincode`.
    Binary,
}

impl SnapshotFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Binary => "bin",
        }
    }

    /// Encode a snapshot.
    pub fn encode(self, snapshot: &GameSnapshot) -> Result<Vec<u8>, SnapshotError> {
        Ok(match self {
            SnapshotFormat::Json => serde_json::to_vec(snapshot)?,
            SnapshotFormat::Binary => bincode::serialize(snapshot)?,
        })
    }

    /// Decode a snapshot.
    pub fn decode(self, bytes: &[u8]) -> Result<GameSnapshot, SnapshotError> {
        Ok(match self {
            SnapshotFormat::Json => serde_json::from_slice(bytes)?,
            SnapshotFormat::Binary => bincode::deserialize(bytes)?,
        })
    }
}
