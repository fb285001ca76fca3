//! Game state: rounds, totals, outcome and the pending bid.
//!
//! ## GameState
//!
//! The single mutable aggregate of a game:
//! - Committed rounds in play order
//! - Running totals (always the sum of the rounds)
//! - End-of-game flag and the sticky winner
//! - The bid declared for the next round, if any
//!
//! Mutation goes through crate-internal methods called by `ScoreEngine`;
//! outside the crate the state is read-only.

use im::Vector;

use super::round::{PendingBid, Round, RoundId};
use super::side::{Side, SideMap};

/// Where a game currently is in its round cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No bid declared for the next round.
    AwaitingTarget,
    /// A bid is pending; the next commit records a round.
    TargetSet,
    /// A side has reached the winning score.
    Ended,
}

/// Complete progress of one game.
///
/// Uses `im::Vector` for rounds so cloning a state (for snapshots or
/// what-if edits) is O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    rounds: Vector<Round>,
    totals: SideMap<i32>,
    game_ended: bool,
    winner: Option<Side>,
    pending: Option<PendingBid>,
    next_round_id: RoundId,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            rounds: Vector::new(),
            totals: SideMap::default(),
            game_ended: false,
            winner: None,
            pending: None,
            next_round_id: RoundId::new(1),
        }
    }
}

impl GameState {
    /// Create an empty game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from its parts.
    ///
    /// Totals are recomputed from `rounds`. The ID allocator is moved past
    /// the highest existing round ID if `next_round_id` is behind it.
    /// Callers reject rounds whose ID has no successor.
    pub(crate) fn from_parts(
        rounds: Vector<Round>,
        game_ended: bool,
        winner: Option<Side>,
        pending: Option<PendingBid>,
        next_round_id: Option<RoundId>,
    ) -> Self {
        let floor = rounds
            .iter()
            .filter_map(|r| r.id.next())
            .max()
            .unwrap_or(RoundId::new(1));
        let next_round_id = next_round_id.map_or(floor, |id| id.max(floor));

        let mut state = Self {
            rounds,
            totals: SideMap::default(),
            game_ended,
            winner,
            pending,
            next_round_id,
        };
        state.recompute_totals();
        state
    }

    // === Queries ===

    /// Committed rounds in play order.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    /// Look up a round by ID.
    #[must_use]
    pub fn round(&self, id: RoundId) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }

    /// Running totals.
    #[must_use]
    pub fn totals(&self) -> SideMap<i32> {
        self.totals
    }

    /// Has a side reached the winning score?
    #[must_use]
    pub fn is_game_ended(&self) -> bool {
        self.game_ended
    }

    /// Declared winner. Once set it never changes until reset.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Bid declared for the next round.
    #[must_use]
    pub fn pending(&self) -> Option<PendingBid> {
        self.pending
    }

    /// ID the next committed round will receive.
    #[must_use]
    pub fn next_round_id(&self) -> RoundId {
        self.next_round_id
    }

    /// Current phase of the round cycle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_ended {
            Phase::Ended
        } else if self.pending.is_some() {
            Phase::TargetSet
        } else {
            Phase::AwaitingTarget
        }
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_pending(&mut self, bid: Option<PendingBid>) {
        self.pending = bid;
    }

    /// Append a round with a freshly allocated ID.
    ///
    /// Returns `None`, leaving the state untouched, once the ID space is
    /// exhausted.
    pub(crate) fn push_round(&mut self, scores: SideMap<i32>, bid: PendingBid) -> Option<RoundId> {
        let id = self.next_round_id;
        self.next_round_id = id.next()?;
        self.rounds.push_back(Round::new(id, scores, bid));
        self.recompute_totals();
        Some(id)
    }

    /// Remove a round. Returns the removed round, if it existed.
    pub(crate) fn remove_round(&mut self, id: RoundId) -> Option<Round> {
        let index = self.rounds.iter().position(|r| r.id == id)?;
        let removed = self.rounds.remove(index);
        self.recompute_totals();
        Some(removed)
    }

    /// Overwrite a round's scores in place.
    ///
    /// Returns false if no round has this ID.
    pub(crate) fn rescore_round(&mut self, id: RoundId, scores: SideMap<i32>) -> bool {
        let Some(index) = self.rounds.iter().position(|r| r.id == id) else {
            return false;
        };
        let mut round = self.rounds[index].clone();
        round.us_score = scores.us;
        round.them_score = scores.them;
        self.rounds.set(index, round);
        self.recompute_totals();
        true
    }

    /// Declare the game over. Ignored if a winner is already declared.
    pub(crate) fn declare_winner(&mut self, side: Side) {
        if !self.game_ended {
            self.game_ended = true;
            self.winner = Some(side);
        }
    }

    fn recompute_totals(&mut self) {
        self.totals = self.rounds.iter().fold(SideMap::default(), |mut acc, r| {
            acc.us = acc.us.saturating_add(r.us_score);
            acc.them = acc.them.saturating_add(r.them_score);
            acc
        });
    }
}
