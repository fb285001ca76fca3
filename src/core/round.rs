//! Rounds and the bid that governs the next one.
//!
//! A `Round` is the immutable record of one scored hand. It carries the
//! bid (`target`, setter, suit) that was in force when it was played.
//!
//! ## Round IDs
//!
//! IDs are allocated by `GameState` from a monotonically increasing
//! counter. They are never reused within a game, even after deletion.

use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};
use super::suit::Suit;

/// Unique identifier of a committed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Create a new round ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The ID following this one, or `None` at the end of the ID space.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for RoundId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Bid declared for the upcoming round.
///
/// Target, setter and suit always travel together; `GameState` holds an
/// `Option<PendingBid>` so none of them can be set alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingBid {
    /// Minimum the setter has committed to reach.
    pub target: i32,
    /// Side that declared the bid.
    pub setter: Side,
    /// Suit chosen with the bid.
    pub suit: Suit,
}

impl PendingBid {
    #[must_use]
    pub const fn new(target: i32, setter: Side, suit: Suit) -> Self {
        Self { target, setter, suit }
    }
}

/// A committed round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: RoundId,
    pub us_score: i32,
    pub them_score: i32,
    /// Bid in force when the round was played.
    pub target: i32,
    pub target_setter: Side,
    pub suit: Suit,
}

impl Round {
    /// Build a round from its scores and the bid it was played under.
    #[must_use]
    pub fn new(id: RoundId, scores: SideMap<i32>, bid: PendingBid) -> Self {
        Self {
            id,
            us_score: scores.us,
            them_score: scores.them,
            target: bid.target,
            target_setter: bid.setter,
            suit: bid.suit,
        }
    }

    /// Score recorded for one side.
    #[must_use]
    pub fn score(&self, side: Side) -> i32 {
        match side {
            Side::Us => self.us_score,
            Side::Them => self.them_score,
        }
    }

    /// Both scores as a map.
    #[must_use]
    pub fn scores(&self) -> SideMap<i32> {
        SideMap::new(self.us_score, self.them_score)
    }

    /// Combined points of the round (165, or 330 for a bonus sweep).
    ///
    /// Saturates instead of overflowing on out-of-range stored scores.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.us_score.saturating_add(self.them_score)
    }

    /// The bid this round was played under.
    #[must_use]
    pub fn bid(&self) -> PendingBid {
        PendingBid::new(self.target, self.target_setter, self.suit)
    }
}
