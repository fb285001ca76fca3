//! # shelem-score
//!
//! Score keeping for two-side Shelem: round validation, bids, bonus
//! sweeps, running totals and game end.
//!
//! ## Rules
//!
//! - A round is worth 165 points, split between the two sides in steps of 5
//! - Before a round, one side bids a target from 85 to 165
//! - A bidder that scores anything must score at least its target
//! - A bidder that takes every point scores a 330-0 bonus sweep
//! - The first side to reach 1100 wins; the winner is never revoked
//!
//! ## Architecture
//!
//! - **Pure rules**: validation and option enumeration are plain functions
//!   of the configuration and the pending bid.
//!
//! - **Single mutation gate**: `ScoreEngine` is the only way to change a
//!   `GameState`, so totals and the sticky winner are maintained in one place.
//!
//! - **Persistent Data Structures**: O(1) cloning of rounds via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Sides, suits, rounds, game state, configuration
//! - `rules`: Validation, score options, bonus normalization, game end
//! - `engine`: `ScoreEngine` and its errors
//! - `persistence`: Snapshots and snapshot stores

pub mod core;
pub mod rules;
pub mod engine;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap, Suit,
    RoundId, Round, PendingBid,
    GameState, Phase,
    ScoringConfig, SideLabels,
};

pub use crate::rules::{InvalidScore, ScoreOption, ScoreOptions};

pub use crate::engine::{AmendError, CommitError, ScoreEngine, Validation};

pub use crate::persistence::{
    GameSnapshot, SnapshotError, SnapshotFormat,
    SnapshotStore, MemoryStore, FileStore, load_engine,
};
