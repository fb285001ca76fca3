//! Stateful score keeping.
//!
//! `ScoreEngine` owns one `GameState` and is the only way to change it.
//! Each operation composes the pure functions in `rules` and keeps the
//! state invariants (totals, sticky winner, pending bid) in one place.

pub mod error;
pub mod score_engine;

pub use error::{AmendError, CommitError};
pub use score_engine::{ScoreEngine, Validation};
