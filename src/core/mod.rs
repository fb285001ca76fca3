//! Core score-keeping types: sides, suits, rounds, state, configuration.
//!
//! This module holds data only. The rules that decide what a legal round
//! is live in `rules`; the operations that change state live in `engine`.

pub mod side;
pub mod suit;
pub mod round;
pub mod config;
pub mod state;

pub use side::{Side, SideMap};
pub use suit::Suit;
pub use round::{PendingBid, Round, RoundId};
pub use config::{ScoringConfig, SideLabels, MIN_TARGET, ROUND_POINTS, SCORE_STEP, WINNING_SCORE};
pub use state::{GameState, Phase};
