//! Scoring rules as pure functions.
//!
//! Nothing here owns or mutates state:
//! - `validate_round_score`: is a proposed round legal under the bid?
//! - `valid_score_options`: every legal round score, for pickers
//! - `normalize_bonus`: rewrite a setter sweep as the bonus score
//! - `crossing`: which side, if any, has reached the winning score
//!
//! `ScoreEngine` composes these with `GameState`.

pub mod validation;
pub mod options;
pub mod outcome;

pub use validation::{normalize_bonus, validate_round_score, InvalidScore};
pub use options::{valid_score_options, ScoreOption, ScoreOptions};
pub use outcome::crossing;
