//! Scoring configuration.
//!
//! - `ScoringConfig`: the numeric rules (round points, bid range, step,
//!   winning score) plus display labels
//! - `SideLabels`: cosmetic side names supplied by the presentation layer
//!
//! The defaults are the standard Shelem table rules. Labels are carried
//! as a pass-through value and never read by the scoring code.

use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};

/// Points available in one round.
pub const ROUND_POINTS: i32 = 165;

/// Smallest legal bid.
pub const MIN_TARGET: i32 = 85;

/// Cumulative total that ends the game.
pub const WINNING_SCORE: i32 = 1100;

/// Granularity of every score and bid.
pub const SCORE_STEP: i32 = 5;

const DEFAULT_US_LABEL: &str = "Us";
const DEFAULT_THEM_LABEL: &str = "Them";

/// Display names for the two sides.
///
/// Blank names fall back to the defaults.
///
/// ```
/// use shelem_score::core::{Side, SideLabels};
///
/// let labels = SideLabels::new("North/South", "  ");
/// assert_eq!(labels.get(Side::Us), "North/South");
/// assert_eq!(labels.get(Side::Them), "Them");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideLabels(SideMap<String>);

impl SideLabels {
    /// Create labels, substituting defaults for blank input.
    pub fn new(us: impl Into<String>, them: impl Into<String>) -> Self {
        Self(SideMap::new(
            label_or_default(us.into(), DEFAULT_US_LABEL),
            label_or_default(them.into(), DEFAULT_THEM_LABEL),
        ))
    }

    /// Label for a side.
    #[must_use]
    pub fn get(&self, side: Side) -> &str {
        &self.0[side]
    }
}

impl Default for SideLabels {
    fn default() -> Self {
        Self::new(DEFAULT_US_LABEL, DEFAULT_THEM_LABEL)
    }
}

fn label_or_default(label: String, default: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Complete scoring configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points available in a regular round.
    pub round_points: i32,

    /// Smallest legal bid.
    pub min_target: i32,

    /// Granularity of scores and bids.
    pub score_step: i32,

    /// Cumulative total that ends the game.
    pub winning_score: i32,

    /// Cosmetic side names.
    pub labels: SideLabels,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            round_points: ROUND_POINTS,
            min_target: MIN_TARGET,
            score_step: SCORE_STEP,
            winning_score: WINNING_SCORE,
            labels: SideLabels::default(),
        }
    }
}

impl ScoringConfig {
    /// Standard rules with default labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points recorded for a bonus sweep (double the round).
    #[must_use]
    pub const fn bonus_points(&self) -> i32 {
        self.round_points * 2
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: i32) -> Self {
        assert!(score > 0, "Winning score must be positive");
        self.winning_score = score;
        self
    }

    /// Set the minimum bid.
    #[must_use]
    pub fn with_min_target(mut self, target: i32) -> Self {
        assert!(target > 0, "Minimum target must be positive");
        assert!(
            target <= self.round_points,
            "Minimum target cannot exceed round points"
        );
        assert!(
            target % self.score_step == 0,
            "Minimum target must be a multiple of the score step"
        );
        self.min_target = target;
        self
    }

    /// Set the side labels.
    #[must_use]
    pub fn with_labels(mut self, labels: SideLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Is `value` a multiple of the score step?
    #[must_use]
    pub const fn on_step(&self, value: i32) -> bool {
        value % self.score_step == 0
    }

    /// Is `target` a legal bid?
    #[must_use]
    pub const fn is_valid_target(&self, target: i32) -> bool {
        target >= self.min_target && target <= self.round_points && self.on_step(target)
    }
}
