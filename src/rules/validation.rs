//! Round score validation.
//!
//! A proposed round is checked in a fixed order, stopping at the first
//! failure:
//!
//! 1. Both scores are multiples of the score step
//! 2. The scores add up to the round points or to the bonus points
//! 3. Neither score is negative
//! 4. With a bid pending, a scoring setter reaches the target
//! 5. With a bid pending, a setter sweep is not entered as a plain
//!    165-0 split (it must be entered as the 330-0 bonus)
//!
//! Rejections carry a short human-readable reason via `Display`.

use thiserror::Error;

use crate::core::{PendingBid, ScoringConfig, Side, SideMap};

/// Why a proposed round score was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidScore {
    #[error("scores must be multiples of {step}")]
    NotMultipleOfStep { step: i32 },

    #[error("round total must be {expected} or {bonus} (got {sum})")]
    BadTotal { expected: i32, bonus: i32, sum: i64 },

    #[error("scores cannot be negative")]
    Negative,

    #[error("{side} cannot score below their target ({target})")]
    BelowTarget { side: Side, target: i32 },

    #[error("a sweep by {side} must be recorded as {bonus} to 0")]
    SweepNeedsBonus { side: Side, bonus: i32 },
}

/// Validate a proposed round score against the rules and the pending bid.
///
/// Pure: reads only its arguments.
///
/// ```
/// use shelem_score::core::{PendingBid, ScoringConfig, Side, Suit};
/// use shelem_score::rules::{validate_round_score, InvalidScore};
///
/// let config = ScoringConfig::default();
/// let bid = PendingBid::new(100, Side::Them, Suit::Heart);
///
/// assert!(validate_round_score(&config, Some(bid), 0, 165).is_ok());
/// assert_eq!(
///     validate_round_score(&config, Some(bid), 85, 80),
///     Err(InvalidScore::BelowTarget { side: Side::Them, target: 100 }),
/// );
/// ```
pub fn validate_round_score(
    config: &ScoringConfig,
    pending: Option<PendingBid>,
    us: i32,
    them: i32,
) -> Result<(), InvalidScore> {
    if !config.on_step(us) || !config.on_step(them) {
        return Err(InvalidScore::NotMultipleOfStep {
            step: config.score_step,
        });
    }

    // Widened so extreme inputs are rejected instead of overflowing.
    let sum = i64::from(us) + i64::from(them);
    if sum != i64::from(config.round_points) && sum != i64::from(config.bonus_points()) {
        return Err(InvalidScore::BadTotal {
            expected: config.round_points,
            bonus: config.bonus_points(),
            sum,
        });
    }

    if us < 0 || them < 0 {
        return Err(InvalidScore::Negative);
    }

    match pending {
        Some(bid) => check_bid(config, bid, SideMap::new(us, them)),
        None => Ok(()),
    }
}

/// Rules 4 and 5: constraints a pending bid puts on the setter's score.
pub(crate) fn check_bid(
    config: &ScoringConfig,
    bid: PendingBid,
    scores: SideMap<i32>,
) -> Result<(), InvalidScore> {
    let own = scores[bid.setter];
    let other = scores[bid.setter.other()];

    if own > 0 && own < bid.target {
        return Err(InvalidScore::BelowTarget {
            side: bid.setter,
            target: bid.target,
        });
    }

    if own == config.round_points && other == 0 {
        return Err(InvalidScore::SweepNeedsBonus {
            side: bid.setter,
            bonus: config.bonus_points(),
        });
    }

    Ok(())
}

/// Rewrite a setter sweep as the bonus score.
///
/// If the setter's raw score equals the round points, the recorded score
/// becomes the bonus for the setter and 0 for the other side. Any other
/// pair is returned unchanged.
#[must_use]
pub fn normalize_bonus(config: &ScoringConfig, bid: PendingBid, scores: SideMap<i32>) -> SideMap<i32> {
    if scores[bid.setter] == config.round_points {
        let mut swept = SideMap::default();
        swept[bid.setter] = config.bonus_points();
        swept
    } else {
        scores
    }
}
