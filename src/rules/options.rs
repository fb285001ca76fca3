//! Enumeration of the round scores a player may pick.
//!
//! The presentation layer shows these as buttons. The list is rebuilt on
//! every call because it depends on the live pending bid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::validation::check_bid;
use crate::core::{PendingBid, ScoringConfig, Side, SideMap};

/// One selectable round score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOption {
    pub us_score: i32,
    pub them_score: i32,
}

impl ScoreOption {
    #[must_use]
    pub const fn new(us_score: i32, them_score: i32) -> Self {
        Self { us_score, them_score }
    }

    /// Both scores as a map.
    #[must_use]
    pub const fn scores(self) -> SideMap<i32> {
        SideMap::new(self.us_score, self.them_score)
    }

    #[must_use]
    pub const fn total(self) -> i32 {
        self.us_score + self.them_score
    }
}

/// Score options. 34 regular splits plus one bonus fit inline.
pub type ScoreOptions = SmallVec<[ScoreOption; 36]>;

/// Every legal round score under the pending bid.
///
/// - No bid: every split of the round points, ascending by `us`
/// - With a bid: splits that satisfy the bid, ascending by the setter's
///   score, followed by the setter's bonus sweep
///
/// ```
/// use shelem_score::core::{PendingBid, ScoringConfig, Side, Suit};
/// use shelem_score::rules::{valid_score_options, ScoreOption};
///
/// let config = ScoringConfig::default();
/// assert_eq!(valid_score_options(&config, None).len(), 34);
///
/// let bid = PendingBid::new(160, Side::Us, Suit::Spade);
/// let options = valid_score_options(&config, Some(bid));
/// assert_eq!(
///     options.as_slice(),
///     &[ScoreOption::new(0, 165), ScoreOption::new(160, 5), ScoreOption::new(330, 0)],
/// );
/// ```
#[must_use]
pub fn valid_score_options(config: &ScoringConfig, pending: Option<PendingBid>) -> ScoreOptions {
    let round_points = config.round_points;
    let splits = (0..=round_points)
        .step_by(config.score_step as usize)
        .map(|us| ScoreOption::new(us, round_points - us));

    let Some(bid) = pending else {
        return splits.collect();
    };

    let mut options: ScoreOptions = splits
        .filter(|option| check_bid(config, bid, option.scores()).is_ok())
        .collect();

    if bid.setter == Side::Them {
        options.reverse();
    }

    let mut bonus = SideMap::default();
    bonus[bid.setter] = config.bonus_points();
    options.push(ScoreOption::new(bonus.us, bonus.them));

    options
}
