//! Game-end detection.

use crate::core::{Side, SideMap};

/// First side whose total has reached the winning score.
///
/// `Us` is checked before `Them`, so if both cross on the same round
/// `Us` wins.
///
/// ```
/// use shelem_score::core::{Side, SideMap};
/// use shelem_score::rules::crossing;
///
/// assert_eq!(crossing(SideMap::new(1095, 900), 1100), None);
/// assert_eq!(crossing(SideMap::new(900, 1100), 1100), Some(Side::Them));
/// assert_eq!(crossing(SideMap::new(1150, 1200), 1100), Some(Side::Us));
/// ```
#[must_use]
pub fn crossing(totals: SideMap<i32>, winning_score: i32) -> Option<Side> {
    Side::ALL
        .into_iter()
        .find(|&side| totals[side] >= winning_score)
}
