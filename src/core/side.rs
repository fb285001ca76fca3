//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two competing parties, `Us` and `Them`. Scoring treats them
//! symmetrically; only the winner check has an order (`Us` first).
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for totals and labels.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Us,
    Them,
}

impl Side {
    /// Both sides, in evaluation order.
    pub const ALL: [Side; 2] = [Side::Us, Side::Them];

    /// The opposing side.
    ///
    /// ```
    /// use shelem_score::core::Side;
    ///
    /// assert_eq!(Side::Us.other(), Side::Them);
    /// assert_eq!(Side::Them.other(), Side::Us);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Us => Side::Them,
            Side::Them => Side::Us,
        }
    }

    /// Slot index (0 for `Us`, 1 for `Them`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Us => 0,
            Side::Them => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Us => write!(f, "us"),
            Side::Them => write!(f, "them"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Serializes as `{ "us": .., "them": .. }`.
///
/// ## Example
///
/// ```
/// use shelem_score::core::{Side, SideMap};
///
/// let mut totals: SideMap<i32> = SideMap::default();
/// totals[Side::Us] += 150;
/// totals[Side::Them] += 15;
///
/// assert_eq!(totals[Side::Us], 150);
/// assert_eq!(totals.get(Side::Them), &15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub us: T,
    pub them: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit values.
    pub const fn new(us: T, them: T) -> Self {
        Self { us, them }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            us: factory(Side::Us),
            them: factory(Side::Them),
        }
    }

    /// Get a reference to a side's value.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Us => &self.us,
            Side::Them => &self.them,
        }
    }

    /// Get a mutable reference to a side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Us => &mut self.us,
            Side::Them => &mut self.them,
        }
    }

    /// Iterate over (Side, &T) pairs, `Us` first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Us, &self.us), (Side::Them, &self.them)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
