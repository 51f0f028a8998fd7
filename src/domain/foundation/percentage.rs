//! Whole-number percentages for cohort shares and chart labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A share of the room, rounded to a whole percent.
///
/// Built from count-over-total ratios; the survey never needs fractional
/// precision, only a number a participant or presenter can read at a
/// glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Wraps a raw value, clamping anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// The share `count` makes up of `total`, rounded to the nearest whole
    /// percent. A zero total yields zero percent, which covers the
    /// empty-room dashboard without a special case at call sites.
    pub fn from_ratio(count: u64, total: u64) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let share = (count as f64 / total as f64) * 100.0;
        Self::new(share.round() as u8)
    }

    /// Returns the whole-percent value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
