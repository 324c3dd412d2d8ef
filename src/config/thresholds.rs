//! Threshold configuration structures

use serde::{Deserialize, Serialize};

/// Number of award places gated by thresholds
pub const AWARD_PLACES: usize = 3;

/// Minimum scores gating the three award places
///
/// Valid configurations satisfy `first > second > third > 0`. The plain
/// placement routine trusts this; `placement::validate_input` enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(alias = "FirstPlaceMinScore", alias = "firstPlaceMinScore")]
    pub first: u32,
    #[serde(alias = "SecondPlaceMinScore", alias = "secondPlaceMinScore")]
    pub second: u32,
    #[serde(alias = "ThirdPlaceMinScore", alias = "thirdPlaceMinScore")]
    pub third: u32,
}

impl ThresholdConfig {
    pub fn new(first: u32, second: u32, third: u32) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Threshold for an award place, `None` outside 1..=3
    pub fn min_score(&self, place: u32) -> Option<u32> {
        match place {
            1 => Some(self.first),
            2 => Some(self.second),
            3 => Some(self.third),
            _ => None,
        }
    }

    /// `(min_score, place)` pairs in the order award places are attempted
    #[inline]
    pub fn tiers(&self) -> [(u32, u32); AWARD_PLACES] {
        [(self.first, 1), (self.second, 2), (self.third, 3)]
    }

    /// Whether the strict ordering `first > second > third > 0` holds
    pub fn is_strictly_decreasing(&self) -> bool {
        self.first > self.second && self.second > self.third && self.third > 0
    }
}
