use serde::{Deserialize, Serialize};

use crate::config::{TIER2_STARS, TIER3_STARS};
use crate::quiz_engine::models::DifficultyTier;

/// Which tiers are playable for a given cumulative star total.
///
/// Always derived from the current total; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockTable {
    pub tier1: bool,
    pub tier2: bool,
    pub tier3: bool,
}

impl UnlockTable {
    pub fn from_stars(cumulative_stars: u32) -> Self {
        Self {
            tier1: true,
            tier2: cumulative_stars >= TIER2_STARS,
            tier3: cumulative_stars >= TIER3_STARS,
        }
    }

    pub fn is_unlocked(&self, tier: DifficultyTier) -> bool {
        match tier {
            DifficultyTier::One   => self.tier1,
            DifficultyTier::Two   => self.tier2,
            DifficultyTier::Three => self.tier3,
        }
    }

    /// Threshold of a tier that is still locked, for the menu's lock hint.
    pub fn stars_needed(&self, tier: DifficultyTier) -> Option<u32> {
        if self.is_unlocked(tier) {
            return None;
        }
        Some(threshold(tier))
    }
}

pub fn threshold(tier: DifficultyTier) -> u32 {
    match tier {
        DifficultyTier::One   => 0,
        DifficultyTier::Two   => TIER2_STARS,
        DifficultyTier::Three => TIER3_STARS,
    }
}
