//! Tunable game constants.
//!
//! Every field has a default, so a partial JSON document (or none at all) is
//! a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cumulative stars needed to open tier 2.
pub const TIER2_STARS: u32 = 20;
/// Cumulative stars needed to open tier 3.
pub const TIER3_STARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Input lock after an answer before the next question appears.
    pub answer_cooldown_ms: u64,
    /// Input lock after the last life is lost before the run ends.
    pub failure_cooldown_ms: u64,
    pub letters_question_count: u32,
    /// Flat stars granted for finishing a letters run.
    pub letters_completion_bonus: u32,
    pub player_name_max_chars: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            answer_cooldown_ms: 450,
            failure_cooldown_ms: 500,
            letters_question_count: 10,
            letters_completion_bonus: 5,
            player_name_max_chars: 20,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn answer_cooldown(&self) -> Duration {
        Duration::from_millis(self.answer_cooldown_ms)
    }

    pub fn failure_cooldown(&self) -> Duration {
        Duration::from_millis(self.failure_cooldown_ms)
    }
}

/// Everything [`Game::new`](crate::Game::new) needs besides the store.
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    pub config: GameConfig,
    /// `Some` makes every generated question reproducible.
    pub rng_seed: Option<u64>,
}

impl GameOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { config: GameConfig::default(), rng_seed: Some(seed) }
    }
}
