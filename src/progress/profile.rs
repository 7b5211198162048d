//! The single persisted blob: settings, star total and player name.
//!
//! The JSON shape is `{ "settings": {..}, "meta": { "totalStars": n }, "playerName": ".." }`.
//! Every field defaults, so older or partial records merge over the defaults
//! instead of failing to load.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: bool,
    pub voice: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { sound: true, voice: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub total_stars: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistentProfile {
    pub settings: Settings,
    pub meta: Meta,
    pub player_name: String,
}

impl PersistentProfile {
    pub fn cumulative_stars(&self) -> u32 {
        self.meta.total_stars
    }

    pub fn add_stars(&mut self, stars: u32) -> u32 {
        self.meta.total_stars = self.meta.total_stars.saturating_add(stars);
        self.meta.total_stars
    }

    /// Trim the loaded name the same way a saved name is trimmed.
    pub fn normalized(mut self) -> Self {
        self.player_name = self.player_name.trim().to_string();
        self
    }

    pub fn player_name(&self) -> Option<&str> {
        if self.player_name.is_empty() { None } else { Some(&self.player_name) }
    }
}

/// Trim `raw` and cut it to `max_chars` Unicode scalar values.
/// Returns `None` for a blank name.
pub fn normalize_player_name(raw: &str, max_chars: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(max_chars).collect())
}
