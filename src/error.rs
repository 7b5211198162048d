//! Error types for the game controller and the profile store.
//!
//! Question generation has no error path. Store failures surface here only
//! for code that talks to a [`ProfileStore`](crate::progress::ProfileStore)
//! directly; [`Game`](crate::Game) logs and swallows them.

use std::path::PathBuf;
use thiserror::Error;

use crate::quiz_engine::models::DifficultyTier;

/// Rejected requests to the [`Game`](crate::Game) controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The menu asked for a tier outside 1..=3.
    #[error("unknown difficulty tier {0}")]
    UnknownTier(u8),

    /// The tier exists but the player has not collected enough stars.
    #[error("{tier} is locked: needs {needed} stars, player has {have}")]
    TierLocked {
        tier: DifficultyTier,
        needed: u32,
        have: u32,
    },

    /// A cool-down is still draining; the run cannot be replaced yet.
    #[error("an answer cool-down is still pending")]
    CooldownPending,

    /// The submitted player name was blank after trimming.
    #[error("player name must not be empty")]
    EmptyName,

    /// `replay()` was called before any math run was played.
    #[error("no previous run to replay")]
    NoRun,
}

/// Failures of a [`ProfileStore`](crate::progress::ProfileStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {operation} profile file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize profile")]
    Serialization(#[source] serde_json::Error),

    #[error("stored profile is malformed")]
    Deserialization(#[source] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
