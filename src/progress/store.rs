//! Storage backends for [`PersistentProfile`].
//!
//! `load` returns `Ok(None)` when nothing has been saved yet. Malformed data
//! is an error here; the [`Game`](crate::Game) turns any error into "no
//! prior state".

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::progress::profile::PersistentProfile;

/// Storage key / default file stem of the profile record.
pub const STORAGE_KEY: &str = "mica_uci_state_v1";

/// Environment variable that overrides the profile file location.
pub const PROFILE_PATH_ENV: &str = "MICA_UCI_PROFILE";

pub trait ProfileStore {
    fn load(&self) -> StoreResult<Option<PersistentProfile>>;
    fn save(&mut self, profile: &PersistentProfile) -> StoreResult<()>;
}

fn decode(raw: &str) -> StoreResult<PersistentProfile> {
    serde_json::from_str::<PersistentProfile>(raw)
        .map(PersistentProfile::normalized)
        .map_err(StoreError::Deserialization)
}

fn encode(profile: &PersistentProfile) -> StoreResult<String> {
    serde_json::to_string(profile).map_err(StoreError::Serialization)
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Keeps the serialized JSON, like a browser's key/value storage would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored string (possibly corrupt).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()) }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<PersistentProfile>> {
        match &self.raw {
            Some(raw) => decode(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, profile: &PersistentProfile) -> StoreResult<()> {
        self.raw = Some(encode(profile)?);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `MICA_UCI_PROFILE`, or `mica_uci_state_v1.json` in the
    /// working directory.
    pub fn from_env() -> Self {
        let path = std::env::var(PROFILE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(format!("{STORAGE_KEY}.json")));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<PersistentProfile>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io { operation: "read", path: self.path.clone(), source: e });
            }
        };
        decode(&raw).map(Some)
    }

    /// Temp file + rename, so a crash mid-write leaves the old record intact.
    fn save(&mut self, profile: &PersistentProfile) -> StoreResult<()> {
        let json = encode(profile)?;
        let temp_path = self.path.with_extension("json.tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(json.as_bytes()).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            operation: "rename",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!("saved profile to {}", self.path.display());
        Ok(())
    }
}
