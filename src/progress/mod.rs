//! Star totals, unlocks and the persisted profile.

pub mod profile;
pub mod store;
pub mod unlock;

pub use profile::{normalize_player_name, Meta, PersistentProfile, Settings};
pub use store::{JsonFileStore, MemoryStore, ProfileStore, PROFILE_PATH_ENV, STORAGE_KEY};
pub use unlock::UnlockTable;
