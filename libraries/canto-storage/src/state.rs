//! Typed persistence over an opaque key-value store
//!
//! Each collection is serialized independently under its own key, so writing
//! one never rewrites another. Reads never fail: a missing, unreadable, or
//! corrupt value yields the caller's fallback.
//!
//! # Example
//!
//! ```rust
//! use canto_storage::{StateStore, KEY_VOLUME};
//!
//! let store = StateStore::in_memory();
//! assert_eq!(store.load_or(KEY_VOLUME, 0.7_f32), 0.7);
//!
//! store.save(KEY_VOLUME, &0.4_f32);
//! assert_eq!(store.load_or(KEY_VOLUME, 0.7_f32), 0.4);
//! ```

use crate::error::Result;
use crate::store::{KeyValueStore, MemoryStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, warn};

// Collection key constants
/// Ordered sequence of tracks
pub const KEY_TRACKS: &str = "tracks";

/// Ordered sequence of playlists
pub const KEY_PLAYLISTS: &str = "playlists";

/// Liked track ids (order irrelevant)
pub const KEY_LIKED: &str = "liked";

/// Playback volume in [0, 1]
pub const KEY_VOLUME: &str = "volume";

/// Prefix applied to every key unless configured otherwise
pub const DEFAULT_KEY_PREFIX: &str = "musicapp_";

/// Shared handle for typed collection persistence
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl StateStore {
    /// Wrap a store, namespacing every key with `prefix`
    pub fn new(inner: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// Fresh in-memory store with the default prefix
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), DEFAULT_KEY_PREFIX)
    }

    /// Underlying store
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.inner
    }

    /// Key as written to the backend
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Read and decode the value under `key`
    ///
    /// Returns `Ok(None)` for a missing or empty value.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.inner.get(&self.full_key(key))? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Read the value under `key`, or `fallback` if it is missing or corrupt
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                warn!(key = %self.full_key(key), error = %e, "Discarding unreadable stored value");
                fallback
            }
        }
    }

    /// Read the value under `key`, or `T::default()` if it is missing or corrupt
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load_or(key, T::default())
    }

    /// Encode and write `value` under `key`
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_string(value)?;
        self.inner.set(&self.full_key(key), &encoded)
    }

    /// Encode and write `value` under `key`, logging failures
    ///
    /// Returns `false` if the write failed. In-memory state stays
    /// authoritative for the session either way.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(e) => {
                error!(key = %self.full_key(key), error = %e, "Failed to persist value");
                false
            }
        }
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed() {
        let store = StateStore::in_memory();
        store.save(KEY_LIKED, &vec!["a".to_string()]);

        let raw = store.backend().get("musicapp_liked").unwrap();
        assert_eq!(raw.as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn missing_and_empty_values_fall_back() {
        let store = StateStore::in_memory();
        let tracks: Vec<String> = store.load_or_default(KEY_TRACKS);
        assert!(tracks.is_empty());

        store.backend().set("musicapp_tracks", "").unwrap();
        let tracks: Vec<String> = store.load_or_default(KEY_TRACKS);
        assert!(tracks.is_empty());
    }

    #[test]
    fn corrupt_values_fall_back() {
        let store = StateStore::in_memory();
        store.backend().set("musicapp_volume", "{not json").unwrap();

        assert!(store.try_load::<f32>(KEY_VOLUME).is_err());
        assert_eq!(store.load_or(KEY_VOLUME, 0.7_f32), 0.7);
    }

    #[test]
    fn wrong_shape_falls_back() {
        let store = StateStore::in_memory();
        store.backend().set("musicapp_playlists", r#"{"a":1}"#).unwrap();

        let playlists: Vec<u32> = store.load_or_default(KEY_PLAYLISTS);
        assert!(playlists.is_empty());
    }

    #[test]
    fn custom_prefix() {
        let store = StateStore::new(Arc::new(MemoryStore::new()), "test.");
        assert_eq!(store.full_key(KEY_VOLUME), "test.volume");
    }
}
