//! Library state
//!
//! The single owner of all known tracks, all playlists and the liked set.
//! Mutations take `&mut self`, so a cascade (e.g. removing a track from every
//! playlist) is never observable half-done.
//!
//! Operations are split into vertical slices:
//! - `tracks`: add/remove with cascading cleanup
//! - `playlists`: create/rename/delete and membership edits
//! - `liked`: like toggling
//! - `views`: sorted, searched and resolved read views

mod liked;
mod playlists;
mod tracks;
mod views;

pub use views::{SortBy, RECENT_LIMIT};

use crate::state::{StateStore, KEY_LIKED, KEY_PLAYLISTS, KEY_TRACKS};
use canto_core::{Playlist, PlaylistId, Track, TrackId};
use std::collections::BTreeSet;
use tracing::debug;

/// Tracks, playlists and likes, mirrored to a `StateStore`
#[derive(Debug)]
pub struct Library {
    store: StateStore,
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    liked: BTreeSet<TrackId>,
}

impl Library {
    /// Load every collection from `store`
    ///
    /// Missing or corrupt collections start empty.
    pub fn load(store: StateStore) -> Self {
        let tracks: Vec<Track> = store.load_or_default(KEY_TRACKS);
        let playlists: Vec<Playlist> = store.load_or_default(KEY_PLAYLISTS);
        let liked: BTreeSet<TrackId> = store.load_or_default(KEY_LIKED);

        debug!(
            tracks = tracks.len(),
            playlists = playlists.len(),
            liked = liked.len(),
            "Loaded library"
        );

        Self {
            store,
            tracks,
            playlists,
            liked,
        }
    }

    /// Empty library backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::load(StateStore::in_memory())
    }

    /// Store this library writes to
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    // ===== Accessors =====

    /// All tracks in insertion order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// All playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Track by id
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Playlist by id
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Whether the library holds a track with `id`
    pub fn contains_track(&self, id: &TrackId) -> bool {
        self.track(id).is_some()
    }

    /// Whether `id` is in the liked set
    pub fn is_liked(&self, id: &TrackId) -> bool {
        self.liked.contains(id)
    }

    /// The liked set, including ids that no longer resolve
    pub fn liked_ids(&self) -> &BTreeSet<TrackId> {
        &self.liked
    }

    // ===== Persistence =====

    fn persist_tracks(&self) {
        self.store.save(KEY_TRACKS, &self.tracks);
    }

    fn persist_playlists(&self) {
        self.store.save(KEY_PLAYLISTS, &self.playlists);
    }

    fn persist_liked(&self) {
        self.store.save(KEY_LIKED, &self.liked);
    }

    fn playlist_mut(&mut self, id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_empty_library() {
        let library = Library::in_memory();
        assert!(library.tracks().is_empty());
        assert!(library.playlists().is_empty());
        assert!(library.liked_ids().is_empty());
    }

    #[test]
    fn corrupt_collections_load_empty() {
        let store = StateStore::in_memory();
        store.backend().set("musicapp_tracks", "[{]").unwrap();
        store.backend().set("musicapp_liked", "42").unwrap();
        store.backend().set("musicapp_playlists", "null").unwrap();

        let library = Library::load(store);
        assert!(library.tracks().is_empty());
        assert!(library.liked_ids().is_empty());
        assert!(library.playlists().is_empty());
    }
}
