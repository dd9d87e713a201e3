//! The music app service
//!
//! One `MusicApp` per running application owns the library and the player.
//! It is constructed explicitly and handed to whatever presents it; every
//! mutation goes through `&mut self`.

use crate::config::AppConfig;
use crate::error::Result;
use canto_core::{CantoError, Playlist, PlaylistId, Track, TrackDraft, TrackId};
use canto_playback::{PlaybackConfig, PlaybackEngine, PlayerController};
use canto_storage::{Library, StateStore};
use tracing::{debug, info};

/// Library plus player, sharing one state store
pub struct MusicApp<E: PlaybackEngine> {
    library: Library,
    player: PlayerController<E>,
}

impl<E: PlaybackEngine> MusicApp<E> {
    /// Load the library from `store` and start a player around `engine`
    pub fn new(store: StateStore, engine: E, playback: PlaybackConfig) -> Self {
        let library = Library::load(store.clone());
        let player = PlayerController::new(engine, store, playback);
        info!(
            tracks = library.tracks().len(),
            playlists = library.playlists().len(),
            "Music app ready"
        );
        Self { library, player }
    }

    /// Open the configured store and build the app
    pub fn from_config(config: &AppConfig, engine: E) -> Result<Self> {
        let store = config.storage.open()?;
        Ok(Self::new(store, engine, config.playback.clone()))
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    pub fn player(&self) -> &PlayerController<E> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController<E> {
        &mut self.player
    }

    // ===== Uploads =====

    /// Add reviewed uploads to the library
    ///
    /// Each entry is a draft with the locators of its audio and optional
    /// cover. Returns the stored tracks.
    pub fn add_uploads(
        &mut self,
        uploads: Vec<(TrackDraft, String, Option<String>)>,
    ) -> Vec<Track> {
        let tracks: Vec<Track> = uploads
            .into_iter()
            .map(|(draft, file_url, cover_url)| draft.into_track(file_url, cover_url))
            .collect();
        self.library.add_tracks(tracks.clone());
        tracks
    }

    /// Remove a track everywhere in the library
    ///
    /// A track already in the queue keeps playing; it just stops showing up
    /// in [`visible_queue`](Self::visible_queue).
    pub fn remove_track(&mut self, id: &TrackId) -> Option<Track> {
        self.library.remove_track(id)
    }

    // ===== Playlists =====

    /// Create a playlist with a trimmed, non-blank name
    pub fn create_playlist(&mut self, name: &str) -> canto_core::Result<Playlist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CantoError::invalid_input("Playlist name cannot be empty"));
        }
        Ok(self.library.create_playlist(name))
    }

    /// Rename a playlist; blank names are ignored
    pub fn rename_playlist(&mut self, id: &PlaylistId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!(playlist_id = %id, "Ignoring blank playlist name");
            return false;
        }
        self.library.rename_playlist(id, name)
    }

    // ===== Playback =====

    /// Play `track_id` with `listing` as the queue
    ///
    /// Returns `false` if the track is not in the listing.
    pub fn play_from(&mut self, track_id: &TrackId, listing: Vec<Track>) -> bool {
        let Some(track) = listing.iter().find(|t| &t.id == track_id).cloned() else {
            debug!(track_id = %track_id, "Track not in listing");
            return false;
        };
        self.player.play(Some(track), Some(listing));
        true
    }

    /// Play a playlist from its first track
    ///
    /// Returns `false` for unknown or empty playlists.
    pub fn play_playlist(&mut self, id: &PlaylistId) -> bool {
        let Some(tracks) = self.library.playlist_tracks(id) else {
            return false;
        };
        let Some(first) = tracks.first().cloned() else {
            return false;
        };
        self.player.play(Some(first), Some(tracks));
        true
    }

    /// Play the liked tracks from the first one
    pub fn play_liked(&mut self) -> bool {
        let liked = self.library.liked_tracks();
        let Some(first) = liked.first().cloned() else {
            return false;
        };
        self.player.play(Some(first), Some(liked));
        true
    }

    /// Queue entries whose tracks still exist in the library
    pub fn visible_queue(&self) -> Vec<&Track> {
        self.player
            .queue()
            .iter()
            .filter(|t| self.library.contains_track(&t.id))
            .collect()
    }

    /// Apply pending engine events; call from the host's event loop
    pub fn tick(&mut self) -> usize {
        self.player.poll_events()
    }
}

impl<E: PlaybackEngine> std::fmt::Debug for MusicApp<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicApp")
            .field("tracks", &self.library.tracks().len())
            .field("playlists", &self.library.playlists().len())
            .field("state", &self.player.state())
            .finish_non_exhaustive()
    }
}
