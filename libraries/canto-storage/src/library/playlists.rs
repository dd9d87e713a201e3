use super::Library;
use crate::error::LibraryError;
use canto_core::{Playlist, PlaylistId, TrackId};
use tracing::{debug, info};

impl Library {
    /// Create an empty playlist and return a copy of it
    ///
    /// Precondition: `name` is not blank. Callers validate names at the
    /// boundary; this method stores whatever it is given.
    pub fn create_playlist(&mut self, name: impl Into<String>) -> Playlist {
        let playlist = Playlist::new(name);
        self.playlists.push(playlist.clone());
        self.persist_playlists();
        info!(playlist_id = %playlist.id, name = %playlist.name, "Created playlist");
        playlist
    }

    /// Delete a playlist; its tracks stay in the library
    ///
    /// Returns `false` if no playlist had that id.
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> bool {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != id);
        let deleted = self.playlists.len() != before;
        if deleted {
            self.persist_playlists();
            info!(playlist_id = %id, "Deleted playlist");
        }
        deleted
    }

    /// Rename a playlist
    ///
    /// Precondition: `name` is not blank. Returns `false` for unknown ids.
    pub fn rename_playlist(&mut self, id: &PlaylistId, name: impl Into<String>) -> bool {
        let Some(playlist) = self.playlist_mut(id) else {
            debug!(playlist_id = %id, "Rename of unknown playlist ignored");
            return false;
        };
        playlist.name = name.into();
        self.persist_playlists();
        true
    }

    /// Append a track id to a playlist unless already present
    ///
    /// Returns `true` only if the playlist changed.
    pub fn add_to_playlist(&mut self, playlist_id: &PlaylistId, track_id: &TrackId) -> bool {
        let appended = self
            .playlist_mut(playlist_id)
            .is_some_and(|p| p.push_track(track_id.clone()));
        if appended {
            self.persist_playlists();
        }
        appended
    }

    /// Remove a track id from a playlist
    ///
    /// Returns `true` only if the playlist changed.
    pub fn remove_from_playlist(&mut self, playlist_id: &PlaylistId, track_id: &TrackId) -> bool {
        let removed = self
            .playlist_mut(playlist_id)
            .is_some_and(|p| p.remove_track(track_id));
        if removed {
            self.persist_playlists();
        }
        removed
    }

    /// Replace a playlist's order
    ///
    /// `ordered` must contain exactly the playlist's current ids. Anything
    /// else is rejected and the playlist is left untouched. Unknown playlist
    /// ids are ignored.
    pub fn reorder_playlist(
        &mut self,
        playlist_id: &PlaylistId,
        ordered: Vec<TrackId>,
    ) -> Result<(), LibraryError> {
        let Some(playlist) = self.playlist_mut(playlist_id) else {
            debug!(playlist_id = %playlist_id, "Reorder of unknown playlist ignored");
            return Ok(());
        };

        if !playlist.is_permutation(&ordered) {
            return Err(LibraryError::NotAPermutation {
                playlist_id: playlist_id.clone(),
                expected: playlist.len(),
                supplied: ordered.len(),
            });
        }

        if playlist.track_ids != ordered {
            playlist.track_ids = ordered;
            self.persist_playlists();
        }
        Ok(())
    }
}
