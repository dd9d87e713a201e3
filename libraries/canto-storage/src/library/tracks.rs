use super::Library;
use canto_core::{Track, TrackId};
use tracing::info;

impl Library {
    /// Append tracks to the library
    ///
    /// Only caller-supplied ids distinguish tracks; identical content under
    /// different ids is kept twice.
    pub fn add_tracks(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }
        let count = tracks.len();
        self.tracks.extend(tracks);
        self.persist_tracks();
        info!(added = count, total = self.tracks.len(), "Added tracks");
    }

    /// Remove a track and every reference to it
    ///
    /// The id is stripped from all playlists and from the liked set even if
    /// the track itself was already gone. Returns the removed track.
    pub fn remove_track(&mut self, id: &TrackId) -> Option<Track> {
        let removed = self
            .tracks
            .iter()
            .position(|t| &t.id == id)
            .map(|index| self.tracks.remove(index));
        if removed.is_some() {
            self.persist_tracks();
        }

        let mut playlists_changed = false;
        for playlist in &mut self.playlists {
            playlists_changed |= playlist.remove_track(id);
        }
        if playlists_changed {
            self.persist_playlists();
        }

        if self.liked.remove(id) {
            self.persist_liked();
        }

        info!(track_id = %id, found = removed.is_some(), "Removed track");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_order() {
        let mut library = Library::in_memory();
        let a = Track::new("A", "X", "blob:a");
        let b = Track::new("B", "X", "blob:b");
        library.add_tracks(vec![a.clone(), b.clone()]);

        let ids: Vec<_> = library.tracks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[test]
    fn remove_cascades_to_playlists_and_likes() {
        let mut library = Library::in_memory();
        let track = Track::new("A", "X", "blob:a");
        let keep = Track::new("B", "X", "blob:b");
        library.add_tracks(vec![track.clone(), keep.clone()]);

        let p1 = library.create_playlist("One");
        let p2 = library.create_playlist("Two");
        library.add_to_playlist(&p1.id, &track.id);
        library.add_to_playlist(&p1.id, &keep.id);
        library.add_to_playlist(&p2.id, &track.id);
        library.toggle_like(&track.id);

        let removed = library.remove_track(&track.id);
        assert_eq!(removed.map(|t| t.id), Some(track.id.clone()));

        assert!(!library.contains_track(&track.id));
        assert!(library.playlists().iter().all(|p| !p.contains(&track.id)));
        assert!(!library.is_liked(&track.id));
        assert_eq!(library.playlist(&p1.id).unwrap().track_ids, vec![keep.id]);
    }

    #[test]
    fn removing_unknown_track_still_cleans_references() {
        let mut library = Library::in_memory();
        let ghost = TrackId::new("ghost");
        library.toggle_like(&ghost);

        assert!(library.remove_track(&ghost).is_none());
        assert!(!library.is_liked(&ghost));
    }
}
