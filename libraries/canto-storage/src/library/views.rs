//! Read views over the library
//!
//! Views resolve ids to tracks and silently drop ids that no longer resolve.

use super::Library;
use canto_core::{PlaylistId, Track};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of tracks on the home view
pub const RECENT_LIMIT: usize = 20;

/// Library listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first
    #[default]
    Recent,
    Title,
    Artist,
    Album,
}

impl Library {
    /// Up to `limit` tracks, newest first
    pub fn recent_tracks(&self, limit: usize) -> Vec<Track> {
        let mut tracks = self.sorted_tracks(SortBy::Recent);
        tracks.truncate(limit);
        tracks
    }

    /// All tracks in the requested order
    ///
    /// Text orders are case-insensitive; ties keep insertion order.
    pub fn sorted_tracks(&self, sort: SortBy) -> Vec<Track> {
        let mut tracks = self.tracks.clone();
        match sort {
            SortBy::Recent => tracks.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
            SortBy::Title => tracks.sort_by(|a, b| compare_text(&a.title, &b.title)),
            SortBy::Artist => tracks.sort_by(|a, b| compare_text(&a.artist, &b.artist)),
            SortBy::Album => tracks.sort_by(|a, b| compare_text(&a.album, &b.album)),
        }
        tracks
    }

    /// Tracks whose title, artist, album or genre contains `query`
    ///
    /// A blank query matches nothing. Surrounding spaces are part of the
    /// query otherwise.
    pub fn search(&self, query: &str) -> Vec<Track> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.matches(&needle))
            .cloned()
            .collect()
    }

    /// Liked tracks in library order
    pub fn liked_tracks(&self) -> Vec<Track> {
        self.tracks
            .iter()
            .filter(|t| self.liked.contains(&t.id))
            .cloned()
            .collect()
    }

    /// Tracks of a playlist in playlist order
    ///
    /// Returns `None` for an unknown playlist.
    pub fn playlist_tracks(&self, id: &PlaylistId) -> Option<Vec<Track>> {
        let playlist = self.playlist(id)?;
        Some(
            playlist
                .track_ids
                .iter()
                .filter_map(|track_id| self.track(track_id).cloned())
                .collect(),
        )
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
