/// Playlist domain type
use crate::types::{PlaylistId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// Holds track ids, never track copies. Ids are unique within a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Ordered track references
    #[serde(default)]
    pub track_ids: Vec<TrackId>,

    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new, empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            track_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the playlist references `track_id`
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.track_ids.contains(track_id)
    }

    /// Append a track id unless it is already present
    ///
    /// Returns `true` if the id was appended.
    pub fn push_track(&mut self, track_id: TrackId) -> bool {
        if self.contains(&track_id) {
            return false;
        }
        self.track_ids.push(track_id);
        true
    }

    /// Remove a track id
    ///
    /// Returns `true` if the id was present.
    pub fn remove_track(&mut self, track_id: &TrackId) -> bool {
        let before = self.track_ids.len();
        self.track_ids.retain(|id| id != track_id);
        self.track_ids.len() != before
    }

    /// Whether `ordered` holds exactly the same ids as this playlist
    pub fn is_permutation(&self, ordered: &[TrackId]) -> bool {
        if ordered.len() != self.track_ids.len() {
            return false;
        }
        let mut current: Vec<&TrackId> = self.track_ids.iter().collect();
        let mut proposed: Vec<&TrackId> = ordered.iter().collect();
        current.sort();
        proposed.sort();
        current == proposed
    }

    /// Number of referenced tracks
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Whether the playlist references no tracks
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}
