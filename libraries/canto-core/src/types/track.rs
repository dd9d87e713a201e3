/// Track domain type
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Audio track
///
/// Serialized in camelCase with `addedAt` as epoch milliseconds, the layout
/// the persisted `tracks` collection uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (may be empty)
    #[serde(default)]
    pub album: String,

    /// Genre (may be empty)
    #[serde(default)]
    pub genre: String,

    /// Track duration in seconds (0 if unknown)
    ///
    /// Stored `null` or non-finite values load as 0.
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub duration: f64,

    /// Playable resource locator, valid for the current session only
    pub file_url: String,

    /// Cover image locator, valid for the current session only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// When the track was added to the library
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub added_at: DateTime<Utc>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        file_url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            genre: String::new(),
            duration: 0.0,
            file_url: file_url.into(),
            cover_url: None,
            added_at: Utc::now(),
        }
    }

    /// Set the album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the genre
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set the duration in seconds
    #[must_use]
    ///
    /// Negative or non-finite lengths count as unknown (0).
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = known_duration(seconds);
        self
    }

    /// Set the cover image locator
    #[must_use]
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    /// Whether the track length is known
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0 && self.duration.is_finite()
    }

    /// Case-insensitive match against title, artist, album and genre
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.artist, &self.album, &self.genre]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// `seconds` if it is a usable track length, otherwise 0
pub(crate) fn known_duration(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

// JSON has no NaN or infinity; serde_json writes them as `null`
fn deserialize_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = Option::<f64>::deserialize(deserializer)?;
    Ok(seconds.map_or(0.0, known_duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("Test Song", "Test Artist", "blob:1");
        assert_eq!(track.title, "Test Song");
        assert_eq!(track.file_url, "blob:1");
        assert!(track.album.is_empty());
        assert!(!track.has_duration());
        assert!(track.added_at <= Utc::now());
    }

    #[test]
    fn serializes_in_stored_layout() {
        let track = Track::new("Song", "Artist", "blob:1").with_duration(12.5);
        let json = serde_json::to_value(&track).unwrap();

        assert_eq!(json["fileUrl"], "blob:1");
        assert!(json["addedAt"].is_i64());
        assert!(json.get("coverUrl").is_none());

        let back: Track = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, track.id);
        assert_eq!(back.added_at.timestamp_millis(), track.added_at.timestamp_millis());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id":"t1","title":"T","artist":"A","fileUrl":"blob:x","addedAt":1700000000000}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.album, "");
        assert_eq!(track.duration, 0.0);
        assert!(track.cover_url.is_none());
    }

    #[test]
    fn unusable_duration_becomes_unknown() {
        let json = r#"{"id":"t1","title":"T","artist":"A","duration":null,"fileUrl":"blob:x","addedAt":1700000000000}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.duration, 0.0);

        let track = Track::new("T", "A", "blob:x").with_duration(f64::INFINITY);
        assert_eq!(track.duration, 0.0);
        assert_eq!(Track::new("T", "A", "blob:x").with_duration(-4.0).duration, 0.0);
        assert_eq!(Track::new("T", "A", "blob:x").with_duration(f64::NAN).duration, 0.0);
    }

    #[test]
    fn matches_any_text_field() {
        let track = Track::new("Blue Monday", "New Order", "blob:1")
            .with_album("Power, Corruption & Lies")
            .with_genre("Synth-pop");

        assert!(track.matches("monday"));
        assert!(track.matches("order"));
        assert!(track.matches("corruption"));
        assert!(track.matches("synth"));
        assert!(!track.matches("jazz"));
    }
}
