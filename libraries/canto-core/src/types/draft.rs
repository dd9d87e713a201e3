//! Pending uploads
//!
//! A `TrackDraft` is the editable metadata for a file the user picked but has
//! not yet added to the library.

use crate::types::track::known_duration;
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Artist used when none can be derived
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Title used when the draft title is blank
pub const UNTITLED: &str = "Untitled";

/// Separator between artist and title in file names
const ARTIST_TITLE_SEPARATOR: &str = " - ";

/// Metadata for a file awaiting upload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackDraft {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Length in seconds as probed by the engine (0 if probing failed)
    pub duration: f64,
}

impl TrackDraft {
    /// Guess metadata from a file name
    ///
    /// `"Artist - Title.mp3"` yields artist and title; anything else becomes
    /// the title with an unknown artist. Segments after a second separator
    /// are dropped.
    pub fn from_file_name(file_name: &str, duration: f64) -> Self {
        let stem = strip_extension(file_name);
        let mut parts = stem.split(ARTIST_TITLE_SEPARATOR);
        let first = parts.next().unwrap_or_default();

        let (artist, title) = match parts.next() {
            Some(title) => (first.trim().to_string(), title.trim().to_string()),
            None => (UNKNOWN_ARTIST.to_string(), first.trim().to_string()),
        };

        Self {
            title,
            artist,
            album: String::new(),
            genre: String::new(),
            duration: known_duration(duration),
        }
    }

    /// Turn the draft into a library track
    ///
    /// Blank titles and artists fall back to `UNTITLED` and `UNKNOWN_ARTIST`.
    pub fn into_track(self, file_url: impl Into<String>, cover_url: Option<String>) -> Track {
        let title = if self.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            self.title
        };
        let artist = if self.artist.trim().is_empty() {
            UNKNOWN_ARTIST.to_string()
        } else {
            self.artist
        };

        let mut track = Track::new(title, artist, file_url)
            .with_album(self.album)
            .with_genre(self.genre)
            .with_duration(self.duration);
        track.cover_url = cover_url;
        track
    }
}

/// Whether a MIME type denotes audio the library accepts
pub fn is_audio_mime(mime: &str) -> bool {
    mime.starts_with("audio/")
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) => {
            let ext = &file_name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..dot]
            }
        }
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_artist_and_title() {
        let draft = TrackDraft::from_file_name("Massive Attack - Teardrop.flac", 330.0);
        assert_eq!(draft.artist, "Massive Attack");
        assert_eq!(draft.title, "Teardrop");
        assert_eq!(draft.duration, 330.0);
    }

    #[test]
    fn plain_name_has_unknown_artist() {
        let draft = TrackDraft::from_file_name("voice memo 3.m4a", 0.0);
        assert_eq!(draft.artist, UNKNOWN_ARTIST);
        assert_eq!(draft.title, "voice memo 3");
    }

    #[test]
    fn extra_segments_are_dropped() {
        let draft = TrackDraft::from_file_name("A - B - C.mp3", 1.0);
        assert_eq!(draft.artist, "A");
        assert_eq!(draft.title, "B");
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(strip_extension("live.at.wembley.mp3"), "live.at.wembley");
        assert_eq!(strip_extension("no_extension"), "no_extension");
        assert_eq!(strip_extension("trailing."), "trailing.");
    }

    #[test]
    fn blank_fields_fall_back_on_conversion() {
        let draft = TrackDraft {
            title: "  ".to_string(),
            artist: String::new(),
            duration: 12.0,
            ..TrackDraft::default()
        };
        let track = draft.into_track("blob:1", Some("blob:cover".to_string()));

        assert_eq!(track.title, UNTITLED);
        assert_eq!(track.artist, UNKNOWN_ARTIST);
        assert_eq!(track.cover_url.as_deref(), Some("blob:cover"));
        assert_eq!(track.duration, 12.0);
    }

    #[test]
    fn non_finite_length_is_unknown() {
        let draft = TrackDraft::from_file_name("x.mp3", f64::NAN);
        assert_eq!(draft.duration, 0.0);

        let edited = TrackDraft {
            duration: f64::INFINITY,
            ..draft
        };
        assert_eq!(edited.into_track("blob:1", None).duration, 0.0);
    }

    #[test]
    fn audio_mime_filter() {
        assert!(is_audio_mime("audio/mpeg"));
        assert!(is_audio_mime("audio/flac"));
        assert!(!is_audio_mime("image/png"));
        assert!(!is_audio_mime("video/mp4"));
    }
}
