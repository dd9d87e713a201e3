mod draft;
mod ids;
mod playlist;
mod repeat_mode;
mod track;

pub use draft::{is_audio_mime, TrackDraft, UNKNOWN_ARTIST, UNTITLED};
pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use repeat_mode::RepeatMode;
pub use track::Track;
