//! Canto Core
//!
//! Platform-agnostic domain types and error handling for Canto.
//!
//! This crate provides the foundational building blocks shared by the storage,
//! playback, and application crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `RepeatMode`, `TrackId`, `PlaylistId`
//! - **Upload helpers**: `TrackDraft` (metadata guessed from a file name)
//! - **Display helpers**: `format_duration`, `format_time`
//! - **Error Handling**: Unified `CantoError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use canto_core::{Playlist, Track, TrackDraft};
//!
//! // Guess metadata from an uploaded file
//! let draft = TrackDraft::from_file_name("Daft Punk - Digital Love.mp3", 301.0);
//! let track: Track = draft.into_track("blob:session/1", None);
//! assert_eq!(track.artist, "Daft Punk");
//!
//! // Create a playlist and reference the track
//! let mut playlist = Playlist::new("Road Trip");
//! playlist.push_track(track.id.clone());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod types;

// Re-export commonly used types
pub use error::{CantoError, Result};
pub use format::{format_duration, format_time};
pub use types::{
    is_audio_mime, Playlist, PlaylistId, RepeatMode, Track, TrackDraft, TrackId,
    UNKNOWN_ARTIST, UNTITLED,
};
