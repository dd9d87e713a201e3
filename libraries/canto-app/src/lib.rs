//! Canto application context
//!
//! Wires the library and the player together behind [`MusicApp`], loads
//! [`AppConfig`] and installs logging.
//!
//! # Example
//!
//! ```rust
//! use canto_app::{AppConfig, MusicApp};
//! use canto_core::TrackDraft;
//! use canto_playback::HeadlessEngine;
//!
//! let config = AppConfig::default();
//! let mut app = MusicApp::from_config(&config, HeadlessEngine::new()).unwrap();
//!
//! let draft = TrackDraft::from_file_name("Massive Attack - Teardrop.flac", 330.0);
//! let added = app.add_uploads(vec![(draft, "blob:teardrop".to_string(), None)]);
//!
//! let listing = app.library().sorted_tracks(Default::default());
//! assert!(app.play_from(&added[0].id, listing));
//! assert!(app.player().is_playing());
//! ```

#![forbid(unsafe_code)]

mod app;
pub mod config;
mod error;
pub mod logging;

pub use app::MusicApp;
pub use config::{AppConfig, LoggingSettings, StorageBackend, StorageSettings};
pub use error::{AppError, Result};
pub use logging::init_tracing;
