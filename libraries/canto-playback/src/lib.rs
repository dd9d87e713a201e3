//! Canto - Playback Control
//!
//! Engine-agnostic playback and queue control for Canto.
//!
//! This crate provides:
//! - Transport (play, pause, next, previous, seek)
//! - A transient queue rebuilt from each playback context
//! - Shuffle and repeat (Off, All, One)
//! - Volume (0.0-1.0, persisted, mute toggle)
//! - UI events drained by the presentation layer
//!
//! # Architecture
//!
//! `canto-playback` never decodes audio. The media engine is provided via the
//! [`PlaybackEngine`] trait and reports back through a subscription the
//! controller holds for its whole lifetime. [`HeadlessEngine`] simulates one
//! with an explicit clock.
//!
//! # Example: Queue Playback
//!
//! ```rust
//! use canto_core::Track;
//! use canto_playback::{HeadlessEngine, PlaybackConfig, PlayerController};
//! use canto_storage::StateStore;
//!
//! let intro = Track::new("Intro", "The xx", "blob:intro").with_duration(128.0);
//! let next = Track::new("Crystalised", "The xx", "blob:crystalised");
//!
//! let engine = HeadlessEngine::new().with_duration("blob:intro", 128.0);
//! let mut player =
//!     PlayerController::new(engine, StateStore::in_memory(), PlaybackConfig::default());
//!
//! player.play(Some(intro.clone()), Some(vec![intro, next]));
//! assert!(player.is_playing());
//!
//! // Let the first track run out; the queue advances on its own
//! player.engine_mut().advance(130.0);
//! player.poll_events();
//! assert_eq!(
//!     player.current_track().map(|t| t.title.as_str()),
//!     Some("Crystalised")
//! );
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use canto_core::RepeatMode;
//! use canto_playback::{HeadlessEngine, PlaybackConfig, PlayerController};
//! use canto_storage::StateStore;
//!
//! let mut player = PlayerController::new(
//!     HeadlessEngine::new(),
//!     StateStore::in_memory(),
//!     PlaybackConfig::default(),
//! );
//!
//! player.toggle_shuffle();
//! player.toggle_repeat();
//! assert!(player.shuffle());
//! assert_eq!(player.repeat(), RepeatMode::All);
//! ```

pub mod advance;
mod controller;
pub mod engine;
mod error;
mod events;
mod queue;
pub mod types;
mod volume;

// Public exports
pub use controller::PlayerController;
pub use engine::{EngineEvent, EngineSubscription, HeadlessEngine, PlaybackEngine, SubscriptionId};
pub use error::{EngineError, EngineResult, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use queue::Queue;
pub use types::{PlaybackConfig, PlaybackState, PlayerSnapshot, DEFAULT_VOLUME};
pub use volume::Volume;
