//! Core types for playback control

use canto_core::{RepeatMode, Track};
use serde::{Deserialize, Serialize};

/// Volume applied when nothing is persisted and when unmuting
pub const DEFAULT_VOLUME: f64 = 0.7;

/// Seconds into a track after which "previous" restarts it instead
pub const DEFAULT_RESTART_THRESHOLD_SECS: f64 = 3.0;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No track loaded
    #[default]
    Idle,

    /// Playing (or waiting on the engine to start)
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume when none is stored, and the unmute level (default: 0.7)
    pub default_volume: f64,

    /// "Previous" restarts the track past this position (default: 3.0)
    pub restart_threshold_secs: f64,

    /// Clear the playing flag when the engine rejects a play request
    /// (default: false, the flag stays set)
    pub revert_on_rejected_play: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: DEFAULT_VOLUME,
            restart_threshold_secs: DEFAULT_RESTART_THRESHOLD_SECS,
            revert_on_rejected_play: false,
        }
    }
}

/// Point-in-time view of the player for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub queue_length: usize,
    pub queue_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.default_volume, 0.7);
        assert_eq!(config.restart_threshold_secs, 3.0);
        assert!(!config.revert_on_rejected_play);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: PlaybackConfig =
            serde_json::from_str(r#"{"revert_on_rejected_play":true}"#).unwrap();
        assert!(config.revert_on_rejected_play);
        assert_eq!(config.default_volume, DEFAULT_VOLUME);
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PlaybackState::Paused).unwrap(),
            "\"paused\""
        );
    }
}
