//! Playback Events
//!
//! Event-based communication for UI synchronization during playback.
//! Events are queued by the controller and drained by the presentation
//! layer:
//! - State changes (play/pause/idle)
//! - Track changes (immediately on load)
//! - Position and duration updates (as reported by the engine)
//! - Volume, shuffle, repeat and queue changes

use crate::types::PlaybackState;
use canto_core::{RepeatMode, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track was loaded into the engine
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Position update from the engine
    PositionUpdate {
        /// Current playback position in seconds
        position_secs: f64,
        /// Known track duration in seconds
        duration_secs: f64,
    },

    /// Engine reported the real duration of the loaded source
    DurationChanged {
        /// Duration in seconds
        duration_secs: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f64,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Repeat mode cycled
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// Queue replaced
    QueueChanged {
        /// New queue length
        length: usize,
        /// New queue position
        index: Option<usize>,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },
}

impl PlaybackEvent {
    /// Whether this event only reports the clock moving
    pub fn is_position_update(&self) -> bool {
        matches!(self, Self::PositionUpdate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_updates_are_distinguished() {
        let tick = PlaybackEvent::PositionUpdate {
            position_secs: 1.0,
            duration_secs: 10.0,
        };
        let state = PlaybackEvent::StateChanged {
            state: PlaybackState::Playing,
        };

        assert!(tick.is_position_update());
        assert!(!state.is_position_update());
    }
}
