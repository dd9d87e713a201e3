//! Playback controller - core orchestration
//!
//! Coordinates queue, volume, shuffle/repeat and the media engine

use crate::{
    advance::next_index,
    engine::{EngineEvent, EngineSubscription, PlaybackEngine},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    queue::Queue,
    types::{PlaybackConfig, PlaybackState, PlayerSnapshot},
    volume::Volume,
};
use canto_core::{RepeatMode, Track};
use canto_storage::{StateStore, KEY_VOLUME};
use tracing::{debug, trace, warn};

/// Playback controller
///
/// Owns the engine exclusively. Engine notifications arrive through a
/// subscription opened in [`new`](Self::new) and closed on drop; call
/// [`poll_events`](Self::poll_events) to apply them.
pub struct PlayerController<E: PlaybackEngine> {
    engine: E,
    subscription: EngineSubscription,
    config: PlaybackConfig,

    // Persists the volume key
    store: StateStore,

    state: PlaybackState,
    current_track: Option<Track>,
    queue: Queue,
    volume: Volume,
    shuffle: bool,
    repeat: RepeatMode,
    current_time: f64,
    duration: f64,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl<E: PlaybackEngine> PlayerController<E> {
    /// Create a controller around `engine`
    ///
    /// The volume is restored from `store` (falling back to
    /// `config.default_volume`) and applied to the engine.
    pub fn new(mut engine: E, store: StateStore, config: PlaybackConfig) -> Self {
        let volume = Volume::new(store.load_or(KEY_VOLUME, config.default_volume));
        engine.set_volume(volume.level());
        let subscription = engine.subscribe();
        debug!(volume = volume.level(), "Playback controller ready");

        Self {
            engine,
            subscription,
            config,
            store,
            state: PlaybackState::Idle,
            current_track: None,
            queue: Queue::new(),
            volume,
            shuffle: false,
            repeat: RepeatMode::Off,
            current_time: 0.0,
            duration: 0.0,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Start playback
    ///
    /// - `track` and `queue`: the queue is replaced and positioned on
    ///   `track` (or its first entry if `track` is not in it).
    /// - `track` only: `track` plays, the queue and its position are kept.
    /// - neither: the current track resumes; without one this does nothing.
    pub fn play(&mut self, track: Option<Track>, queue: Option<Vec<Track>>) {
        match track {
            Some(track) => {
                if let Some(tracks) = queue {
                    self.queue.replace(tracks, &track.id);
                    self.emit_queue_changed();
                }
                self.load(track);
            }
            None if self.current_track.is_none() => {
                debug!("Play requested with nothing loaded");
                return;
            }
            None => {}
        }
        self.start_engine();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.engine.pause();
        if self.current_track.is_some() {
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Pause when playing, resume otherwise
    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(None, None);
        }
    }

    /// Skip to the next queue entry
    ///
    /// When the advance policy has nothing left, playback pauses on the
    /// current track.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let next = next_index(
            self.queue.len(),
            self.queue.index(),
            self.shuffle,
            self.repeat,
            &mut rand::thread_rng(),
        );

        match next {
            Some(index) => self.play_queue_entry(index),
            None => {
                debug!("End of queue");
                self.pause();
            }
        }
    }

    /// Go back
    ///
    /// Past the restart threshold this rewinds the current track. Otherwise
    /// it moves to the previous queue entry; at the head of the queue it
    /// does nothing.
    pub fn previous(&mut self) {
        if self.engine.current_time() > self.config.restart_threshold_secs {
            self.seek(0.0);
            return;
        }

        match self.queue.index() {
            Some(index) if index > 0 => self.play_queue_entry(index - 1),
            _ => debug!("No previous queue entry"),
        }
    }

    /// Play the queue entry at `index`
    pub fn play_index(&mut self, index: usize) -> Result<()> {
        let len = self.queue.len();
        if len == 0 {
            return Err(PlaybackError::QueueEmpty);
        }
        if index >= len {
            return Err(PlaybackError::IndexOutOfBounds { index, len });
        }
        self.play_queue_entry(index);
        Ok(())
    }

    // ===== Seek =====

    /// Move the playback position (seconds)
    ///
    /// The position is passed to the engine as given.
    pub fn seek(&mut self, seconds: f64) {
        self.engine.set_current_time(seconds);
        self.current_time = seconds;
        self.emit_position_update();
    }

    // ===== Volume =====

    /// Set volume, clamped to 0.0-1.0, and persist it
    pub fn set_volume(&mut self, level: f64) {
        let applied = self.volume.set_level(level);
        self.engine.set_volume(applied);
        self.store.save(KEY_VOLUME, &applied);
        self.emit_volume_changed();
    }

    /// Mute, or restore the default volume when already silent
    pub fn toggle_mute(&mut self) {
        let target = self.volume.toggled(self.config.default_volume);
        self.set_volume(target);
    }

    // ===== Shuffle & Repeat =====

    /// Flip shuffle; the queue order is left alone
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        debug!(shuffle = self.shuffle, "Shuffle toggled");
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    /// Cycle repeat `off → all → one → off`
    pub fn toggle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
        debug!(repeat = %self.repeat, "Repeat cycled");
        self.pending_events
            .push(PlaybackEvent::RepeatChanged { mode: self.repeat });
    }

    // ===== Engine Events =====

    /// Apply every engine event received since the last poll
    ///
    /// Returns the number of events applied.
    pub fn poll_events(&mut self) -> usize {
        // One at a time: handling an event may load a new source, which
        // discards whatever the old source still had queued
        let mut count = 0;
        while let Some(event) = self.subscription.try_next() {
            self.handle_engine_event(event);
            count += 1;
        }
        count
    }

    /// Apply one engine event
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::TimeUpdate(seconds) => {
                self.current_time = seconds;
                self.emit_position_update();
            }
            EngineEvent::DurationChange(seconds) => {
                self.duration = seconds;
                self.pending_events.push(PlaybackEvent::DurationChanged {
                    duration_secs: seconds,
                });
            }
            EngineEvent::Ended => self.handle_track_finished(),
        }
    }

    fn handle_track_finished(&mut self) {
        if let Some(track) = &self.current_track {
            self.pending_events.push(PlaybackEvent::TrackFinished {
                track_id: track.id.clone(),
            });
        }

        if self.repeat == RepeatMode::One {
            // Restart in place; the queue position does not move
            self.engine.set_current_time(0.0);
            self.current_time = 0.0;
            self.start_engine();
        } else {
            self.next();
        }
    }

    // ===== Internals =====

    fn play_queue_entry(&mut self, index: usize) {
        if !self.queue.set_index(index) {
            warn!(index, len = self.queue.len(), "Queue index out of range");
            return;
        }
        if let Some(track) = self.queue.current().cloned() {
            self.load(track);
            self.start_engine();
        }
    }

    /// Make `track` current and hand its locator to the engine
    fn load(&mut self, track: Track) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());

        // Events still queued belong to the outgoing source
        let stale = self.subscription.discard();
        if stale > 0 {
            trace!(stale, "Discarded events from previous source");
        }
        self.engine.set_source(&track.file_url);
        self.current_time = 0.0;
        self.duration = track.duration;

        debug!(track_id = %track.id, title = %track.title, "Loading track");
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });
        self.current_track = Some(track);
    }

    /// Mark playing and ask the engine to play
    ///
    /// A rejected request is not surfaced to the caller.
    fn start_engine(&mut self) {
        self.set_state(PlaybackState::Playing);

        if let Err(e) = self.engine.play() {
            debug!(error = %e, "Engine rejected play request");
            if self.config.revert_on_rejected_play {
                self.set_state(PlaybackState::Paused);
            }
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    pub fn queue_index(&self) -> Option<usize> {
        self.queue.index()
    }

    /// Current playback position in seconds, as last reported
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Known duration in seconds (0 if unknown)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Direct engine access, for engines driven from outside (test clocks)
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Serializable view of the player
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            state: self.state,
            current_track: self.current_track.clone(),
            is_playing: self.is_playing(),
            current_time: self.current_time,
            duration: self.duration,
            volume: self.volume.level(),
            shuffle: self.shuffle,
            repeat: self.repeat,
            queue_length: self.queue.len(),
            queue_index: self.queue.index(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_position_update(&mut self) {
        self.pending_events.push(PlaybackEvent::PositionUpdate {
            position_secs: self.current_time,
            duration_secs: self.duration,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
            index: self.queue.index(),
        });
    }
}

impl<E: PlaybackEngine> Drop for PlayerController<E> {
    fn drop(&mut self) {
        self.engine.unsubscribe(self.subscription.id());
        self.engine.unload();
    }
}

impl<E: PlaybackEngine + std::fmt::Debug> std::fmt::Debug for PlayerController<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("current_track", &self.current_track.as_ref().map(|t| &t.id))
            .field("queue_len", &self.queue.len())
            .field("queue_index", &self.queue.index())
            .field("volume", &self.volume.level())
            .field("shuffle", &self.shuffle)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessEngine;

    fn create_test_track(title: &str) -> Track {
        Track::new(title, "Test Artist", format!("blob:{title}")).with_duration(180.0)
    }

    fn create_controller() -> PlayerController<HeadlessEngine> {
        PlayerController::new(
            HeadlessEngine::new(),
            StateStore::in_memory(),
            PlaybackConfig::default(),
        )
    }

    #[test]
    fn create_playback_controller() {
        let controller = create_controller();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(controller.volume(), 0.7);
        assert_eq!(controller.engine().volume(), 0.7);
        assert!(controller.queue().is_empty());
        assert_eq!(controller.queue_index(), None);
    }

    #[test]
    fn volume_restored_from_store() {
        let store = StateStore::in_memory();
        store.save(KEY_VOLUME, &0.25);

        let controller =
            PlayerController::new(HeadlessEngine::new(), store, PlaybackConfig::default());
        assert_eq!(controller.volume(), 0.25);
    }

    #[test]
    fn out_of_range_stored_volume_is_clamped() {
        let store = StateStore::in_memory();
        store.save(KEY_VOLUME, &4.0);

        let controller =
            PlayerController::new(HeadlessEngine::new(), store, PlaybackConfig::default());
        assert_eq!(controller.volume(), 1.0);
    }

    #[test]
    fn resume_without_track_is_noop() {
        let mut controller = create_controller();
        controller.play(None, None);

        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn pause_while_idle_stays_idle() {
        let mut controller = create_controller();
        controller.pause();
        assert_eq!(controller.state(), PlaybackState::Idle);
    }

    #[test]
    fn play_index_bounds() {
        let mut controller = create_controller();
        assert_eq!(controller.play_index(0), Err(PlaybackError::QueueEmpty));

        let tracks = vec![create_test_track("1"), create_test_track("2")];
        controller.play(Some(tracks[0].clone()), Some(tracks.clone()));

        assert_eq!(
            controller.play_index(5),
            Err(PlaybackError::IndexOutOfBounds { index: 5, len: 2 })
        );
        controller.play_index(1).unwrap();
        assert_eq!(controller.current_track().unwrap().id, tracks[1].id);
    }

    #[test]
    fn state_events_only_on_change() {
        let mut controller = create_controller();
        let track = create_test_track("1");

        controller.play(Some(track.clone()), None);
        controller.play(None, None);
        let states: Vec<_> = controller
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, PlaybackEvent::StateChanged { .. }))
            .collect();

        assert_eq!(
            states,
            vec![PlaybackEvent::StateChanged {
                state: PlaybackState::Playing
            }]
        );
    }

    #[test]
    fn drop_releases_engine() {
        let mut engine = HeadlessEngine::new();
        {
            let mut controller = PlayerController::new(
                &mut engine,
                StateStore::in_memory(),
                PlaybackConfig::default(),
            );
            controller.play(Some(create_test_track("1")), None);
            assert_eq!(controller.engine().subscriber_count(), 1);
        }

        assert_eq!(engine.subscriber_count(), 0);
        assert!(engine.source().is_none());
    }
}
