//! In-process engine with a simulated clock
//!
//! Produces no audio. Time only moves when [`HeadlessEngine::advance`] is
//! called, which makes transport behavior reproducible in tests and usable by
//! embedders that render nothing.

use super::{EngineEvent, EngineSubscription, PlaybackEngine, Subscribers, SubscriptionId};
use crate::error::{EngineError, EngineResult};
use std::collections::HashMap;
use tracing::debug;

/// Engine driven by an explicit clock
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    source: Option<String>,
    playing: bool,
    time: f64,
    duration: f64,
    volume: f64,
    durations: HashMap<String, f64>,
    reject_next_play: Option<String>,
    subscribers: Subscribers,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    /// Register the duration reported when `locator` is loaded
    #[must_use]
    pub fn with_duration(mut self, locator: impl Into<String>, seconds: f64) -> Self {
        self.set_duration(locator, seconds);
        self
    }

    /// Register the duration reported when `locator` is loaded
    ///
    /// Unregistered locators have an unknown duration and never end.
    pub fn set_duration(&mut self, locator: impl Into<String>, seconds: f64) {
        self.durations.insert(locator.into(), seconds);
    }

    /// Make the next `play` call fail with `reason`
    pub fn reject_next_play(&mut self, reason: impl Into<String>) {
        self.reject_next_play = Some(reason.into());
    }

    /// Move the clock forward while playing
    ///
    /// Emits a time update, and `Ended` once the clock reaches a known
    /// duration. Does nothing while paused or unloaded.
    pub fn advance(&mut self, seconds: f64) {
        if !self.playing || self.source.is_none() {
            return;
        }

        self.time += seconds.max(0.0);
        let finished = self.duration > 0.0 && self.time >= self.duration;
        if finished {
            self.time = self.duration;
        }
        self.subscribers.emit(EngineEvent::TimeUpdate(self.time));

        if finished {
            self.playing = false;
            debug!(source = ?self.source, "Headless engine reached end of source");
            self.subscribers.emit(EngineEvent::Ended);
        }
    }

    /// Currently loaded locator
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Output level last applied
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Duration of the loaded source (0 if unknown)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl PlaybackEngine for HeadlessEngine {
    fn set_source(&mut self, locator: &str) {
        self.source = Some(locator.to_string());
        self.playing = false;
        self.time = 0.0;
        self.duration = self.durations.get(locator).copied().unwrap_or(0.0);

        if self.duration > 0.0 {
            self.subscribers
                .emit(EngineEvent::DurationChange(self.duration));
        }
    }

    fn play(&mut self) -> EngineResult<()> {
        if let Some(reason) = self.reject_next_play.take() {
            return Err(EngineError::PlaybackRejected(reason));
        }
        if self.source.is_none() {
            return Err(EngineError::NoSource);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds.max(0.0);
        if self.duration > 0.0 {
            self.time = self.time.min(self.duration);
        }
        self.subscribers.emit(EngineEvent::TimeUpdate(self.time));
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn unload(&mut self) {
        self.source = None;
        self.playing = false;
        self.time = 0.0;
        self.duration = 0.0;
    }

    fn subscribe(&mut self) -> EngineSubscription {
        self.subscribers.subscribe()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
