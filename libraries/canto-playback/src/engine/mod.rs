//! Media engine abstraction
//!
//! The controller drives exactly one engine through [`PlaybackEngine`]. The
//! engine loads resource locators, plays, pauses and seeks; it reports the
//! clock, the real duration and end-of-track back as [`EngineEvent`]s sent to
//! every live [`EngineSubscription`].

mod headless;

pub use headless::HeadlessEngine;

use crate::error::EngineResult;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fmt;
use tracing::trace;

/// Notification from the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// Playback clock moved (seconds)
    TimeUpdate(f64),
    /// Real duration of the loaded source became known (seconds)
    DurationChange(f64),
    /// Playback reached the end of the source
    Ended,
}

/// Handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Receiving end of an engine subscription
///
/// Events queue up until drained. Pass [`id`](Self::id) back to
/// [`PlaybackEngine::unsubscribe`] to stop delivery.
#[derive(Debug)]
pub struct EngineSubscription {
    id: SubscriptionId,
    receiver: Receiver<EngineEvent>,
}

impl EngineSubscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take every queued event in emission order
    pub fn drain(&self) -> Vec<EngineEvent> {
        self.receiver.try_iter().collect()
    }

    /// Take the oldest queued event, if any
    pub fn try_next(&self) -> Option<EngineEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drop every queued event, returning how many were dropped
    pub fn discard(&self) -> usize {
        self.receiver.try_iter().count()
    }

    /// Number of queued events
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

/// Media playback engine
///
/// Implementations wrap a real decoder/output or, like [`HeadlessEngine`],
/// simulate one. Calls are synchronous; only `play` can fail.
pub trait PlaybackEngine {
    /// Load a resource locator, replacing the current source
    fn set_source(&mut self, locator: &str);

    /// Start or resume playback of the loaded source
    fn play(&mut self) -> EngineResult<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playback clock (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Current playback clock (seconds)
    fn current_time(&self) -> f64;

    /// Set output level (0.0-1.0)
    fn set_volume(&mut self, volume: f64);

    /// Drop the loaded source
    fn unload(&mut self);

    /// Register a new event subscription
    fn subscribe(&mut self) -> EngineSubscription;

    /// Stop delivering events to a subscription
    fn unsubscribe(&mut self, id: SubscriptionId);
}

impl<E: PlaybackEngine + ?Sized> PlaybackEngine for &mut E {
    fn set_source(&mut self, locator: &str) {
        (**self).set_source(locator);
    }

    fn play(&mut self) -> EngineResult<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn set_current_time(&mut self, seconds: f64) {
        (**self).set_current_time(seconds);
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_volume(&mut self, volume: f64) {
        (**self).set_volume(volume);
    }

    fn unload(&mut self) {
        (**self).unload();
    }

    fn subscribe(&mut self) -> EngineSubscription {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id);
    }
}

/// Sender side of engine subscriptions
///
/// Engines embed one of these and call [`emit`](Self::emit) for every
/// notification.
#[derive(Debug, Default)]
pub struct Subscribers {
    next_id: u64,
    senders: Vec<(SubscriptionId, Sender<EngineEvent>)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new subscription
    pub fn subscribe(&mut self) -> EngineSubscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (sender, receiver) = unbounded();
        self.senders.push((id, sender));
        trace!(subscription = %id, "Engine subscription opened");

        EngineSubscription { id, receiver }
    }

    /// Close a subscription; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.senders.retain(|(sid, _)| *sid != id);
        trace!(subscription = %id, "Engine subscription closed");
    }

    /// Deliver an event to every subscriber
    ///
    /// Subscribers whose receiver was dropped are pruned.
    pub fn emit(&mut self, event: EngineEvent) {
        self.senders
            .retain(|(_, sender)| sender.send(event).is_ok());
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
