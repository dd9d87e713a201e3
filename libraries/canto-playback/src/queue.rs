//! Playback queue
//!
//! The queue is the ordered list of tracks playback advances through, plus
//! the position of the current track in it. It is rebuilt whenever playback
//! starts from a new context (a library listing, a playlist, search results)
//! and is never persisted.

use canto_core::{Track, TrackId};

/// Ordered tracks with an optional current position
///
/// ```text
/// tracks:  [A] [B] [C] [D]
/// index:        ^
///               Some(1)
/// ```
///
/// `index` is `None` before anything was chosen and for an empty queue;
/// when `Some(i)`, `i < tracks.len()`.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    index: Option<usize>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue and position it on `start`
    ///
    /// A `start` id not present in `tracks` positions the queue at the first
    /// track. Returns the new index.
    pub fn replace(&mut self, tracks: Vec<Track>, start: &TrackId) -> Option<usize> {
        self.index = if tracks.is_empty() {
            None
        } else {
            Some(tracks.iter().position(|t| &t.id == start).unwrap_or(0))
        };
        self.tracks = tracks;
        self.index
    }

    /// Move to `index`; out-of-range indices are refused
    pub fn set_index(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at the current position
    pub fn current(&self) -> Option<&Track> {
        self.index.and_then(|i| self.tracks.get(i))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(title: &str) -> Track {
        Track::new(title, "Test Artist", format!("blob:{title}"))
    }

    #[test]
    fn new_queue_has_no_position() {
        let queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.index(), None);
        assert!(queue.current().is_none());
    }

    #[test]
    fn replace_positions_on_start_track() {
        let tracks = vec![
            create_test_track("1"),
            create_test_track("2"),
            create_test_track("3"),
        ];
        let start = tracks[2].id.clone();

        let mut queue = Queue::new();
        assert_eq!(queue.replace(tracks, &start), Some(2));
        assert_eq!(queue.current().unwrap().id, start);
    }

    #[test]
    fn replace_with_absent_start_uses_first() {
        let tracks = vec![create_test_track("1"), create_test_track("2")];
        let mut queue = Queue::new();

        assert_eq!(queue.replace(tracks, &TrackId::new("missing")), Some(0));
        assert_eq!(queue.replace(Vec::new(), &TrackId::new("missing")), None);
    }

    #[test]
    fn set_index_refuses_out_of_range() {
        let mut queue = Queue::new();
        let tracks = vec![create_test_track("1"), create_test_track("2")];
        let first = tracks[0].id.clone();
        queue.replace(tracks, &first);

        assert!(queue.set_index(1));
        assert!(!queue.set_index(2));
        assert_eq!(queue.index(), Some(1));
    }
}
