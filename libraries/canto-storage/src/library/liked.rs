use super::Library;
use canto_core::TrackId;
use tracing::debug;

impl Library {
    /// Flip membership of `id` in the liked set
    ///
    /// The id is not checked against the library; a like for an unknown id
    /// is harmless and never resolves to a visible track. Returns the new
    /// membership.
    pub fn toggle_like(&mut self, id: &TrackId) -> bool {
        let liked = if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        };
        self.persist_liked();
        debug!(track_id = %id, liked, "Toggled like");
        liked
    }
}
