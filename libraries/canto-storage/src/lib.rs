//! Canto Storage
//!
//! Local persistence and library state for Canto.
//!
//! # Architecture
//!
//! - **Opaque store**: `KeyValueStore` is a get/set-by-key capability.
//!   `MemoryStore` keeps values in process memory, `FileStore` writes one
//!   JSON document per key into a directory.
//! - **Typed state**: `StateStore` serializes collections to JSON under
//!   prefixed keys and falls back to defaults when a value is missing or
//!   corrupt.
//! - **Vertical slices**: `Library` owns tracks, playlists and the liked set.
//!   Each slice persists only its own key.
//!
//! # Example
//!
//! ```rust
//! use canto_core::Track;
//! use canto_storage::{Library, StateStore};
//!
//! let store = StateStore::in_memory();
//! let mut library = Library::load(store.clone());
//!
//! let track = Track::new("Teardrop", "Massive Attack", "blob:1");
//! let id = track.id.clone();
//! library.add_tracks(vec![track]);
//! library.toggle_like(&id);
//!
//! // A second instance over the same store sees the same state
//! let reloaded = Library::load(store);
//! assert!(reloaded.is_liked(&id));
//! ```

mod error;
pub mod library;
pub mod state;
pub mod store;

pub use error::{LibraryError, Result, StoreError};
pub use library::{Library, SortBy, RECENT_LIMIT};
pub use state::{StateStore, DEFAULT_KEY_PREFIX, KEY_LIKED, KEY_PLAYLISTS, KEY_TRACKS, KEY_VOLUME};
pub use store::{FileStore, KeyValueStore, MemoryStore};
