/// Storage-specific errors
use canto_core::PlaylistId;
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Key-value store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key cannot be mapped onto the backing store
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the store lock
    #[error("Store lock poisoned")]
    Poisoned,

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Library mutation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LibraryError {
    /// A reorder did not supply exactly the playlist's current ids
    #[error("Reorder of playlist {playlist_id} is not a permutation ({expected} ids expected, {supplied} supplied)")]
    NotAPermutation {
        playlist_id: PlaylistId,
        expected: usize,
        supplied: usize,
    },
}

impl From<StoreError> for canto_core::CantoError {
    fn from(err: StoreError) -> Self {
        canto_core::CantoError::storage(err.to_string())
    }
}

impl From<LibraryError> for canto_core::CantoError {
    fn from(err: LibraryError) -> Self {
        canto_core::CantoError::invalid_input(err.to_string())
    }
}
