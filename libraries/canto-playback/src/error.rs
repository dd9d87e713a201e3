//! Error types for playback control

use thiserror::Error;

/// Engine errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The engine refused to start playback (autoplay policy, decode failure)
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// No source is loaded
    #[error("No source loaded")]
    NoSource,
}

/// Result type for engine calls
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Playback errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Index out of bounds
    #[error("Index {index} out of bounds for queue of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<PlaybackError> for canto_core::CantoError {
    fn from(err: PlaybackError) -> Self {
        canto_core::CantoError::playback(err.to_string())
    }
}

impl From<EngineError> for canto_core::CantoError {
    fn from(err: EngineError) -> Self {
        canto_core::CantoError::playback(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canto_core::CantoError;

    #[test]
    fn converts_into_core_error() {
        let err: CantoError = PlaybackError::IndexOutOfBounds { index: 4, len: 2 }.into();
        assert!(matches!(err, CantoError::Playback(ref msg) if msg.contains("out of bounds")));

        let err: CantoError = EngineError::NoSource.into();
        assert_eq!(err.to_string(), "Playback error: No source loaded");
    }
}
