//! Error types for playback state

use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// An empty episode list was handed to `play_list`
    #[error("Queue is empty")]
    QueueEmpty,

    /// Starting index does not point into the list
    #[error("Index out of bounds: {index} (queue length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
