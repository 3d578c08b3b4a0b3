/// Transport errors
use thiserror::Error;

/// Result type for media handle calls
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors reported by a media handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The handle refused to start playback
    #[error("Failed to play: {0}")]
    Play(String),

    /// The handle refused to pause
    #[error("Failed to pause: {0}")]
    Pause(String),
}
