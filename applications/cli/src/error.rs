/// CLI error types
use podcastr_playback::PlaybackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },

    #[error("No episode {index} in the catalogue ({len} episodes)")]
    NoSuchEpisode { index: usize, len: usize },

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
