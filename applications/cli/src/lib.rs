//! Podcastr CLI Library
//!
//! Terminal driver for the Podcastr player: loads a configured episode
//! catalogue and drives the playback store and transport binder from line
//! commands, over a simulated media element.
//!
//! This library exposes the session and configuration for testing purposes.

pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types for convenience
pub use config::{AppConfig, LoggingSettings, PlayerSettings, DEFAULT_CONFIG_FILE};
pub use error::{AppError, Result};
pub use session::{Command, Reply, Session};
