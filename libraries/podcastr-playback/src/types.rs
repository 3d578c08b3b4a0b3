//! Core types for playback state

use serde::{Deserialize, Serialize};

/// Episode information for the queue
///
/// Carries everything the player needs for display and playback.
/// Episodes are never mutated once they are in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Hosts and guests, as a display string
    pub members: String,

    /// Thumbnail reference (URL or asset path)
    pub thumbnail: String,

    /// Duration in whole seconds
    pub duration: u64,

    /// Playable source reference
    pub url: String,
}

/// Playback speed derived from the normal-speed flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    /// 1x
    Normal,

    /// 2x
    Double,
}

impl PlaybackSpeed {
    pub fn from_normal_flag(is_normal_speed: bool) -> Self {
        if is_normal_speed {
            PlaybackSpeed::Normal
        } else {
            PlaybackSpeed::Double
        }
    }

    /// Playback rate to hand to the media handle
    pub fn rate(self) -> f64 {
        match self {
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Double => 2.0,
        }
    }

    /// Label shown on the speed toggle
    pub fn label(self) -> &'static str {
        match self {
            PlaybackSpeed::Normal => "1x",
            PlaybackSpeed::Double => "2x",
        }
    }
}

/// Initial flag values for a new player store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start with looping enabled (default: false)
    pub looping: bool,

    /// Start with shuffle enabled (default: false)
    pub shuffle: bool,

    /// Start at normal speed (default: true)
    pub normal_speed: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            looping: false,
            shuffle: false,
            normal_speed: true,
        }
    }
}
