//! Media handle abstraction
//!
//! Abstracts the environment's playable media element (an `<audio>` element
//! in the browser, a simulated clock in tests and the terminal driver).

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Environment-provided transport handle
///
/// Implementors actually decode and play media. The binder only issues
/// these calls; everything the handle reports back arrives as
/// [`MediaEvent`]s fed to the binder by the host.
pub trait MediaHandle {
    /// Load a new source; playback position returns to the start
    fn set_source(&mut self, url: &str);

    /// Set whether the element restarts at the end instead of ending
    fn set_looping(&mut self, looping: bool);

    /// Set the playback rate (1.0 = normal)
    fn set_playback_rate(&mut self, rate: f64);

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Elapsed time in seconds
    fn current_time(&self) -> f64;

    /// Jump to a position in seconds
    fn set_current_time(&mut self, seconds: f64);
}

/// Events raised by a media handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaEvent {
    /// Duration and dimensions are known
    #[serde(rename = "loadedmetadata")]
    MetadataLoaded,

    /// Playback position moved
    #[serde(rename = "timeupdate")]
    TimeUpdate,

    /// Playback reached the end (never raised while looping)
    Ended,

    /// Playback started, from any source (including OS media keys)
    #[serde(rename = "play")]
    Played,

    /// Playback paused, from any source
    #[serde(rename = "pause")]
    Paused,
}

impl MediaEvent {
    /// Map a DOM media event name to an event
    pub fn from_dom_name(name: &str) -> Option<Self> {
        match name {
            "loadedmetadata" => Some(MediaEvent::MetadataLoaded),
            "timeupdate" => Some(MediaEvent::TimeUpdate),
            "ended" => Some(MediaEvent::Ended),
            "play" => Some(MediaEvent::Played),
            "pause" => Some(MediaEvent::Paused),
            _ => None,
        }
    }

    /// DOM event name for this event
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::MetadataLoaded => "loadedmetadata",
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::Ended => "ended",
            MediaEvent::Played => "play",
            MediaEvent::Paused => "pause",
        }
    }
}
