//! In-memory media handle
//!
//! A media element without audio: it keeps a clock that only moves when
//! told to, and records every call the binder makes. Used by tests and by
//! the terminal driver.

use crate::error::{Result, TransportError};
use crate::handle::{MediaEvent, MediaHandle};

/// A call made on the simulated handle
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCall {
    SetSource(String),
    SetLooping(bool),
    SetPlaybackRate(f64),
    Play,
    Pause,
    SetCurrentTime(f64),
}

/// Simulated media element
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    source: Option<String>,
    duration: f64,
    looping: bool,
    rate: f64,
    paused: bool,
    current_time: f64,
    calls: Vec<MediaCall>,
    fail_play: Option<String>,
}

impl SimulatedMedia {
    pub fn new() -> Self {
        Self {
            source: None,
            duration: 0.0,
            looping: false,
            rate: 1.0,
            paused: true,
            current_time: 0.0,
            calls: Vec::new(),
            fail_play: None,
        }
    }

    /// Set the length of the loaded media, in seconds
    ///
    /// With a duration set, [`advance`](Self::advance) stops at the end (or
    /// wraps when looping) and reports [`MediaEvent::Ended`].
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds.max(0.0);
    }

    /// Make the next `play()` fail with `reason`
    pub fn fail_next_play(&mut self, reason: impl Into<String>) {
        self.fail_play = Some(reason.into());
    }

    /// Move the clock forward by `seconds` of wall time
    ///
    /// Does nothing while paused, or for a non-positive or non-finite
    /// step. Returns the events the element would raise: a time update, and
    /// `Ended` when the end is reached without looping.
    pub fn advance(&mut self, seconds: f64) -> Vec<MediaEvent> {
        if self.paused || self.source.is_none() || !seconds.is_finite() || seconds <= 0.0 {
            return Vec::new();
        }

        self.current_time += seconds * self.rate;

        if self.duration > 0.0 && self.current_time >= self.duration {
            if self.looping {
                self.current_time %= self.duration;
            } else {
                self.current_time = self.duration;
                self.paused = true;
                return vec![MediaEvent::TimeUpdate, MediaEvent::Ended];
            }
        }

        vec![MediaEvent::TimeUpdate]
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Every call made so far, oldest first
    pub fn calls(&self) -> &[MediaCall] {
        &self.calls
    }

    /// Forget recorded calls
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaHandle for SimulatedMedia {
    fn set_source(&mut self, url: &str) {
        self.calls.push(MediaCall::SetSource(url.to_string()));
        self.source = Some(url.to_string());
        self.current_time = 0.0;
        self.rate = 1.0;
        self.paused = true;
    }

    fn set_looping(&mut self, looping: bool) {
        self.calls.push(MediaCall::SetLooping(looping));
        self.looping = looping;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.calls.push(MediaCall::SetPlaybackRate(rate));
        self.rate = rate;
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(MediaCall::Play);
        if let Some(reason) = self.fail_play.take() {
            return Err(TransportError::Play(reason));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push(MediaCall::Pause);
        self.paused = true;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.calls.push(MediaCall::SetCurrentTime(seconds));
        self.current_time = seconds;
    }
}
