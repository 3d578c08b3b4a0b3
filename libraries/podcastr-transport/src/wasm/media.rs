//! `<audio>` element as a media handle

use crate::error::{Result, TransportError};
use crate::handle::MediaHandle;
use web_sys::{HtmlAudioElement, HtmlMediaElement};

// Calls go through `HtmlMediaElement` explicitly: several element methods
// share names with the trait and would otherwise resolve back to it.
impl MediaHandle for HtmlAudioElement {
    fn set_source(&mut self, url: &str) {
        let media: &HtmlMediaElement = self;
        media.set_src(url);
    }

    fn set_looping(&mut self, looping: bool) {
        let media: &HtmlMediaElement = self;
        media.set_loop(looping);
    }

    fn set_playback_rate(&mut self, rate: f64) {
        let media: &HtmlMediaElement = self;
        media.set_playback_rate(rate);
    }

    fn play(&mut self) -> Result<()> {
        let media: &HtmlMediaElement = self;
        // Autoplay rejection arrives on the returned promise, which is not awaited
        media
            .play()
            .map(|_promise| ())
            .map_err(|e| TransportError::Play(format!("{:?}", e)))
    }

    fn pause(&mut self) -> Result<()> {
        let media: &HtmlMediaElement = self;
        media
            .pause()
            .map_err(|e| TransportError::Pause(format!("{:?}", e)))
    }

    fn current_time(&self) -> f64 {
        let media: &HtmlMediaElement = self;
        media.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        let media: &HtmlMediaElement = self;
        media.set_current_time(seconds);
    }
}
