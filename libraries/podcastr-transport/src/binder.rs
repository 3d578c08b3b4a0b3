//! Transport binder
//!
//! Mirrors player store state onto a media handle and feeds handle events
//! back into the store.
//!
//! ```text
//! store action ──> PlayerEvent ──> sync() ──> MediaHandle calls
//!                                                   │
//! store action <── handle_event() <── MediaEvent <──┘
//! ```

use crate::handle::{MediaEvent, MediaHandle};
use crate::view::PlayerView;
use podcastr_playback::{PlayerEvent, PlayerStore};
use tracing::{debug, trace, warn};

/// Binds a [`PlayerStore`] to a [`MediaHandle`]
///
/// The store is the source of truth. The binder keeps only what the UI
/// needs locally: the elapsed-seconds progress and whether the progress
/// listener is attached (it is attached once metadata has loaded).
#[derive(Debug)]
pub struct TransportBinder<H: MediaHandle> {
    handle: Option<H>,
    progress: u64,
    listening: bool,
    loaded_url: Option<String>,
}

impl<H: MediaHandle> TransportBinder<H> {
    /// Create a binder with no handle mounted
    pub fn new() -> Self {
        Self {
            handle: None,
            progress: 0,
            listening: false,
            loaded_url: None,
        }
    }

    /// Mount a media handle and load the current episode into it
    pub fn mount(&mut self, handle: H, store: &PlayerStore) {
        debug!("Mounting media handle");
        self.handle = Some(handle);
        self.load_current(store);
    }

    /// Detach the media handle, handing it back
    pub fn unmount(&mut self) -> Option<H> {
        debug!("Unmounting media handle");
        self.progress = 0;
        self.listening = false;
        self.loaded_url = None;
        self.handle.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn handle_mut(&mut self) -> Option<&mut H> {
        self.handle.as_mut()
    }

    /// Elapsed whole seconds of the current episode
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Whether time updates are being mirrored into progress
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Source currently loaded into the handle
    pub fn loaded_url(&self) -> Option<&str> {
        self.loaded_url.as_deref()
    }

    /// Apply every change the store recorded since the last sync
    ///
    /// Changes are coalesced: an episode change loads the new source (and
    /// starts it if the store is playing), so a play/pause change in the
    /// same batch needs no separate call.
    pub fn sync(&mut self, store: &mut PlayerStore) {
        let events = store.drain_events();
        if events.is_empty() {
            return;
        }
        trace!(?events, "Syncing player events");

        let episode_changed = events
            .iter()
            .any(|e| e.changes_episode() || *e == PlayerEvent::Cleared);
        let playing_changed = events
            .iter()
            .any(|e| matches!(e, PlayerEvent::PlayingChanged { .. }));
        let looping_changed = events
            .iter()
            .any(|e| matches!(e, PlayerEvent::LoopingChanged { .. }));

        if episode_changed {
            self.load_current(store);
        } else {
            if playing_changed {
                self.apply_playing(store);
            }
            if looping_changed {
                if let Some(handle) = self.handle.as_mut() {
                    handle.set_looping(store.is_looping());
                }
            }
        }
    }

    /// React to an event raised by the media handle
    pub fn handle_event(&mut self, event: MediaEvent, store: &mut PlayerStore) {
        trace!(?event, "Media event");

        match event {
            MediaEvent::MetadataLoaded => {
                let Some(handle) = self.handle.as_mut() else {
                    return;
                };
                handle.set_current_time(0.0);
                self.progress = 0;
                self.listening = true;
            }
            MediaEvent::TimeUpdate => {
                if !self.listening {
                    return;
                }
                if let Some(handle) = self.handle.as_ref() {
                    self.progress = whole_seconds(handle.current_time());
                }
            }
            MediaEvent::Ended => {
                if store.has_next() {
                    debug!("Episode ended, moving to next");
                    store.play_next();
                } else {
                    debug!("Episode ended with nothing queued, clearing");
                    store.clear_player_state();
                }
                self.sync(store);
            }
            MediaEvent::Played => {
                store.set_playing_state(true);
                self.sync(store);
            }
            MediaEvent::Paused => {
                store.set_playing_state(false);
                self.sync(store);
            }
        }
    }

    /// Jump to `seconds` in the current episode
    ///
    /// The target is clamped to the episode's duration. No-op without a
    /// mounted handle or a current episode.
    pub fn seek(&mut self, seconds: f64, store: &PlayerStore) {
        let Some(episode) = store.current_episode() else {
            return;
        };
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        let target = if seconds.is_finite() {
            seconds.clamp(0.0, episode.duration as f64)
        } else {
            0.0
        };
        debug!(target, "Seeking");
        handle.set_current_time(target);
        self.progress = whole_seconds(target);
    }

    /// Render model for the current state
    pub fn view(&self, store: &PlayerStore) -> PlayerView {
        PlayerView::build(store, self.progress)
    }

    fn load_current(&mut self, store: &PlayerStore) {
        self.progress = 0;
        self.listening = false;

        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        match store.current_episode() {
            Some(episode) => {
                debug!(url = %episode.url, "Loading episode");
                handle.set_source(&episode.url);
                handle.set_looping(store.is_looping());
                self.loaded_url = Some(episode.url.clone());

                if store.is_playing() {
                    start(handle, store);
                }
            }
            None => {
                if self.loaded_url.take().is_some() {
                    debug!("Queue emptied, stopping media");
                    if let Err(err) = handle.pause() {
                        warn!(%err, "Media handle refused to stop");
                    }
                }
            }
        }
    }

    fn apply_playing(&mut self, store: &PlayerStore) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        if store.is_playing() {
            start(handle, store);
        } else if let Err(err) = handle.pause() {
            warn!(%err, "Media handle refused to pause");
        }
    }
}

impl<H: MediaHandle> Default for TransportBinder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set the rate for the current speed and start playback
fn start<H: MediaHandle>(handle: &mut H, store: &PlayerStore) {
    handle.set_playback_rate(store.speed().rate());
    if let Err(err) = handle.play() {
        warn!(%err, "Media handle refused to play");
    }
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    }
}
