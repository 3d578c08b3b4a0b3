//! WASM-compatible player wrapper

use crate::binder::TransportBinder;
use crate::handle::MediaEvent;
use js_sys::Function;
use podcastr_playback::{Episode, PlaybackError, PlayerConfig, PlayerStore};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, HtmlMediaElement};

/// WASM-compatible player
///
/// Owns the store and a binder over an `<audio>` element. The page forwards
/// the element's media events through `handleMediaEvent` and redraws from
/// `view()` whenever `onStateChange` fires.
#[wasm_bindgen]
pub struct WasmPlayer {
    store: PlayerStore,
    binder: TransportBinder<HtmlAudioElement>,

    // Event callbacks
    on_state_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a new player
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self {
            store: PlayerStore::new(PlayerConfig::default()),
            binder: TransportBinder::new(),
            on_state_change: None,
            on_error: None,
        }
    }

    // ===== Element Lifecycle =====

    /// Attach the `<audio>` element
    pub fn mount(&mut self, audio: HtmlAudioElement) {
        self.binder.mount(audio, &self.store);
        self.emit_state_change();
    }

    /// Detach the `<audio>` element
    pub fn unmount(&mut self) {
        self.binder.unmount();
    }

    /// Forward a DOM media event ("loadedmetadata", "timeupdate", "ended",
    /// "play", "pause")
    #[wasm_bindgen(js_name = handleMediaEvent)]
    pub fn handle_media_event(&mut self, name: &str) {
        let Some(event) = MediaEvent::from_dom_name(name) else {
            return;
        };

        // Browsers raise `pause` right before `ended`; the ended handler
        // decides what happens next, so that pause must not stop playback.
        if event == MediaEvent::Paused && self.element_ended() {
            return;
        }

        self.binder.handle_event(event, &mut self.store);
        self.emit_state_change();
    }

    // ===== Queue Actions =====

    /// Play a single episode
    pub fn play(&mut self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episode: {}", e)))?;

        self.store.play(episode);
        self.after_action();
        Ok(())
    }

    /// Play a list of episodes starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let episodes: Vec<Episode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        self.store
            .play_list(episodes, index)
            .map_err(|e| self.handle_error(e))?;
        self.after_action();
        Ok(())
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.store.play_next();
        self.after_action();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.store.play_previous();
        self.after_action();
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.store.clear_player_state();
        self.after_action();
    }

    // ===== Flag Actions =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.store.toggle_play();
        self.after_action();
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.store.toggle_loop();
        self.after_action();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.store.toggle_shuffle();
        self.after_action();
    }

    #[wasm_bindgen(js_name = toggleSpeed)]
    pub fn toggle_speed(&mut self) {
        self.store.toggle_speed();
        self.after_action();
    }

    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, state: bool) {
        self.store.set_playing_state(state);
        self.after_action();
    }

    /// Seek from the scrubber, in seconds
    pub fn seek(&mut self, seconds: f64) {
        self.binder.seek(seconds, &self.store);
        self.emit_state_change();
    }

    // ===== State Queries =====

    #[wasm_bindgen(getter, js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.store.has_next()
    }

    #[wasm_bindgen(getter, js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.store.has_previous()
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.store.is_playing()
    }

    #[wasm_bindgen(getter, js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.store.is_looping()
    }

    #[wasm_bindgen(getter, js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.store.is_shuffling()
    }

    #[wasm_bindgen(getter, js_name = isNormalSpeed)]
    pub fn is_normal_speed(&self) -> bool {
        self.store.is_normal_speed()
    }

    #[wasm_bindgen(getter, js_name = currentEpisodeIndex)]
    pub fn current_episode_index(&self) -> usize {
        self.store.current_index()
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.binder.progress() as f64
    }

    /// Render model as a plain JS object
    pub fn view(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.binder.view(&self.store)).unwrap_or(JsValue::NULL)
    }

    /// Current queue as an array of episodes
    #[wasm_bindgen(js_name = episodeList)]
    pub fn episode_list(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.store.episodes()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register state change callback, called with the current view
    #[wasm_bindgen(js_name = onStateChange)]
    pub fn on_state_change(&mut self, callback: Function) {
        self.on_state_change = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal =====

    fn after_action(&mut self) {
        self.binder.sync(&mut self.store);
        self.emit_state_change();
    }

    fn element_ended(&self) -> bool {
        self.binder
            .handle()
            .map(|audio| {
                let media: &HtmlMediaElement = audio;
                media.ended()
            })
            .unwrap_or(false)
    }

    fn emit_state_change(&self) {
        if let Some(ref cb) = self.on_state_change {
            cb.call1(&JsValue::NULL, &self.view()).ok();
        }
    }

    fn handle_error(&self, error: PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

impl Default for WasmPlayer {
    fn default() -> Self {
        Self::new()
    }
}
