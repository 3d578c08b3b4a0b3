//! Player store - playback state and actions
//!
//! Holds the episode queue and the four playback flags. All mutation goes
//! through the action methods, which record [`PlayerEvent`]s for whoever
//! mirrors the state onto a real media handle.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    queue::EpisodeQueue,
    shuffle::{RandomPicker, ShufflePicker},
    types::{Episode, PlaybackSpeed, PlayerConfig},
};
use std::mem::discriminant;
use tracing::debug;

/// Pending events kept before older events are folded together
const MAX_PENDING_EVENTS: usize = 64;

/// Playback state container
///
/// Flags are independent of each other; no action touches a flag it does
/// not name. Notably [`clear_player_state`](Self::clear_player_state)
/// leaves `is_playing` alone.
pub struct PlayerStore {
    queue: EpisodeQueue,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    is_normal_speed: bool,
    picker: Box<dyn ShufflePicker>,
    pending_events: Vec<PlayerEvent>,
}

impl std::fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStore")
            .field("queue", &self.queue)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .field("is_normal_speed", &self.is_normal_speed)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}

impl PlayerStore {
    /// Create a new store with the thread RNG for shuffle
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_picker(config, Box::new(RandomPicker))
    }

    /// Create a new store with a custom shuffle picker
    pub fn with_picker(config: PlayerConfig, picker: Box<dyn ShufflePicker>) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffle,
            is_normal_speed: config.normal_speed,
            picker,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Actions =====

    /// Play a single episode
    ///
    /// Replaces the queue with `[episode]` and starts playing.
    pub fn play(&mut self, episode: Episode) {
        debug!(title = %episode.title, "Playing single episode");
        self.queue.replace(vec![episode], 0);
        self.emit(PlayerEvent::QueueReplaced {
            length: 1,
            index: 0,
        });
        self.set_playing_state(true);
    }

    /// Play a list of episodes starting at `index`
    ///
    /// Rejects an empty list or an index past the end without touching
    /// any state.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        if episodes.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }
        if index >= episodes.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: episodes.len(),
            });
        }

        let length = episodes.len();
        debug!(length, index, "Playing episode list");
        self.queue.replace(episodes, index);
        self.emit(PlayerEvent::QueueReplaced { length, index });
        self.set_playing_state(true);
        Ok(())
    }

    /// Go to the next episode
    ///
    /// While shuffling this is a uniform pick over the whole queue (which
    /// can land on the current episode). Otherwise it advances by one, or
    /// does nothing at the end of the queue.
    pub fn play_next(&mut self) {
        if self.is_shuffling {
            if self.queue.is_empty() {
                return;
            }
            let index = self.picker.pick(self.queue.len());
            // Pickers are external; never trust them with the invariant
            if self.queue.jump_to(index) {
                debug!(index, "Shuffle picked next episode");
                self.emit(PlayerEvent::IndexChanged { index });
            }
        } else if self.queue.advance() {
            let index = self.queue.index();
            debug!(index, "Advanced to next episode");
            self.emit(PlayerEvent::IndexChanged { index });
        }
    }

    /// Go back one episode, if there is one
    pub fn play_previous(&mut self) {
        if self.queue.go_back() {
            let index = self.queue.index();
            debug!(index, "Went back to previous episode");
            self.emit(PlayerEvent::IndexChanged { index });
        }
    }

    /// Empty the queue and reset the index
    ///
    /// `is_playing` is intentionally left as it was.
    pub fn clear_player_state(&mut self) {
        debug!(length = self.queue.len(), "Clearing player state");
        self.queue.clear();
        self.emit(PlayerEvent::Cleared);
    }

    // ===== Flag Actions =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing_state(!self.is_playing);
    }

    /// Flip the looping flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!(is_looping = self.is_looping, "Toggled loop");
        self.emit(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip the shuffling flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!(is_shuffling = self.is_shuffling, "Toggled shuffle");
        self.emit(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Flip between normal and double speed
    pub fn toggle_speed(&mut self) {
        self.is_normal_speed = !self.is_normal_speed;
        let speed = self.speed();
        debug!(?speed, "Toggled speed");
        self.emit(PlayerEvent::SpeedChanged { speed });
    }

    /// Set the playing flag explicitly
    ///
    /// Used when the media handle itself reports play or pause.
    pub fn set_playing_state(&mut self, is_playing: bool) {
        if self.is_playing == is_playing {
            return;
        }
        self.is_playing = is_playing;
        debug!(is_playing, "Playing state changed");
        self.emit(PlayerEvent::PlayingChanged { is_playing });
    }

    // ===== Derived State =====

    /// True when the current position is past the first episode
    pub fn has_previous(&self) -> bool {
        self.queue.can_go_back()
    }

    /// True while shuffling, otherwise when an episode follows the current one
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.queue.has_next_in_order()
    }

    // ===== State Queries =====

    pub fn episodes(&self) -> &[Episode] {
        self.queue.episodes()
    }

    pub fn current_index(&self) -> usize {
        self.queue.index()
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn is_normal_speed(&self) -> bool {
        self.is_normal_speed
    }

    pub fn speed(&self) -> PlaybackSpeed {
        PlaybackSpeed::from_normal_flag(self.is_normal_speed)
    }

    // ===== Events =====

    /// Take all events recorded since the last drain
    ///
    /// A store nobody drains keeps at most a bounded backlog: once it is
    /// full, only the latest event of each kind is kept, which is all a
    /// consumer needs to bring a media handle up to date.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: PlayerEvent) {
        if self.pending_events.len() >= MAX_PENDING_EVENTS {
            self.compact_events();
        }
        self.pending_events.push(event);
    }

    /// Keep the latest event of each kind, in their original order
    fn compact_events(&mut self) {
        let mut kept: Vec<PlayerEvent> = Vec::new();
        for event in self.pending_events.drain(..).rev() {
            if !kept.iter().any(|k| discriminant(k) == discriminant(&event)) {
                kept.push(event);
            }
        }
        kept.reverse();
        self.pending_events = kept;
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picker that replays a fixed script of indices
    struct ScriptedPicker(Vec<usize>);

    impl ShufflePicker for ScriptedPicker {
        fn pick(&mut self, _len: usize) -> usize {
            self.0.remove(0)
        }
    }

    fn create_test_episode(title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Ana, Bruno".to_string(),
            thumbnail: format!("/thumbs/{}.jpg", title),
            duration: 2400,
            url: format!("https://cdn.example.com/{}.mp3", title),
        }
    }

    fn episodes(titles: &[&str]) -> Vec<Episode> {
        titles.iter().map(|t| create_test_episode(t)).collect()
    }

    #[test]
    fn new_store_is_idle() {
        let store = PlayerStore::default();
        assert!(store.is_empty());
        assert_eq!(store.current_index(), 0);
        assert!(!store.is_playing());
        assert!(!store.is_looping());
        assert!(!store.is_shuffling());
        assert!(store.is_normal_speed());
        assert!(!store.has_next());
        assert!(!store.has_previous());
        assert!(!store.has_pending_events());
    }

    #[test]
    fn config_sets_initial_flags() {
        let store = PlayerStore::new(PlayerConfig {
            looping: true,
            shuffle: true,
            normal_speed: false,
        });
        assert!(store.is_looping());
        assert!(store.is_shuffling());
        assert_eq!(store.speed(), PlaybackSpeed::Double);
    }

    #[test]
    fn play_single_episode() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 2).unwrap();
        store.drain_events();

        store.play(create_test_episode("solo"));

        assert_eq!(store.queue_len(), 1);
        assert_eq!(store.current_index(), 0);
        assert_eq!(store.current_episode().unwrap().title, "solo");
        assert!(store.is_playing());
        // Already playing, so only the queue changed
        assert_eq!(
            store.drain_events(),
            vec![PlayerEvent::QueueReplaced {
                length: 1,
                index: 0
            }]
        );
    }

    #[test]
    fn play_list_sets_queue_and_index() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 1).unwrap();

        assert_eq!(store.queue_len(), 3);
        assert_eq!(store.current_episode().unwrap().title, "b");
        assert!(store.is_playing());
        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::QueueReplaced {
                    length: 3,
                    index: 1
                },
                PlayerEvent::PlayingChanged { is_playing: true },
            ]
        );
    }

    #[test]
    fn play_list_rejects_bad_input_without_changes() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b"]), 1).unwrap();
        store.toggle_play();
        store.drain_events();

        assert_eq!(store.play_list(Vec::new(), 0), Err(PlaybackError::QueueEmpty));
        assert_eq!(
            store.play_list(episodes(&["x", "y", "z"]), 3),
            Err(PlaybackError::IndexOutOfBounds { index: 3, len: 3 })
        );

        assert_eq!(store.queue_len(), 2);
        assert_eq!(store.current_index(), 1);
        assert!(!store.is_playing());
        assert!(!store.has_pending_events());
    }

    #[test]
    fn end_of_queue_has_no_next() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 2).unwrap();
        store.drain_events();

        assert!(!store.has_next());
        assert!(store.has_previous());

        store.play_next();
        assert_eq!(store.current_index(), 2);
        assert!(!store.has_pending_events());
    }

    #[test]
    fn next_and_previous_move_by_one() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 0).unwrap();
        store.drain_events();

        store.play_next();
        assert_eq!(store.current_index(), 1);
        store.play_previous();
        assert_eq!(store.current_index(), 0);
        store.play_previous();
        assert_eq!(store.current_index(), 0);

        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::IndexChanged { index: 1 },
                PlayerEvent::IndexChanged { index: 0 },
            ]
        );
    }

    #[test]
    fn shuffle_overrides_end_of_queue() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 2).unwrap();
        assert!(!store.has_next());

        store.toggle_shuffle();
        assert!(store.has_next());
    }

    #[test]
    fn shuffle_uses_picker_and_may_repeat() {
        let mut store = PlayerStore::with_picker(
            PlayerConfig::default(),
            Box::new(ScriptedPicker(vec![2, 2, 0])),
        );
        store.play_list(episodes(&["a", "b", "c"]), 0).unwrap();
        store.toggle_shuffle();
        store.drain_events();

        store.play_next();
        assert_eq!(store.current_index(), 2);
        store.play_next();
        assert_eq!(store.current_index(), 2);
        store.play_next();
        assert_eq!(store.current_index(), 0);

        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::IndexChanged { index: 2 },
                PlayerEvent::IndexChanged { index: 2 },
                PlayerEvent::IndexChanged { index: 0 },
            ]
        );
    }

    #[test]
    fn misbehaving_picker_cannot_break_bounds() {
        let mut store =
            PlayerStore::with_picker(PlayerConfig::default(), Box::new(ScriptedPicker(vec![9])));
        store.play_list(episodes(&["a", "b"]), 1).unwrap();
        store.toggle_shuffle();

        store.play_next();
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn shuffle_next_on_empty_queue_is_noop() {
        let mut store = PlayerStore::default();
        store.toggle_shuffle();
        store.drain_events();

        assert!(store.has_next());
        store.play_next();
        assert_eq!(store.current_index(), 0);
        assert!(!store.has_pending_events());
    }

    #[test]
    fn clear_keeps_playing_flag() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 2).unwrap();
        assert!(store.is_playing());

        store.clear_player_state();

        assert!(store.is_empty());
        assert_eq!(store.current_index(), 0);
        assert!(store.is_playing());
        assert_eq!(store.drain_events().last(), Some(&PlayerEvent::Cleared));
    }

    #[test]
    fn toggles_are_independent() {
        let mut store = PlayerStore::default();

        store.toggle_loop();
        assert!(store.is_looping());
        assert!(!store.is_shuffling());
        assert!(store.is_normal_speed());
        assert!(!store.is_playing());

        store.toggle_speed();
        assert!(!store.is_normal_speed());
        assert!(store.is_looping());

        store.toggle_play();
        assert!(store.is_playing());
        store.toggle_play();
        assert!(!store.is_playing());

        assert_eq!(
            store.drain_events(),
            vec![
                PlayerEvent::LoopingChanged { is_looping: true },
                PlayerEvent::SpeedChanged {
                    speed: PlaybackSpeed::Double
                },
                PlayerEvent::PlayingChanged { is_playing: true },
                PlayerEvent::PlayingChanged { is_playing: false },
            ]
        );
    }

    #[test]
    fn set_playing_state_only_reports_changes() {
        let mut store = PlayerStore::default();
        store.set_playing_state(false);
        assert!(!store.has_pending_events());

        store.set_playing_state(true);
        store.set_playing_state(true);
        assert_eq!(
            store.drain_events(),
            vec![PlayerEvent::PlayingChanged { is_playing: true }]
        );
    }

    #[test]
    fn undrained_backlog_stays_bounded() {
        let mut store = PlayerStore::default();
        store.play_list(episodes(&["a", "b", "c"]), 0).unwrap();

        for _ in 0..10_001 {
            store.toggle_loop();
            assert!(store.pending_events.len() <= MAX_PENDING_EVENTS);
        }
        store.play_next();

        let events = store.drain_events();
        // Older kinds survive folding, newest values win
        assert!(events.contains(&PlayerEvent::QueueReplaced {
            length: 3,
            index: 0
        }));
        assert!(events.contains(&PlayerEvent::PlayingChanged { is_playing: true }));
        assert_eq!(
            events.last(),
            Some(&PlayerEvent::IndexChanged { index: 1 })
        );
        let last_loop = events
            .iter()
            .rev()
            .find(|e| matches!(e, PlayerEvent::LoopingChanged { .. }));
        assert_eq!(
            last_loop,
            Some(&PlayerEvent::LoopingChanged { is_looping: true })
        );
    }
}
