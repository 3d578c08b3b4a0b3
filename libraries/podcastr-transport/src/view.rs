//! Render model for the player widget
//!
//! Everything a UI layer needs to draw the player: either the empty
//! placeholder or the current episode with its scrubber and the enabled
//! state of every control.

use podcastr_playback::{PlaybackSpeed, PlayerStore};
use serde::Serialize;

/// What the player shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlayerView {
    /// Nothing queued; show the "pick a podcast" placeholder
    Empty {
        /// Controls, all disabled
        controls: ControlStates,
    },

    /// An episode is loaded
    NowPlaying(NowPlaying),
}

/// Current episode display data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub url: String,
    /// Elapsed whole seconds
    pub progress: u64,
    /// Scrubber upper bound, in seconds
    pub duration: u64,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub controls: ControlStates,
}

/// Enabled state of each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlStates {
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    pub repeat: bool,
    /// The speed toggle is hidden, not just disabled, without an episode
    pub speed_visible: bool,
    pub speed_label: &'static str,
}

impl ControlStates {
    /// Derive control states from the store
    pub fn from_store(store: &PlayerStore) -> Self {
        let has_episode = store.current_episode().is_some();

        Self {
            shuffle: has_episode && store.queue_len() != 1,
            previous: has_episode && store.has_previous(),
            play_pause: has_episode,
            next: has_episode && store.has_next(),
            repeat: has_episode,
            speed_visible: has_episode,
            speed_label: store.speed().label(),
        }
    }

    /// Everything disabled
    pub fn disabled() -> Self {
        Self {
            shuffle: false,
            previous: false,
            play_pause: false,
            next: false,
            repeat: false,
            speed_visible: false,
            speed_label: PlaybackSpeed::Normal.label(),
        }
    }
}

impl PlayerView {
    /// Build the view from store state plus the binder's local progress
    pub fn build(store: &PlayerStore, progress: u64) -> Self {
        let controls = ControlStates::from_store(store);

        match store.current_episode() {
            None => PlayerView::Empty { controls },
            Some(episode) => PlayerView::NowPlaying(NowPlaying {
                title: episode.title.clone(),
                members: episode.members.clone(),
                thumbnail: episode.thumbnail.clone(),
                url: episode.url.clone(),
                progress,
                duration: episode.duration,
                is_playing: store.is_playing(),
                is_looping: store.is_looping(),
                is_shuffling: store.is_shuffling(),
                controls,
            }),
        }
    }

    pub fn controls(&self) -> &ControlStates {
        match self {
            PlayerView::Empty { controls } => controls,
            PlayerView::NowPlaying(now) => &now.controls,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PlayerView::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_playback::Episode;

    fn create_test_episode(title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Ana".to_string(),
            thumbnail: format!("/thumbs/{}.jpg", title),
            duration: 1500,
            url: format!("https://cdn.example.com/{}.mp3", title),
        }
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let store = PlayerStore::default();
        let view = PlayerView::build(&store, 0);

        assert!(view.is_empty());
        assert_eq!(view.controls(), &ControlStates::disabled());
    }

    #[test]
    fn empty_store_disables_controls_even_while_shuffling() {
        let mut store = PlayerStore::default();
        store.toggle_shuffle();

        let controls = ControlStates::from_store(&store);
        // has_next is true while shuffling, but there is nothing to skip to
        assert!(store.has_next());
        assert!(!controls.next);
        assert!(!controls.play_pause);
    }

    #[test]
    fn single_episode_disables_shuffle_and_skips() {
        let mut store = PlayerStore::default();
        store.play(create_test_episode("solo"));

        let controls = ControlStates::from_store(&store);
        assert!(!controls.shuffle);
        assert!(!controls.previous);
        assert!(!controls.next);
        assert!(controls.play_pause);
        assert!(controls.repeat);
        assert!(controls.speed_visible);
    }

    #[test]
    fn middle_of_feed_enables_everything() {
        let mut store = PlayerStore::default();
        store
            .play_list(
                vec![
                    create_test_episode("a"),
                    create_test_episode("b"),
                    create_test_episode("c"),
                ],
                1,
            )
            .unwrap();
        store.toggle_speed();

        let view = PlayerView::build(&store, 42);
        let PlayerView::NowPlaying(now) = view else {
            panic!("expected an episode");
        };

        assert_eq!(now.title, "b");
        assert_eq!(now.progress, 42);
        assert_eq!(now.duration, 1500);
        assert!(now.is_playing);
        assert!(now.controls.shuffle);
        assert!(now.controls.previous);
        assert!(now.controls.next);
        assert_eq!(now.controls.speed_label, "2x");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let store = PlayerStore::default();
        let json = serde_json::to_value(PlayerView::build(&store, 0)).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["controls"]["speedLabel"], "1x");
    }
}
