//! Podcastr - Playback State
//!
//! Platform-agnostic playback state for the Podcastr player.
//!
//! This crate provides:
//! - Episode queue replaced by "play" / "play list"
//! - Next / previous navigation with derived `has_next` / `has_previous`
//! - Shuffle as a uniform pick over the queue
//! - Independent play, loop, shuffle and speed flags
//! - Change events for mirroring state onto a media handle
//!
//! # Architecture
//!
//! `podcastr-playback` knows nothing about audio. The transport binder in
//! `podcastr-transport` drains [`PlayerEvent`]s after each action and drives
//! the real media element.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerConfig, PlayerStore};
//!
//! let mut store = PlayerStore::new(PlayerConfig::default());
//!
//! let episode = Episode {
//!     title: "Pilot".to_string(),
//!     members: "Ana, Bruno".to_string(),
//!     thumbnail: "/thumbs/pilot.jpg".to_string(),
//!     duration: 3600,
//!     url: "https://cdn.example.com/pilot.mp3".to_string(),
//! };
//!
//! store.play(episode);
//! assert!(store.is_playing());
//! assert!(!store.has_next());
//! ```
//!
//! # Example: Shuffle
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerConfig, PlayerStore};
//!
//! # let ep = |t: &str| Episode {
//! #     title: t.to_string(),
//! #     members: String::new(),
//! #     thumbnail: String::new(),
//! #     duration: 60,
//! #     url: format!("https://cdn.example.com/{t}.mp3"),
//! # };
//! let mut store = PlayerStore::new(PlayerConfig::default());
//! store.play_list(vec![ep("a"), ep("b"), ep("c")], 2).unwrap();
//! assert!(!store.has_next());
//!
//! // Shuffle always has somewhere to go
//! store.toggle_shuffle();
//! assert!(store.has_next());
//! store.play_next();
//! assert!(store.current_index() < 3);
//! ```

mod error;
mod events;
mod queue;
mod shared;
mod shuffle;
mod store;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use queue::EpisodeQueue;
pub use shared::SharedPlayer;
pub use shuffle::{RandomPicker, SeededPicker, ShufflePicker};
pub use store::PlayerStore;
pub use types::{Episode, PlaybackSpeed, PlayerConfig};
