//! Player Events
//!
//! Change notifications recorded by the store. A binder drains them after
//! each action and mirrors the changes onto the media handle.
//! Events are only recorded when the observable value actually changed,
//! except for episode selection: re-selecting the same position is still
//! reported so the episode restarts.

use crate::types::PlaybackSpeed;
use serde::{Deserialize, Serialize};

/// Events emitted by the player store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The queue was replaced wholesale
    QueueReplaced {
        /// New queue length
        length: usize,
        /// Starting position
        index: usize,
    },

    /// A different (or the same, when shuffling) position was selected
    IndexChanged {
        /// New position
        index: usize,
    },

    /// Playing flag flipped
    PlayingChanged {
        /// New value
        is_playing: bool,
    },

    /// Looping flag flipped
    LoopingChanged {
        /// New value
        is_looping: bool,
    },

    /// Shuffling flag flipped
    ShufflingChanged {
        /// New value
        is_shuffling: bool,
    },

    /// Speed toggled
    SpeedChanged {
        /// New speed
        speed: PlaybackSpeed,
    },

    /// Queue emptied
    Cleared,
}

impl PlayerEvent {
    /// Whether the event means a different episode should be loaded
    pub fn changes_episode(&self) -> bool {
        matches!(
            self,
            PlayerEvent::QueueReplaced { .. } | PlayerEvent::IndexChanged { .. }
        )
    }
}
