//! Episode queue
//!
//! An ordered list of episodes plus the position of the one playing.
//! The list is only ever replaced wholesale; navigation moves the index.

use crate::types::Episode;

/// Queue of episodes with index-based navigation
///
/// ```text
/// episodes: [A] [B] [C]
///                ^
///              index
/// ```
///
/// Invariant: `index < episodes.len()` when non-empty, `index == 0` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeQueue {
    episodes: Vec<Episode>,
    index: usize,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue and position it at `index`
    ///
    /// Callers validate `index`; an out-of-range value is clamped so the
    /// invariant holds even if they don't.
    pub fn replace(&mut self, episodes: Vec<Episode>, index: usize) {
        self.index = if episodes.is_empty() {
            0
        } else {
            index.min(episodes.len() - 1)
        };
        self.episodes = episodes;
    }

    /// Empty the queue and reset the index
    pub fn clear(&mut self) {
        self.episodes.clear();
        self.index = 0;
    }

    /// Episode at the current index
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Whether a following episode exists in list order
    pub fn has_next_in_order(&self) -> bool {
        self.index + 1 < self.episodes.len()
    }

    /// Whether we can go back one episode
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Move forward one episode
    ///
    /// Returns false (and stays put) at the end of the queue.
    pub fn advance(&mut self) -> bool {
        if self.has_next_in_order() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move back one episode
    ///
    /// Returns false (and stays put) at the start of the queue.
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to an arbitrary position
    ///
    /// Returns false when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.episodes.len() {
            self.index = index;
            true
        } else {
            false
        }
    }
}
