//! Shared player handle
//!
//! The application creates one [`SharedPlayer`] at startup and hands clones
//! to every screen that needs playback. There is no global instance.

use crate::store::PlayerStore;
use crate::types::PlayerConfig;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable handle to a single [`PlayerStore`]
#[derive(Debug, Clone)]
pub struct SharedPlayer {
    inner: Arc<Mutex<PlayerStore>>,
}

impl SharedPlayer {
    pub fn new(config: PlayerConfig) -> Self {
        Self::from_store(PlayerStore::new(config))
    }

    pub fn from_store(store: PlayerStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Read the store
    pub fn with<R>(&self, f: impl FnOnce(&PlayerStore) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run an action against the store
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut PlayerStore) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Whether two handles point at the same store
    pub fn same_store(&self, other: &SharedPlayer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedPlayer {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Episode;

    #[test]
    fn clones_share_state() {
        let player = SharedPlayer::default();
        let screen = player.clone();

        screen.with_mut(|store| {
            store.play(Episode {
                title: "Pilot".to_string(),
                members: "Ana".to_string(),
                thumbnail: "/thumbs/pilot.jpg".to_string(),
                duration: 60,
                url: "https://cdn.example.com/pilot.mp3".to_string(),
            });
        });

        assert!(player.same_store(&screen));
        assert!(player.with(|store| store.is_playing()));
        assert_eq!(player.with(|store| store.queue_len()), 1);
    }

    #[test]
    fn independent_players_do_not_share() {
        let a = SharedPlayer::default();
        let b = SharedPlayer::default();
        a.with_mut(|store| store.toggle_loop());

        assert!(!a.same_store(&b));
        assert!(!b.with(|store| store.is_looping()));
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedPlayer>();
    }
}
