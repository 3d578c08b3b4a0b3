//! Podcastr - Transport Binding
//!
//! Connects the playback store from `podcastr-playback` to something that
//! actually plays audio.
//!
//! This crate provides:
//! - [`MediaHandle`]: the transport handle trait (source, loop, rate,
//!   play/pause, position)
//! - [`TransportBinder`]: mirrors store changes onto the handle and feeds
//!   handle events (metadata, time updates, end, play/pause) back
//! - [`PlayerView`]: render model for the player widget
//! - [`SimulatedMedia`]: a clock-driven handle for tests and terminals
//! - `web` feature: `<audio>` element support and a JavaScript-facing player
//!
//! # Example: Binding a Store
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerStore};
//! use podcastr_transport::{MediaEvent, SimulatedMedia, TransportBinder};
//!
//! let mut store = PlayerStore::default();
//! let mut binder = TransportBinder::new();
//! binder.mount(SimulatedMedia::new(), &store);
//!
//! store.play(Episode {
//!     title: "Pilot".to_string(),
//!     members: "Ana, Bruno".to_string(),
//!     thumbnail: "/thumbs/pilot.jpg".to_string(),
//!     duration: 3600,
//!     url: "https://cdn.example.com/pilot.mp3".to_string(),
//! });
//! binder.sync(&mut store);
//! assert_eq!(binder.handle().unwrap().source(), Some("https://cdn.example.com/pilot.mp3"));
//!
//! // Nothing left to play, so the end clears the queue
//! binder.handle_event(MediaEvent::Ended, &mut store);
//! assert!(store.is_empty());
//! assert!(binder.view(&store).is_empty());
//! ```

mod binder;
mod error;
mod handle;
mod simulated;
mod view;

pub mod wasm;

// Public exports
pub use binder::TransportBinder;
pub use error::{Result, TransportError};
pub use handle::{MediaEvent, MediaHandle};
pub use simulated::{MediaCall, SimulatedMedia};
pub use view::{ControlStates, NowPlaying, PlayerView};

#[cfg(feature = "web")]
pub use wasm::WasmPlayer;
