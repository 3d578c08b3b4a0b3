//! Browser bindings for podcastr-transport
//!
//! Implements [`MediaHandle`](crate::MediaHandle) for `<audio>` elements and
//! exposes the store + binder to JavaScript as [`WasmPlayer`].

#[cfg(feature = "web")]
pub mod media;

#[cfg(feature = "web")]
pub mod player;

#[cfg(feature = "web")]
pub use player::WasmPlayer;
