//! Reel Library - Playlists
//!
//! Storage for user-defined, named collections of video IDs.
//!
//! Playlist names are case-insensitive keys: "Favorites" and "FAVORITES"
//! name the same playlist, while the casing used at creation is kept for
//! display. The store never consults the video catalog; validating that a
//! video exists and is not flagged is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use reel_core::VideoId;
//! use reel_playlist::{PlaylistError, PlaylistStore};
//!
//! let mut store = PlaylistStore::new();
//! store.create("Favorites").unwrap();
//!
//! store.add_video("favorites", &VideoId::new("vid1")).unwrap();
//! assert!(matches!(
//!     store.add_video("FAVORITES", &VideoId::new("vid1")),
//!     Err(PlaylistError::DuplicateVideo { .. })
//! ));
//!
//! assert_eq!(store.list_videos("Favorites").unwrap(), &[VideoId::new("vid1")]);
//! ```

mod error;
mod playlist;
mod store;

pub use error::{PlaylistError, Result};
pub use playlist::Playlist;
pub use store::PlaylistStore;
