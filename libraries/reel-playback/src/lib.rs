//! Reel Library - Playback Control
//!
//! Single-slot playback state machine over a video catalog.
//!
//! This crate provides:
//! - Play / stop / pause / resume for exactly one active video
//! - Uniform random playback over unflagged videos
//! - Playback events (stopped, playing, paused, resumed) for the display layer
//!
//! # Architecture
//!
//! `reel-playback` never owns the catalog and never formats text:
//! - Catalog lookups go through `reel_core::VideoCatalog`
//! - Notifications accumulate as `PlaybackEvent`s and are drained by the caller
//!
//! # Example
//!
//! ```rust
//! use reel_core::{MemoryCatalog, Video, VideoId};
//! use reel_playback::{NowPlaying, PlaybackConfig, PlaybackController, PlaybackEvent};
//!
//! let catalog = MemoryCatalog::from_videos([
//!     Video::new("a", "Video A", ["#one"]),
//!     Video::new("b", "Video B", ["#two"]),
//! ])
//! .unwrap();
//!
//! let mut controller = PlaybackController::new(PlaybackConfig::default());
//! controller.play(&catalog, &VideoId::new("a")).unwrap();
//! controller.play(&catalog, &VideoId::new("b")).unwrap();
//!
//! let events = controller.drain_events();
//! assert_eq!(
//!     events,
//!     vec![
//!         PlaybackEvent::Playing { video_id: VideoId::new("a") },
//!         PlaybackEvent::Stopped { video_id: VideoId::new("a") },
//!         PlaybackEvent::Playing { video_id: VideoId::new("b") },
//!     ]
//! );
//!
//! controller.pause().unwrap();
//! assert_eq!(
//!     controller.current(),
//!     NowPlaying::Active { video_id: VideoId::new("b"), paused: true }
//! );
//! ```

mod controller;
mod error;
pub mod events;
mod selection;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use types::{NowPlaying, PlaybackConfig, PlaybackState};
