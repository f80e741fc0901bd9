//! Reel Library Core
//!
//! Platform-agnostic core types, the video catalog collaborator, and shared
//! error kinds for Reel Library.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video`, `VideoId`
//! - **Catalog**: the `VideoCatalog` trait consumed by playback, plus the
//!   in-memory `MemoryCatalog` with flag/allow support
//! - **Search**: case-insensitive title and tag search over a catalog
//! - **Error Handling**: `ErrorKind` shared by every crate, `CatalogError`
//!
//! # Example
//!
//! ```rust
//! use reel_core::{MemoryCatalog, Video, VideoCatalog, VideoId};
//!
//! let mut catalog = MemoryCatalog::new();
//! catalog
//!     .insert(Video::new("amazing_cats", "Amazing Cats", ["#cat", "#animal"]))
//!     .unwrap();
//!
//! catalog.flag(&VideoId::new("amazing_cats"), "dont_like_cats").unwrap();
//! assert!(catalog.get(&VideoId::new("amazing_cats")).unwrap().is_flagged());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use catalog::{MemoryCatalog, VideoCatalog};
pub use error::{CatalogError, ErrorKind, Result};
pub use types::{Video, VideoId, DEFAULT_FLAG_REASON};
