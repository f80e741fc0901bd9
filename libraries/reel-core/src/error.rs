/// Core error types for Reel Library
use crate::types::VideoId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error kinds shared by every Reel Library component
///
/// Each crate has its own error enum; `kind()` on any of them maps onto one
/// of these so a presentation layer can branch without knowing the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Video or playlist absent
    NotFound,
    /// Playlist name already taken (case-insensitive)
    AlreadyExists,
    /// Video already a member of the playlist
    Duplicate,
    /// Video is blocked from playback
    Flagged,
    /// No eligible videos
    Empty,
    /// Illegal playback transition requested
    InvalidState,
}

/// Catalog errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Video not found
    #[error("Video not found: {0}")]
    VideoNotFound(VideoId),

    /// A video with the same ID is already in the catalog
    #[error("Duplicate video: {0}")]
    DuplicateVideo(VideoId),

    /// Flag requested for a video that is already flagged
    #[error("Video is already flagged: {0}")]
    AlreadyFlagged(VideoId),

    /// Allow requested for a video that is not flagged
    #[error("Video is not flagged: {0}")]
    NotFlagged(VideoId),
}

impl CatalogError {
    /// Shared error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VideoNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateVideo(_) => ErrorKind::Duplicate,
            Self::AlreadyFlagged(_) | Self::NotFlagged(_) => ErrorKind::InvalidState,
        }
    }
}
