//! Error types for playlist storage

use reel_core::{ErrorKind, VideoId};
use thiserror::Error;

/// Playlist errors
///
/// Playlist names are reported as the caller spelled them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// A playlist with the same name (ignoring case) exists
    #[error("A playlist with the same name already exists: {0}")]
    AlreadyExists(String),

    /// No playlist with this name
    #[error("Playlist does not exist: {0}")]
    PlaylistNotFound(String),

    /// Video is already a member
    #[error("Video already added to {playlist}: {video_id}")]
    DuplicateVideo { playlist: String, video_id: VideoId },

    /// Video is not a member
    #[error("Video is not in playlist {playlist}: {video_id}")]
    VideoNotInPlaylist { playlist: String, video_id: VideoId },
}

impl PlaylistError {
    /// Shared error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::PlaylistNotFound(_) | Self::VideoNotInPlaylist { .. } => ErrorKind::NotFound,
            Self::DuplicateVideo { .. } => ErrorKind::Duplicate,
        }
    }
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
