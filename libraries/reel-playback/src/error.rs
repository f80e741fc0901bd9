//! Error types for playback control

use reel_core::{ErrorKind, VideoId};
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Requested video is not in the catalog
    #[error("Video does not exist: {0}")]
    VideoNotFound(VideoId),

    /// Requested video is flagged
    #[error("Video is currently flagged (reason: {reason})")]
    Flagged {
        /// Flagged video
        video_id: VideoId,
        /// Reason recorded on the flag
        reason: String,
    },

    /// No unflagged videos to choose from
    #[error("No videos available")]
    NoVideosAvailable,

    /// Stop, pause or resume requested while idle
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause requested while already paused
    #[error("Video already paused: {0}")]
    AlreadyPaused(VideoId),

    /// Resume requested while playing
    #[error("Video is not paused: {0}")]
    NotPaused(VideoId),
}

impl PlaybackError {
    /// Shared error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VideoNotFound(_) => ErrorKind::NotFound,
            Self::Flagged { .. } => ErrorKind::Flagged,
            Self::NoVideosAvailable => ErrorKind::Empty,
            Self::NothingPlaying | Self::AlreadyPaused(_) | Self::NotPaused(_) => {
                ErrorKind::InvalidState
            }
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
