//! Playback Events
//!
//! Notifications for the display layer. The controller queues them in the
//! order the transitions happen; a stop of the previous video always comes
//! before the play of the next one.

use reel_core::VideoId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// The active video was stopped (explicitly or by starting another)
    Stopped {
        /// Video that stopped
        video_id: VideoId,
    },

    /// A video started playing
    Playing {
        /// Video now playing
        video_id: VideoId,
    },

    /// The playing video was paused
    Paused {
        /// Video now paused
        video_id: VideoId,
    },

    /// The paused video was resumed
    Resumed {
        /// Video playing again
        video_id: VideoId,
    },
}

impl PlaybackEvent {
    /// Video the event refers to
    pub fn video_id(&self) -> &VideoId {
        match self {
            Self::Stopped { video_id }
            | Self::Playing { video_id }
            | Self::Paused { video_id }
            | Self::Resumed { video_id } => video_id,
        }
    }
}
