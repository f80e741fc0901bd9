//! Core types for playback control

use reel_core::VideoId;
use serde::{Deserialize, Serialize};

/// Playback state
///
/// At most one video is active; Playing and Paused are mutually exclusive
/// by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No video active
    #[default]
    Idle,

    /// Video playing
    Playing(VideoId),

    /// Video paused mid-playback
    Paused(VideoId),
}

impl PlaybackState {
    /// The playing or paused video
    pub fn active(&self) -> Option<&VideoId> {
        match self {
            Self::Idle => None,
            Self::Playing(id) | Self::Paused(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }
}

/// Snapshot returned by `PlaybackController::current`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NowPlaying {
    /// Nothing playing
    Idle,

    /// A video is active
    Active {
        /// Active video
        video_id: VideoId,
        /// Whether it is paused
        paused: bool,
    },
}

impl From<&PlaybackState> for NowPlaying {
    fn from(state: &PlaybackState) -> Self {
        match state {
            PlaybackState::Idle => NowPlaying::Idle,
            PlaybackState::Playing(id) => NowPlaying::Active {
                video_id: id.clone(),
                paused: false,
            },
            PlaybackState::Paused(id) => NowPlaying::Active {
                video_id: id.clone(),
                paused: true,
            },
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Seed for random playback (default: None, seeded from OS entropy)
    #[serde(default)]
    pub random_seed: Option<u64>,
}
