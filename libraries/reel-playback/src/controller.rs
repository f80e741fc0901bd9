//! Playback controller - single-slot state machine
//!
//! ```text
//!            play(id)              pause()
//!   Idle ─────────────▶ Playing ◀─────────▶ Paused
//!    ▲                   │  resume()           │
//!    └──── stop() ───────┴─────────────────────┘
//! ```
//!
//! `play(id)` is reachable from every state; whatever was active is stopped
//! first. Failed calls leave the state and pending events untouched.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    selection::choose_eligible,
    types::{NowPlaying, PlaybackConfig, PlaybackState},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reel_core::{VideoCatalog, VideoId};

/// Playback controller
///
/// Owns the Idle/Playing/Paused state for one active video. The catalog is
/// passed per call since flag status can change between calls.
#[derive(Debug)]
pub struct PlaybackController {
    state: PlaybackState,

    /// Events emitted since the last drain
    pending_events: Vec<PlaybackEvent>,

    /// Source of randomness for `play_random`
    rng: StdRng,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl PlaybackController {
    /// Create new playback controller in the Idle state
    pub fn new(config: PlaybackConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state: PlaybackState::Idle,
            pending_events: Vec::new(),
            rng,
        }
    }

    // ===== Playback Control =====

    /// Play a video from the catalog
    ///
    /// Stops the active video, if any, before starting the new one.
    pub fn play<C>(&mut self, catalog: &C, video_id: &VideoId) -> Result<()>
    where
        C: VideoCatalog + ?Sized,
    {
        let video = catalog
            .get(video_id)
            .ok_or_else(|| PlaybackError::VideoNotFound(video_id.clone()))?;

        if let Some(reason) = video.flag_reason() {
            return Err(PlaybackError::Flagged {
                video_id: video_id.clone(),
                reason: reason.to_string(),
            });
        }

        self.start(video_id.clone());
        Ok(())
    }

    /// Play a uniformly random unflagged video
    ///
    /// Returns the ID of the selected video.
    pub fn play_random<C>(&mut self, catalog: &C) -> Result<VideoId>
    where
        C: VideoCatalog + ?Sized,
    {
        let video_id = choose_eligible(catalog, &mut self.rng)
            .map(|video| video.id.clone())
            .ok_or(PlaybackError::NoVideosAvailable)?;

        self.start(video_id.clone());
        Ok(video_id)
    }

    /// Stop the active video
    pub fn stop(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(PlaybackError::NothingPlaying),
            PlaybackState::Playing(video_id) | PlaybackState::Paused(video_id) => {
                tracing::debug!(video = %video_id, "Playback stopped");
                self.emit(PlaybackEvent::Stopped { video_id });
                Ok(())
            }
        }
    }

    /// Stop playback only if `video_id` is the active video
    ///
    /// Returns whether a stop happened.
    pub fn stop_if_active(&mut self, video_id: &VideoId) -> bool {
        if self.state.active() == Some(video_id) {
            self.stop().is_ok()
        } else {
            false
        }
    }

    /// Pause the playing video
    pub fn pause(&mut self) -> Result<()> {
        match &self.state {
            PlaybackState::Idle => Err(PlaybackError::NothingPlaying),
            PlaybackState::Paused(video_id) => Err(PlaybackError::AlreadyPaused(video_id.clone())),
            PlaybackState::Playing(video_id) => {
                let video_id = video_id.clone();
                tracing::debug!(video = %video_id, "Playback paused");
                self.state = PlaybackState::Paused(video_id.clone());
                self.emit(PlaybackEvent::Paused { video_id });
                Ok(())
            }
        }
    }

    /// Resume the paused video
    pub fn resume(&mut self) -> Result<()> {
        match &self.state {
            PlaybackState::Idle => Err(PlaybackError::NothingPlaying),
            PlaybackState::Playing(video_id) => Err(PlaybackError::NotPaused(video_id.clone())),
            PlaybackState::Paused(video_id) => {
                let video_id = video_id.clone();
                tracing::debug!(video = %video_id, "Playback resumed");
                self.state = PlaybackState::Playing(video_id.clone());
                self.emit(PlaybackEvent::Resumed { video_id });
                Ok(())
            }
        }
    }

    // ===== State Queries =====

    /// What is active right now
    pub fn current(&self) -> NowPlaying {
        NowPlaying::from(&self.state)
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain, in
    /// emission order.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn start(&mut self, video_id: VideoId) {
        if let Some(previous) = self.state.active().cloned() {
            tracing::debug!(video = %previous, "Stopping active video before play");
            self.emit(PlaybackEvent::Stopped { video_id: previous });
        }

        tracing::debug!(video = %video_id, "Playback started");
        self.state = PlaybackState::Playing(video_id.clone());
        self.emit(PlaybackEvent::Playing { video_id });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::{MemoryCatalog, Video};

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::from_videos([
            Video::new("a", "Video A", ["#one"]),
            Video::new("b", "Video B", ["#two"]),
        ])
        .unwrap()
    }

    fn id(s: &str) -> VideoId {
        VideoId::new(s)
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = PlaybackController::default();
        assert_eq!(controller.current(), NowPlaying::Idle);
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn stop_paused_video_emits_stop() {
        let catalog = catalog();
        let mut controller = PlaybackController::default();
        controller.play(&catalog, &id("a")).unwrap();
        controller.pause().unwrap();
        controller.drain_events();

        controller.stop().unwrap();
        assert_eq!(
            controller.drain_events(),
            vec![PlaybackEvent::Stopped { video_id: id("a") }]
        );
        assert!(controller.state().is_idle());
    }

    #[test]
    fn stop_if_active_ignores_other_videos() {
        let catalog = catalog();
        let mut controller = PlaybackController::default();
        controller.play(&catalog, &id("a")).unwrap();

        assert!(!controller.stop_if_active(&id("b")));
        assert!(controller.state().is_playing());

        assert!(controller.stop_if_active(&id("a")));
        assert!(controller.state().is_idle());
        assert!(!controller.stop_if_active(&id("a")));
    }

    #[test]
    fn seeded_random_playback_is_reproducible() {
        let catalog = MemoryCatalog::from_videos(
            (0..10).map(|i| Video::new(format!("v{}", i), format!("Video {}", i), ["#t"])),
        )
        .unwrap();

        let config = PlaybackConfig {
            random_seed: Some(23),
        };
        let mut first = PlaybackController::new(config.clone());
        let mut second = PlaybackController::new(config);

        for _ in 0..5 {
            assert_eq!(
                first.play_random(&catalog).unwrap(),
                second.play_random(&catalog).unwrap()
            );
        }
    }
}
