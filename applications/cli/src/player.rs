//! Video player façade
//!
//! Composes the catalog, the playback controller and the playlist store,
//! and turns every outcome into display lines. Nothing here prints; the
//! shell writes the returned lines.

use crate::render::{video_line, video_line_with_flag};
use reel_core::{search, CatalogError, MemoryCatalog, Video, VideoCatalog, VideoId};
use reel_playback::{NowPlaying, PlaybackConfig, PlaybackController, PlaybackError, PlaybackEvent};
use reel_playlist::{PlaylistError, PlaylistStore};

/// Display lines produced by a command
pub type Output = Vec<String>;

/// Result of a search command
///
/// `results` holds the listed videos in display order so a follow-up
/// answer can pick one by number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub lines: Output,
    pub results: Vec<VideoId>,
}

impl SearchOutcome {
    /// Whether the caller should ask which result to play
    pub fn wants_choice(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Console-facing video player
pub struct VideoPlayer {
    catalog: MemoryCatalog,
    playback: PlaybackController,
    playlists: PlaylistStore,
}

impl VideoPlayer {
    pub fn new(catalog: MemoryCatalog, config: PlaybackConfig) -> Self {
        Self {
            catalog,
            playback: PlaybackController::new(config),
            playlists: PlaylistStore::new(),
        }
    }

    pub fn catalog(&self) -> &MemoryCatalog {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    // ===== Library =====

    pub fn number_of_videos(&self) -> Output {
        vec![format!("{} videos in the library", self.catalog.len())]
    }

    pub fn show_all_videos(&self) -> Output {
        let mut lines = vec!["Here's a list of all available videos:".to_string()];
        lines.extend(self.catalog.sorted_by_title().into_iter().map(video_line_with_flag));
        lines
    }

    // ===== Playback =====

    pub fn play(&mut self, video_id: &VideoId) -> Output {
        match self.playback.play(&self.catalog, video_id) {
            Ok(()) => self.render_events(),
            Err(err) => vec![format!("Cannot play video: {}", playback_reason(&err))],
        }
    }

    pub fn stop(&mut self) -> Output {
        match self.playback.stop() {
            Ok(()) => self.render_events(),
            Err(err) => vec![format!("Cannot stop video: {}", playback_reason(&err))],
        }
    }

    pub fn play_random(&mut self) -> Output {
        match self.playback.play_random(&self.catalog) {
            Ok(_) => self.render_events(),
            Err(err) => vec![playback_reason(&err)],
        }
    }

    pub fn pause(&mut self) -> Output {
        match self.playback.pause() {
            Ok(()) => self.render_events(),
            Err(PlaybackError::AlreadyPaused(video_id)) => {
                vec![format!("Video already paused: {}", self.title_of(&video_id))]
            }
            Err(err) => vec![format!("Cannot pause video: {}", playback_reason(&err))],
        }
    }

    pub fn continue_video(&mut self) -> Output {
        match self.playback.resume() {
            Ok(()) => self.render_events(),
            Err(err) => vec![format!("Cannot continue video: {}", playback_reason(&err))],
        }
    }

    pub fn show_playing(&self) -> Output {
        match self.playback.current() {
            NowPlaying::Idle => vec!["No video is currently playing".to_string()],
            NowPlaying::Active { video_id, paused } => {
                let Some(video) = self.catalog.get(&video_id) else {
                    return vec![format!("Currently playing: {}", video_id)];
                };
                let suffix = if paused { " - PAUSED" } else { "" };
                vec![format!("Currently playing: {}{}", video_line(video), suffix)]
            }
        }
    }

    // ===== Playlists =====

    pub fn create_playlist(&mut self, name: &str) -> Output {
        match self.playlists.create(name) {
            Ok(_) => vec![format!("Successfully created new playlist: {}", name)],
            Err(_) => vec![
                "Cannot create playlist: A playlist with the same name already exists".to_string(),
            ],
        }
    }

    /// Add a video after checking the playlist, the video, and its flag
    pub fn add_to_playlist(&mut self, name: &str, video_id: &VideoId) -> Output {
        let fail = |reason: &str| vec![format!("Cannot add video to {}: {}", name, reason)];

        if !self.playlists.contains(name) {
            return fail("Playlist does not exist");
        }
        let Some(video) = self.catalog.get(video_id) else {
            return fail("Video does not exist");
        };
        if let Some(reason) = video.flag_reason() {
            return fail(&format!("Video is currently flagged (reason: {})", reason));
        }

        match self.playlists.add_video(name, video_id) {
            Ok(()) => vec![format!("Added video to {}: {}", name, video.title)],
            Err(err) => fail(playlist_reason(&err)),
        }
    }

    pub fn show_all_playlists(&self) -> Output {
        let playlists = self.playlists.list_all();
        if playlists.is_empty() {
            return vec!["No playlists exist yet".to_string()];
        }

        let mut lines = vec!["Showing all playlists:".to_string()];
        lines.extend(playlists.iter().map(|p| p.name().to_string()));
        lines
    }

    pub fn show_playlist(&self, name: &str) -> Output {
        let Ok(videos) = self.playlists.list_videos(name) else {
            return vec![format!(
                "Cannot show playlist {}: Playlist does not exist",
                name
            )];
        };

        let mut lines = vec![format!("Showing playlist: {}", name)];
        if videos.is_empty() {
            lines.push("No videos here yet".to_string());
            return lines;
        }

        lines.extend(videos.iter().map(|id| match self.catalog.get(id) {
            Some(video) => video_line_with_flag(video),
            None => id.to_string(),
        }));
        lines
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &VideoId) -> Output {
        let fail = |reason: &str| vec![format!("Cannot remove video from {}: {}", name, reason)];

        if !self.playlists.contains(name) {
            return fail("Playlist does not exist");
        }
        let Some(video) = self.catalog.get(video_id) else {
            return fail("Video does not exist");
        };

        match self.playlists.remove_video(name, video_id) {
            Ok(()) => vec![format!("Removed video from {}: {}", name, video.title)],
            Err(err) => fail(playlist_reason(&err)),
        }
    }

    pub fn clear_playlist(&mut self, name: &str) -> Output {
        match self.playlists.clear(name) {
            Ok(()) => vec![format!("Successfully removed all videos from {}", name)],
            Err(_) => vec![format!(
                "Cannot clear playlist {}: Playlist does not exist",
                name
            )],
        }
    }

    pub fn delete_playlist(&mut self, name: &str) -> Output {
        match self.playlists.delete(name) {
            Ok(_) => vec![format!("Deleted playlist: {}", name)],
            Err(_) => vec![format!(
                "Cannot delete playlist {}: Playlist does not exist",
                name
            )],
        }
    }

    // ===== Search =====

    pub fn search_videos(&self, term: &str) -> SearchOutcome {
        search_outcome(term, search::search_title(&self.catalog, term))
    }

    pub fn search_videos_with_tag(&self, tag: &str) -> SearchOutcome {
        search_outcome(tag, search::search_tag(&self.catalog, tag))
    }

    /// Play the 1-based `answer` from a previous search
    ///
    /// Anything that is not a valid number in range is taken as "no".
    pub fn play_search_choice(&mut self, results: &[VideoId], answer: &str) -> Output {
        let choice = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| results.get(index))
            .cloned();

        match choice {
            Some(video_id) => self.play(&video_id),
            None => Vec::new(),
        }
    }

    // ===== Flags =====

    /// Flag a video, stopping it first if it is the active one
    pub fn flag_video(&mut self, video_id: &VideoId, reason: &str) -> Output {
        let reason = match self.catalog.flag(video_id, reason) {
            Ok(reason) => reason,
            Err(err) => return vec![format!("Cannot flag video: {}", catalog_reason(&err))],
        };

        let mut lines = Vec::new();
        if self.playback.stop_if_active(video_id) {
            lines.extend(self.render_events());
        }
        lines.push(format!(
            "Successfully flagged video: {} (reason: {})",
            self.title_of(video_id),
            reason
        ));
        lines
    }

    pub fn allow_video(&mut self, video_id: &VideoId) -> Output {
        match self.catalog.allow(video_id) {
            Ok(()) => vec![format!(
                "Successfully removed flag from video: {}",
                self.title_of(video_id)
            )],
            Err(err) => vec![format!(
                "Cannot remove flag from video: {}",
                catalog_reason(&err)
            )],
        }
    }

    // ===== Internal =====

    fn render_events(&mut self) -> Output {
        self.playback
            .drain_events()
            .into_iter()
            .map(|event| {
                let verb = match &event {
                    PlaybackEvent::Stopped { .. } => "Stopping",
                    PlaybackEvent::Playing { .. } => "Playing",
                    PlaybackEvent::Paused { .. } => "Pausing",
                    PlaybackEvent::Resumed { .. } => "Continuing",
                };
                format!("{} video: {}", verb, self.title_of(event.video_id()))
            })
            .collect()
    }

    fn title_of(&self, video_id: &VideoId) -> String {
        self.catalog
            .get(video_id)
            .map_or_else(|| video_id.to_string(), |video| video.title.clone())
    }
}

fn search_outcome(term: &str, videos: Vec<&Video>) -> SearchOutcome {
    if videos.is_empty() {
        return SearchOutcome {
            lines: vec![format!("No search results for {}", term)],
            results: Vec::new(),
        };
    }

    let mut lines = vec![format!("Here are the results for {}:", term)];
    lines.extend(
        videos
            .iter()
            .enumerate()
            .map(|(i, video)| format!("{}) {}", i + 1, video_line(video))),
    );
    lines.push(
        "Would you like to play any of the above? If yes, specify the number of the video."
            .to_string(),
    );
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());

    SearchOutcome {
        lines,
        results: videos.into_iter().map(|video| video.id.clone()).collect(),
    }
}

fn playback_reason(err: &PlaybackError) -> String {
    match err {
        PlaybackError::VideoNotFound(_) => "Video does not exist".to_string(),
        PlaybackError::Flagged { reason, .. } => {
            format!("Video is currently flagged (reason: {})", reason)
        }
        PlaybackError::NoVideosAvailable => "No videos available".to_string(),
        PlaybackError::NothingPlaying => "No video is currently playing".to_string(),
        PlaybackError::AlreadyPaused(_) => "Video is already paused".to_string(),
        PlaybackError::NotPaused(_) => "Video is not paused".to_string(),
    }
}

fn playlist_reason(err: &PlaylistError) -> &'static str {
    match err {
        PlaylistError::AlreadyExists(_) => "A playlist with the same name already exists",
        PlaylistError::PlaylistNotFound(_) => "Playlist does not exist",
        PlaylistError::DuplicateVideo { .. } => "Video already added",
        PlaylistError::VideoNotInPlaylist { .. } => "Video is not in playlist",
    }
}

fn catalog_reason(err: &CatalogError) -> &'static str {
    match err {
        CatalogError::VideoNotFound(_) => "Video does not exist",
        CatalogError::DuplicateVideo(_) => "Video already exists",
        CatalogError::AlreadyFlagged(_) => "Video is already flagged",
        CatalogError::NotFlagged(_) => "Video is not flagged",
    }
}
