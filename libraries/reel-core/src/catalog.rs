//! Video catalog collaborator
//!
//! Playback consults the catalog for existence and flag status but never
//! mutates it. Flag and allow live on the concrete `MemoryCatalog`.

use crate::error::{CatalogError, Result};
use crate::types::{Video, VideoId, DEFAULT_FLAG_REASON};
use std::collections::HashMap;

/// Read-only view of the video catalog
pub trait VideoCatalog {
    /// All videos, in catalog order
    fn all(&self) -> Vec<&Video>;

    /// Look up a video by ID
    fn get(&self, id: &VideoId) -> Option<&Video>;

    /// Videos that may be played (not flagged), in catalog order
    fn eligible(&self) -> Vec<&Video> {
        self.all().into_iter().filter(|v| !v.is_flagged()).collect()
    }
}

/// In-memory video catalog
///
/// Preserves insertion order and indexes videos by ID.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    videos: Vec<Video>,
    index: HashMap<VideoId, usize>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of videos
    ///
    /// Fails on the first duplicate ID.
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Result<Self> {
        let mut catalog = Self::new();
        for video in videos {
            catalog.insert(video)?;
        }
        Ok(catalog)
    }

    /// Add a video to the catalog
    pub fn insert(&mut self, video: Video) -> Result<()> {
        if self.index.contains_key(&video.id) {
            return Err(CatalogError::DuplicateVideo(video.id));
        }

        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        Ok(())
    }

    /// Number of videos in the catalog
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalog has no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// All videos sorted by title
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }

    /// Flag a video, blocking it from playback
    ///
    /// An empty reason is recorded as [`DEFAULT_FLAG_REASON`]. Returns the
    /// reason that was applied.
    pub fn flag(&mut self, id: &VideoId, reason: &str) -> Result<String> {
        let video = self.get_mut(id)?;
        if video.is_flagged() {
            return Err(CatalogError::AlreadyFlagged(id.clone()));
        }

        let reason = if reason.trim().is_empty() {
            DEFAULT_FLAG_REASON.to_string()
        } else {
            reason.to_string()
        };
        video.flag = Some(reason.clone());
        tracing::debug!(video = %id, reason = %reason, "Video flagged");
        Ok(reason)
    }

    /// Remove the flag from a video
    pub fn allow(&mut self, id: &VideoId) -> Result<()> {
        let video = self.get_mut(id)?;
        if video.flag.take().is_none() {
            return Err(CatalogError::NotFlagged(id.clone()));
        }

        tracing::debug!(video = %id, "Video allowed");
        Ok(())
    }

    fn get_mut(&mut self, id: &VideoId) -> Result<&mut Video> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| CatalogError::VideoNotFound(id.clone()))?;
        Ok(&mut self.videos[idx])
    }
}

impl VideoCatalog for MemoryCatalog {
    fn all(&self) -> Vec<&Video> {
        self.videos.iter().collect()
    }

    fn get(&self, id: &VideoId) -> Option<&Video> {
        self.index.get(id).map(|&idx| &self.videos[idx])
    }
}
