//! Playlist store
//!
//! Maps lowercase playlist names to playlists. Every mutation either
//! succeeds completely or leaves the store untouched.

use crate::{
    error::{PlaylistError, Result},
    playlist::{normalize, Playlist},
};
use reel_core::VideoId;
use std::collections::BTreeMap;

/// Collection of named playlists
///
/// Keys are always the lowercased display name, so iteration order is the
/// lowercase-name order.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist
    ///
    /// Fails if a playlist with the same name, ignoring case, exists.
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let playlist = Playlist::new(name);
        let key = playlist.key();
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::AlreadyExists(name.to_string()));
        }

        tracing::debug!(playlist = %name, "Playlist created");
        Ok(&*self.playlists.entry(key).or_insert(playlist))
    }

    /// Append a video to a playlist
    ///
    /// Does not check the catalog; the caller validates the video.
    pub fn add_video(&mut self, name: &str, video_id: &VideoId) -> Result<()> {
        let playlist = self.get_mut(name)?;
        if !playlist.push(video_id.clone()) {
            return Err(PlaylistError::DuplicateVideo {
                playlist: name.to_string(),
                video_id: video_id.clone(),
            });
        }

        tracing::debug!(playlist = %name, video = %video_id, "Video added to playlist");
        Ok(())
    }

    /// All playlists ordered by lowercase name
    pub fn list_all(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }

    /// Videos in a playlist, in order
    pub fn list_videos(&self, name: &str) -> Result<&[VideoId]> {
        self.get(name)
            .map(Playlist::videos)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))
    }

    /// Remove a video from a playlist
    pub fn remove_video(&mut self, name: &str, video_id: &VideoId) -> Result<()> {
        let playlist = self.get_mut(name)?;
        if !playlist.remove(video_id) {
            return Err(PlaylistError::VideoNotInPlaylist {
                playlist: name.to_string(),
                video_id: video_id.clone(),
            });
        }

        tracing::debug!(playlist = %name, video = %video_id, "Video removed from playlist");
        Ok(())
    }

    /// Remove every video, keeping the playlist
    pub fn clear(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.clear();
        tracing::debug!(playlist = %name, "Playlist cleared");
        Ok(())
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let removed = self
            .playlists
            .remove(&normalize(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        tracing::debug!(playlist = %removed.name(), "Playlist deleted");
        Ok(removed)
    }

    /// Look up a playlist, ignoring case
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&normalize(name))
    }

    /// Whether a playlist exists, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&normalize(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_lowercased_display_names() {
        let mut store = PlaylistStore::new();
        store.create("Road Trip").unwrap();
        store.create("ALL CAPS").unwrap();

        for (key, playlist) in &store.playlists {
            assert_eq!(key, &playlist.key());
            assert_eq!(key, &playlist.name().to_lowercase());
        }
        assert_eq!(
            store.playlists.keys().collect::<Vec<_>>(),
            vec!["all caps", "road trip"]
        );
    }

    #[test]
    fn create_returns_display_name() {
        let mut store = PlaylistStore::new();
        let playlist = store.create("My PLAYlist").unwrap();
        assert_eq!(playlist.name(), "My PLAYlist");
        assert!(store.contains("my playlist"));
    }
}
