/// Playlist domain type
use reel_core::VideoId;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of video IDs without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Name with the casing used at creation
    name: String,

    /// Member videos in insertion order
    videos: Vec<VideoId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive lookup key
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Member videos in order
    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Whether the video is a member
    pub fn contains(&self, video_id: &VideoId) -> bool {
        self.videos.contains(video_id)
    }

    /// Append a video; returns false if it was already a member
    pub(crate) fn push(&mut self, video_id: VideoId) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.videos.push(video_id);
        true
    }

    /// Remove a video keeping the order of the rest; returns false if absent
    pub(crate) fn remove(&mut self, video_id: &VideoId) -> bool {
        match self.videos.iter().position(|v| v == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.videos.clear();
    }
}

/// Normalize a playlist name to its lookup key
pub(crate) fn normalize(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::new("My Favorites");
        assert_eq!(playlist.name(), "My Favorites");
        assert_eq!(playlist.key(), "my favorites");
        assert!(playlist.is_empty());
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut playlist = Playlist::new("p");
        assert!(playlist.push(VideoId::new("a")));
        assert!(!playlist.push(VideoId::new("a")));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn remove_preserves_order() {
        let mut playlist = Playlist::new("p");
        for id in ["a", "b", "c", "d"] {
            playlist.push(VideoId::new(id));
        }

        assert!(playlist.remove(&VideoId::new("b")));
        assert!(!playlist.remove(&VideoId::new("b")));
        assert_eq!(
            playlist.videos(),
            &[VideoId::new("a"), VideoId::new("c"), VideoId::new("d")]
        );
    }

    #[test]
    fn playlist_serializes_name_and_videos() {
        let mut playlist = Playlist::new("Mix");
        playlist.push(VideoId::new("a"));

        let json = serde_json::to_value(&playlist).unwrap();
        assert_eq!(json["name"], "Mix");
        assert_eq!(json["videos"][0], "a");
    }
}
