/// Video domain type
use super::VideoId;
use serde::{Deserialize, Serialize};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// A video record in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    pub tags: Vec<String>,

    /// Flag reason; `None` when the video is allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new<I, S>(id: impl Into<VideoId>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flag: None,
        }
    }

    /// Whether the video is blocked from playback
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Flag reason, if flagged
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive substring match against any tag
    pub fn has_tag_matching(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    }
}
