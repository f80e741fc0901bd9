//! Display formatting for videos

use reel_core::Video;

/// `Title (id) [#tag1 #tag2]`
pub fn video_line(video: &Video) -> String {
    format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "))
}

/// Like [`video_line`], with a ` - FLAGGED (reason: …)` suffix when flagged
pub fn video_line_with_flag(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video_line(video), reason),
        None => video_line(video),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_tags_space_separated() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]);
        assert_eq!(
            video_line(&video),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn formats_empty_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", Vec::<String>::new());
        assert_eq!(video_line(&video), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn flagged_suffix() {
        let mut video = Video::new("v", "Title", ["#t"]);
        assert_eq!(video_line_with_flag(&video), "Title (v) [#t]");

        video.flag = Some("dont_like".to_string());
        assert_eq!(
            video_line_with_flag(&video),
            "Title (v) [#t] - FLAGGED (reason: dont_like)"
        );
    }
}
