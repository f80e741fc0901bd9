//! Console command parsing
//!
//! Commands are a case-insensitive verb followed by whitespace-separated
//! arguments, e.g. `PLAY amazing_cats_video_id` or
//! `ADD_TO_PLAYLIST my_playlist funny_dogs_video_id`.

use crate::error::ParseError;
use reel_core::VideoId;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(VideoId),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: VideoId },
    RemoveFromPlaylist { playlist: String, video_id: VideoId },
    ShowAllPlaylists,
    ShowPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    /// Reason is the rest of the line, if any
    FlagVideo { video_id: VideoId, reason: String },
    AllowVideo(VideoId),
    Help,
    Exit,
}

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let verb = verb.to_ascii_uppercase();

        let command = match verb.as_str() {
            "NUMBER_OF_VIDEOS" => Self::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Self::ShowAllVideos,
            "PLAY" => Self::Play(VideoId::new(arg(&args, 0, "PLAY", "video_id")?)),
            "PLAY_RANDOM" => Self::PlayRandom,
            "STOP" => Self::Stop,
            "PAUSE" => Self::Pause,
            "CONTINUE" => Self::Continue,
            "SHOW_PLAYING" => Self::ShowPlaying,
            "CREATE_PLAYLIST" => Self::CreatePlaylist(
                arg(&args, 0, "CREATE_PLAYLIST", "playlist_name")?.to_string(),
            ),
            "ADD_TO_PLAYLIST" => Self::AddToPlaylist {
                playlist: arg(&args, 0, "ADD_TO_PLAYLIST", "playlist_name video_id")?.to_string(),
                video_id: VideoId::new(arg(&args, 1, "ADD_TO_PLAYLIST", "playlist_name video_id")?),
            },
            "REMOVE_FROM_PLAYLIST" => Self::RemoveFromPlaylist {
                playlist: arg(&args, 0, "REMOVE_FROM_PLAYLIST", "playlist_name video_id")?
                    .to_string(),
                video_id: VideoId::new(arg(
                    &args,
                    1,
                    "REMOVE_FROM_PLAYLIST",
                    "playlist_name video_id",
                )?),
            },
            "SHOW_ALL_PLAYLISTS" => Self::ShowAllPlaylists,
            "SHOW_PLAYLIST" => {
                Self::ShowPlaylist(arg(&args, 0, "SHOW_PLAYLIST", "playlist_name")?.to_string())
            }
            "CLEAR_PLAYLIST" => {
                Self::ClearPlaylist(arg(&args, 0, "CLEAR_PLAYLIST", "playlist_name")?.to_string())
            }
            "DELETE_PLAYLIST" => {
                Self::DeletePlaylist(arg(&args, 0, "DELETE_PLAYLIST", "playlist_name")?.to_string())
            }
            "SEARCH_VIDEOS" => {
                Self::SearchVideos(arg(&args, 0, "SEARCH_VIDEOS", "search_term")?.to_string())
            }
            "SEARCH_VIDEOS_WITH_TAG" => Self::SearchVideosWithTag(
                arg(&args, 0, "SEARCH_VIDEOS_WITH_TAG", "video_tag")?.to_string(),
            ),
            "FLAG_VIDEO" => Self::FlagVideo {
                video_id: VideoId::new(arg(&args, 0, "FLAG_VIDEO", "video_id [reason]")?),
                reason: args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default(),
            },
            "ALLOW_VIDEO" => Self::AllowVideo(VideoId::new(arg(&args, 0, "ALLOW_VIDEO", "video_id")?)),
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => return Err(ParseError::Unknown(verb)),
        };

        Ok(Some(command))
    }
}

fn arg<'a>(
    args: &[&'a str],
    index: usize,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ParseError> {
    args.get(index)
        .copied()
        .ok_or(ParseError::MissingArgument { command, expected })
}

/// Text shown for HELP
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse("play_random"), Command::PlayRandom);
        assert_eq!(parse("Show_Playing"), Command::ShowPlaying);
        assert_eq!(parse("  EXIT  "), Command::Exit);
    }

    #[test]
    fn arguments_keep_their_case() {
        assert_eq!(
            parse("CREATE_PLAYLIST My_Favorites"),
            Command::CreatePlaylist("My_Favorites".to_string())
        );
        assert_eq!(
            parse("add_to_playlist My_Favorites amazing_cats_video_id"),
            Command::AddToPlaylist {
                playlist: "My_Favorites".to_string(),
                video_id: VideoId::new("amazing_cats_video_id"),
            }
        );
    }

    #[test]
    fn flag_reason_is_rest_of_line() {
        assert_eq!(
            parse("FLAG_VIDEO v1 not suitable for kids"),
            Command::FlagVideo {
                video_id: VideoId::new("v1"),
                reason: "not suitable for kids".to_string(),
            }
        );
        assert_eq!(
            parse("FLAG_VIDEO v1"),
            Command::FlagVideo {
                video_id: VideoId::new("v1"),
                reason: String::new(),
            }
        );
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn unknown_verb() {
        assert_eq!(
            Command::parse("DANCE"),
            Err(ParseError::Unknown("DANCE".to_string()))
        );
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST mix"),
            Err(ParseError::MissingArgument {
                command: "ADD_TO_PLAYLIST",
                expected: "playlist_name video_id",
            })
        );
        assert!(Command::parse("PLAY").is_err());
    }
}
