//! Line-oriented command shell
//!
//! Reads commands from `input`, dispatches them to the `VideoPlayer`, and
//! writes the resulting lines to `output`. Search commands consume the next
//! input line as the answer to "which result should play".

use crate::command::{Command, HELP_TEXT};
use crate::player::{Output, SearchOutcome, VideoPlayer};
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Hello and welcome to Reel Library, what would you like to do?";
const GOODBYE: &str = "Reel Library has now terminated its execution. Thank you and goodbye!";
const PROMPT: &str = "REEL> ";

/// Run the shell until EXIT or end of input
pub fn run<R, W>(player: &mut VideoPlayer, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;
    writeln!(output, "Enter HELP for list of available commands or EXIT to terminate.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(input = %line.trim(), error = %err, "Rejected command");
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        tracing::debug!(?command, "Dispatching command");
        let result = match dispatch(player, command) {
            Reply::Exit => break,
            Reply::Lines(printed) => printed,
            Reply::Choose(outcome) => {
                write_lines(&mut output, &outcome.lines)?;
                if !outcome.wants_choice() {
                    continue;
                }
                let answer = lines.next().transpose()?.unwrap_or_default();
                player.play_search_choice(&outcome.results, &answer)
            }
        };

        write_lines(&mut output, &result)?;
    }

    writeln!(output, "{}", GOODBYE)?;
    Ok(())
}

/// What a dispatched command asks of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Lines to print
    Lines(Output),

    /// Search results; the shell prints them and, when any are listed,
    /// reads the next line as the choice for `VideoPlayer::play_search_choice`
    Choose(SearchOutcome),

    /// Leave the shell
    Exit,
}

/// Execute one command against the player
pub fn dispatch(player: &mut VideoPlayer, command: Command) -> Reply {
    let lines = match command {
        Command::NumberOfVideos => player.number_of_videos(),
        Command::ShowAllVideos => player.show_all_videos(),
        Command::Play(video_id) => player.play(&video_id),
        Command::PlayRandom => player.play_random(),
        Command::Stop => player.stop(),
        Command::Pause => player.pause(),
        Command::Continue => player.continue_video(),
        Command::ShowPlaying => player.show_playing(),
        Command::CreatePlaylist(name) => player.create_playlist(&name),
        Command::AddToPlaylist { playlist, video_id } => player.add_to_playlist(&playlist, &video_id),
        Command::RemoveFromPlaylist { playlist, video_id } => {
            player.remove_from_playlist(&playlist, &video_id)
        }
        Command::ShowAllPlaylists => player.show_all_playlists(),
        Command::ShowPlaylist(name) => player.show_playlist(&name),
        Command::ClearPlaylist(name) => player.clear_playlist(&name),
        Command::DeletePlaylist(name) => player.delete_playlist(&name),
        Command::SearchVideos(term) => return Reply::Choose(player.search_videos(&term)),
        Command::SearchVideosWithTag(tag) => {
            return Reply::Choose(player.search_videos_with_tag(&tag))
        }
        Command::FlagVideo { video_id, reason } => player.flag_video(&video_id, &reason),
        Command::AllowVideo(video_id) => player.allow_video(&video_id),
        Command::Help => vec![HELP_TEXT.to_string()],
        Command::Exit => return Reply::Exit,
    };

    Reply::Lines(lines)
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
