//! End-to-end tests for the command shell
//!
//! Feeds scripted input through `shell::run` and checks the transcript.

use reel_cli::{catalog_file::parse_catalog, command::HELP_TEXT, shell, Command, Reply, VideoPlayer};
use reel_core::VideoId;
use reel_playback::PlaybackConfig;

// ===== Test Helpers =====

const CATALOG: &str = "\
Funny Dogs | funny_dogs_video_id |  #dog , #animal
Amazing Cats | amazing_cats_video_id |  #cat , #animal
Another Cat Video | another_cat_video_id |  #cat , #animal
Life at Google | life_at_google_video_id |  #google , #career
Video about nothing | nothing_video_id |
";

fn player() -> VideoPlayer {
    VideoPlayer::new(
        parse_catalog(CATALOG).unwrap(),
        PlaybackConfig {
            random_seed: Some(23),
        },
    )
}

fn run_script(script: &str) -> Vec<String> {
    let mut player = player();

    let mut output = Vec::new();
    shell::run(&mut player, script.as_bytes(), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| line.trim_start_matches("REEL> ").to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

// ===== Shell Tests =====

#[test]
fn test_transcript_for_playlist_session() {
    let lines = run_script(
        "CREATE_PLAYLIST Favorites\n\
         ADD_TO_PLAYLIST Favorites amazing_cats_video_id\n\
         add_to_playlist favorites amazing_cats_video_id\n\
         SHOW_PLAYLIST favorites\n\
         EXIT\n",
    );

    assert_eq!(
        lines,
        vec![
            "Hello and welcome to Reel Library, what would you like to do?",
            "Enter HELP for list of available commands or EXIT to terminate.",
            "Successfully created new playlist: Favorites",
            "Added video to Favorites: Amazing Cats",
            "Cannot add video to favorites: Video already added",
            "Showing playlist: favorites",
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Reel Library has now terminated its execution. Thank you and goodbye!",
        ]
    );
}

#[test]
fn test_search_answer_is_read_from_next_line() {
    let lines = run_script("SEARCH_VIDEOS cat\n1\nSHOW_PLAYING\nEXIT\n");

    assert!(lines.contains(&"Playing video: Amazing Cats".to_string()));
    assert!(lines.contains(
        &"Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]".to_string()
    ));
}

#[test]
fn test_search_with_no_results_does_not_consume_next_line() {
    let lines = run_script("SEARCH_VIDEOS blah\nNUMBER_OF_VIDEOS\n");

    assert!(lines.contains(&"No search results for blah".to_string()));
    assert!(lines.contains(&"5 videos in the library".to_string()));
}

#[test]
fn test_unknown_command_and_missing_argument() {
    let lines = run_script("DANCE\nPLAY\nEXIT\n");

    assert!(lines.contains(
        &"Please enter a valid command, type HELP for a list of available commands.".to_string()
    ));
    assert!(lines.contains(&"Missing argument for PLAY: expected video_id".to_string()));
}

#[test]
fn test_end_of_input_terminates() {
    let lines = run_script("PLAY funny_dogs_video_id\n");

    assert_eq!(
        lines.last().unwrap(),
        "Reel Library has now terminated its execution. Thank you and goodbye!"
    );
    assert!(lines.contains(&"Playing video: Funny Dogs".to_string()));
}

#[test]
fn test_help_prints_command_list() {
    let lines = run_script("help\nEXIT\n");

    let help: Vec<String> = HELP_TEXT.lines().map(str::to_string).collect();
    let start = lines
        .iter()
        .position(|line| line == "Available commands:")
        .unwrap();

    assert_eq!(lines[start..start + help.len()], help[..]);
    assert!(lines.contains(&"    EXIT - Terminates the program execution.".to_string()));
    assert_eq!(
        lines.last().unwrap(),
        "Reel Library has now terminated its execution. Thank you and goodbye!"
    );
}

// ===== Dispatch Tests =====

#[test]
fn test_dispatch_search_keeps_results_for_choice() {
    let mut player = player();

    let Reply::Choose(outcome) = shell::dispatch(
        &mut player,
        Command::SearchVideosWithTag("#cat".to_string()),
    ) else {
        panic!("search should ask for a choice");
    };

    assert!(outcome.wants_choice());
    assert_eq!(
        outcome.results,
        vec![
            VideoId::new("amazing_cats_video_id"),
            VideoId::new("another_cat_video_id"),
        ]
    );
    assert_eq!(
        player.play_search_choice(&outcome.results, "2"),
        vec!["Playing video: Another Cat Video"]
    );
}

#[test]
fn test_dispatch_search_without_matches() {
    let mut player = player();

    let reply = shell::dispatch(&mut player, Command::SearchVideos("blah".to_string()));
    let Reply::Choose(outcome) = reply else {
        panic!("search should return its outcome");
    };

    assert!(!outcome.wants_choice());
    assert_eq!(outcome.lines, vec!["No search results for blah"]);
}

#[test]
fn test_dispatch_help_and_exit() {
    let mut player = player();

    assert_eq!(
        shell::dispatch(&mut player, Command::Help),
        Reply::Lines(vec![HELP_TEXT.to_string()])
    );
    assert_eq!(shell::dispatch(&mut player, Command::Exit), Reply::Exit);
    assert_eq!(
        shell::dispatch(&mut player, Command::NumberOfVideos),
        Reply::Lines(vec!["5 videos in the library".to_string()])
    );
}
