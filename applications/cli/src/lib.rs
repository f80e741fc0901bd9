//! Reel Library console
//!
//! Glue around the core crates: catalog file loading, configuration,
//! command parsing, the `VideoPlayer` façade that composes playback and
//! playlists, and the line-oriented shell driven by the `reel` binary.

pub mod catalog_file;
pub mod command;
pub mod config;
pub mod error;
pub mod player;
pub mod render;
pub mod shell;

pub use command::Command;
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use player::{SearchOutcome, VideoPlayer};
pub use shell::Reply;
