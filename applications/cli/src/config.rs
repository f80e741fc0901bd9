/// Console configuration
use crate::error::{CliError, Result};
use reel_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "reel.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Fixed seed for PLAY_RANDOM; unset means a fresh seed per run
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `reel.toml` in the working
    /// directory is used when present. Environment variables prefixed with
    /// `REEL_` override file values, nested keys separated by `__`
    /// (e.g. `REEL_PLAYBACK__RANDOM_SEED=23`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("REEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(CliError::Config("catalog.path must not be empty".into()));
        }
        Ok(())
    }

    /// Playback controller settings
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            random_seed: self.playback.random_seed,
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("videos.txt")
}
