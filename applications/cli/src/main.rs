/// Reel Library - interactive video library console
use anyhow::Context;
use clap::Parser;
use reel_cli::{catalog_file::load_catalog, shell, AppConfig, VideoPlayer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Browse, play and organize a video catalog", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog file path (overrides catalog.path from config)
    #[arg(long, env = "REEL_CATALOG_FILE")]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "reel_cli=info,reel_core=info,reel_playback=info,reel_playlist=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    config.validate()?;

    let catalog = load_catalog(&config.catalog.path).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog.path.display()
        )
    })?;
    tracing::info!(videos = catalog.len(), "Starting Reel Library");

    let mut player = VideoPlayer::new(catalog, config.playback_config());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut player, stdin.lock(), stdout.lock())?;

    Ok(())
}
