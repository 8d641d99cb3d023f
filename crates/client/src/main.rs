//! Pixel Love Adventure terminal client.
//!
//! Composition root: reads configuration, sets up file logging, loads the
//! story content, opens the save directory and hands a booted session to the
//! render loop.
//!
//! ```bash
//! # Built-in story, platform save directory
//! cargo run -p pixel-love-client
//!
//! # Custom content and a throwaway save
//! CONTENT_DIR=./my-story SAVE_DATA_DIR=/tmp/pixel-love cargo run -p pixel-love-client
//! ```
mod app;
mod audio;
mod config;
mod input;
mod logging;
mod message;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{FileStateRepository, SaveService, Session};

use crate::app::App;
use crate::audio::TerminalBell;
use crate::config::ClientConfig;
use crate::terminal::TerminalGuard;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.log_dir, config.session_id.as_deref())?;

    tracing::info!("Starting Pixel Love Adventure");
    tracing::info!("Save directory: {}", config.save_data_dir.display());

    let content = match &config.content_dir {
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            ContentFactory::from_dir(dir)
                .with_context(|| format!("failed to load content from {}", dir.display()))?
        }
        None => ContentFactory::builtin().context("built-in content is invalid")?,
    };

    let repo = FileStateRepository::new(&config.save_data_dir).with_context(|| {
        format!(
            "failed to open save directory {}",
            config.save_data_dir.display()
        )
    })?;
    let session = Session::boot(
        content,
        SaveService::new(repo),
        TerminalBell::new(config.ui.bell),
    )?;

    let mut terminal = terminal::init()?;
    let _terminal_guard = TerminalGuard;

    let result = App::new(session, config.ui.clone()).run(&mut terminal);
    if let Err(err) = &result {
        tracing::error!("client stopped: {err:#}");
    }
    result
}
