//! Strictly Slide - terminal front end

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_slide::{Driver, Game, SlideConfig, parse_cell};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(path = %cli.config.display(), ?config, "Starting strictly_slide");

    let game = Game::with_reset_selection_on_jump(*config.reset_selection_on_jump());
    let stdin = io::stdin();
    let mut driver = Driver::new(game, stdin.lock(), io::stdout().lock(), *config.json());

    match cli.command {
        Command::Play => driver.run(),
        Command::Replay { clicks } => {
            let clicks = clicks
                .iter()
                .map(|s| parse_cell(s))
                .collect::<Result<Vec<_>, _>>()?;
            driver.replay(&clicks)
        }
    }
}

/// Layers CLI flags over the config file over defaults.
///
/// Runs before the subscriber exists; anything worth logging about the
/// result is logged by the caller once tracing is up.
fn resolve_config(cli: &Cli) -> Result<SlideConfig> {
    let mut config = SlideConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }
    if cli.json {
        config = config.with_json(true);
    }
    if cli.keep_selection_on_jump {
        config = config.with_reset_selection_on_jump(false);
    }
    Ok(config)
}
