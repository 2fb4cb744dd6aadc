//! Command-line interface for strictly_slide.

use clap::{Parser, Subcommand};

/// Strictly Slide - two-phase sliding tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_slide")]
#[command(about = "Sliding tic-tac-toe with time-travel history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "strictly_slide.toml")]
    pub config: std::path::PathBuf,

    /// Render JSON views instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep the selected square when jumping through history
    #[arg(long)]
    pub keep_selection_on_jump: bool,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Apply a sequence of clicks and print the final board
    Replay {
        /// Cells to click, as 0-8 or labels such as center
        #[arg(required = true)]
        clicks: Vec<String>,
    },
}
