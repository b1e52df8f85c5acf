//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Leaderboard - render the Futarchy experiment leaderboard
///
/// Loads a JSON snapshot of participants, aggregates them into groups and
/// renders both tables. Header clicks and page buttons are given as
/// actions, either up front or interactively.
///
/// Examples:
///   leaderboard --data data.json
///   leaderboard --action sort:profitPercentage --action page:2
///   leaderboard --action group-sort:numberOfUsers --format markdown -o board.md
///   leaderboard --interactive
///   leaderboard --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Snapshot JSON file
    ///
    /// Defaults to data.json, or the path set in .leaderboard.toml.
    #[arg(short, long, value_name = "FILE", env = "LEADERBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Actions to apply before rendering (comma-separated or repeated)
    ///
    /// sort:<key>, group-sort:<key>, page:<first|prev|next|last|N>
    #[arg(short, long, value_name = "ACTION", value_delimiter = ',')]
    pub action: Vec<String>,

    /// Read actions from stdin and re-render after each one
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (text, markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the rendered board to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Render every participants page instead of the current one
    #[arg(long)]
    pub all_pages: bool,

    /// Participant rows per page
    #[arg(long, value_name = "ROWS")]
    pub page_size: Option<usize>,

    /// Label of the profit currency column
    #[arg(long, value_name = "LABEL")]
    pub currency: Option<String>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .leaderboard.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .leaderboard.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the rendered board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text tables (default)
    #[default]
    Text,
    /// Markdown tables
    Markdown,
    /// JSON view
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.page_size == Some(0) {
            return Err("Page size must be at least 1".to_string());
        }

        if self.interactive && self.output.is_some() {
            return Err("Cannot use --output with --interactive".to_string());
        }

        if let Some(ref data) = self.data {
            if data.is_dir() {
                return Err(format!("Data path is a directory: {}", data.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `config_verbose` is the `[general] verbose` setting; `--quiet` wins over both.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
