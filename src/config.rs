//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.leaderboard.toml` files.

use crate::cli::OutputFormat;
use crate::view::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".leaderboard.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Table display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Icon asset settings.
    #[serde(default)]
    pub icons: IconConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Path of the snapshot JSON.
    #[serde(default = "default_data")]
    pub data: PathBuf,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            format: OutputFormat::default(),
            verbose: false,
        }
    }
}

fn default_data() -> PathBuf {
    PathBuf::from("data.json")
}

/// Table display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Participant rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Label of the profit currency column.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Leading characters kept when truncating an address.
    #[serde(default = "default_address_chars")]
    pub address_prefix: usize,

    /// Trailing characters kept when truncating an address.
    #[serde(default = "default_address_chars")]
    pub address_suffix: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            currency: default_currency(),
            address_prefix: default_address_chars(),
            address_suffix: default_address_chars(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_currency() -> String {
    "PLAY".to_string()
}

fn default_address_chars() -> usize {
    4
}

/// Icon asset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Directory (or URL prefix) holding the category icons.
    #[serde(default = "default_icon_base")]
    pub base_path: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            base_path: default_icon_base(),
        }
    }
}

fn default_icon_base() -> String {
    "/images".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load configuration from `dir/.leaderboard.toml`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref data) = args.data {
            self.general.data = data.clone();
        }
        if let Some(format) = args.format {
            self.general.format = format;
        }
        if let Some(page_size) = args.page_size {
            self.display.page_size = page_size;
        }
        if let Some(ref currency) = args.currency {
            self.display.currency = currency.clone();
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
