use crate::query::MatchMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "docsearch";
const CONFIG_FILE: &str = "config.json";

/// Default location of generated search data, relative to the working directory
pub const DEFAULT_INDEX_PATH: &str = "search";

/// Files loaded from a search directory when no pattern is configured
pub const DEFAULT_FILE_PATTERN: &str = "all_*.js";

/// Application configuration stored in the config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Search data file or directory used when `--index` is not given
    #[serde(default)]
    pub index_path: Option<PathBuf>,

    /// How queries are matched against keys
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Maximum number of entries shown per query (0 = unlimited)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Glob selecting files inside a search directory
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

fn default_max_results() -> usize {
    200
}

fn default_file_pattern() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_path: None,
            match_mode: MatchMode::default(),
            max_results: default_max_results(),
            file_pattern: default_file_pattern(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            // No config dir on this platform, fall back to defaults
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from an explicit file, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Effective result limit (`None` when unlimited)
    pub fn result_limit(&self) -> Option<usize> {
        if self.max_results == 0 {
            None
        } else {
            Some(self.max_results)
        }
    }

    /// Resolve the search data location: explicit path, then config, then default
    pub fn resolve_index_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.index_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_PATH))
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
