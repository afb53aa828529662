mod schema;
mod validation;

pub use schema::{Config, ServerConfig, DEFAULT_SUGGESTION_LIMIT};
pub use validation::validate_config;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::Strategy;
use crate::task::dates::{parse_date, today_local};

/// Get the config directory path (~/.config/task-rank/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("task-rank")
}

/// Get the default config file path (~/.config/task-rank/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    read_config(&config_path)
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    tracing::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

impl Config {
    /// Strategy for a request, falling back to the configured default
    pub fn strategy_for(&self, requested: Option<&str>) -> Strategy {
        Strategy::resolve(requested.unwrap_or(self.strategy.as_str()))
    }

    /// The pinned date if one is configured, otherwise the local date
    pub fn today(&self) -> NaiveDate {
        self.today
            .as_deref()
            .and_then(parse_date)
            .unwrap_or_else(today_local)
    }
}
