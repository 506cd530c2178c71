//! Configuration file loading with precedence handling.

use crate::directory::DEFAULT_BASE_URL;
use crate::model::SortKey;
use crate::state::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG_PATH: &str = "USERDASH_CONFIG";
/// Environment variable overriding the Directory Service base URL.
pub const ENV_BASE_URL: &str = "USERDASH_BASE_URL";
/// Environment variable overriding the post page size.
pub const ENV_PAGE_SIZE: &str = "USERDASH_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/userdash/config.toml`:
///
/// ```toml
/// base_url = "https://jsonplaceholder.typicode.com"
/// page_size = 5
/// sort = "company"
/// log_file_path = "/tmp/userdash.log"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory Service base URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Posts requested per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Initial sort key: "name" or "company".
    #[serde(default)]
    pub sort: Option<SortKey>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory Service base URL.
    pub base_url: String,
    /// Posts requested per page.
    pub page_size: u32,
    /// Initial sort key.
    pub sort: SortKey,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::Name,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--page-size`
    pub page_size: Option<u32>,
    /// `--sort`
    pub sort: Option<SortKey>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/userdash/userdash.log` on Linux, the platform
/// state directory elsewhere, or `userdash.log` in the current directory if
/// no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("userdash").join("userdash.log")
    } else {
        PathBuf::from("userdash.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/userdash/config.toml` on Linux, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("userdash").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `USERDASH_CONFIG` environment variable
/// 3. Default path `~/.config/userdash/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        sort: config.sort.unwrap_or(defaults.sort),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `USERDASH_BASE_URL`: Override base URL
/// - `USERDASH_PAGE_SIZE`: Override page size
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `USERDASH_PAGE_SIZE` is not a number.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
        config.base_url = base_url;
    }

    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        config.page_size = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: "page_size",
            reason: format!("{ENV_PAGE_SIZE}='{raw}' is not a positive integer"),
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags that were explicitly given are applied.
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(base_url) = overrides.base_url {
        config.base_url = base_url;
    }

    if let Some(page_size) = overrides.page_size {
        config.page_size = page_size;
    }

    if let Some(sort) = overrides.sort {
        config.sort = sort;
    }

    config
}

/// Check the fully resolved config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a page size of 0 or an empty base URL.
pub fn validate(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if config.page_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be at least 1".to_string(),
        });
    }

    if config.base_url.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "base_url",
            reason: "must not be empty".to_string(),
        });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
