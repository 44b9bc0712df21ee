//! Configuration loading and resolution.
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file (`~/.config/wmt/config.toml` on Linux/macOS)
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `WMT_API_BASE`: Base URL of the webmasters API
//! - `WMT_TIMEOUT`: Request timeout in seconds
//! - `WMT_CREDENTIALS`: Path to the service-account credential file
//! - `WMT_CONFIG`: Override config file path

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Result, WmtError};

/// Environment variable for the API base URL.
pub const ENV_API_BASE: &str = "WMT_API_BASE";
/// Environment variable for the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "WMT_TIMEOUT";
/// Environment variable for the credential file path.
pub const ENV_CREDENTIALS: &str = "WMT_CREDENTIALS";
/// Environment variable to override the config file path.
pub const ENV_CONFIG: &str = "WMT_CONFIG";

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/webmasters/v3";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// On-disk configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
    pub credentials_file: Option<PathBuf>,
}

/// CLI-level overrides passed into resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
    pub credentials_file: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the webmasters API.
    pub api_base: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Path to the service-account credential file, if configured.
    pub credentials_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credentials_file: None,
        }
    }
}

impl Config {
    /// Resolve configuration from CLI overrides, environment, and the
    /// config file.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = load_config_file()?;

        let api_base = overrides
            .api_base
            .clone()
            .or_else(|| non_empty_env(ENV_API_BASE))
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => match non_empty_env(ENV_TIMEOUT) {
                Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                    WmtError::Config(format!("invalid {ENV_TIMEOUT} value '{raw}'"))
                })?),
                None => file.timeout_secs,
            },
        };

        let credentials_file = overrides
            .credentials_file
            .clone()
            .or_else(|| non_empty_env(ENV_CREDENTIALS).map(PathBuf::from))
            .or(file.credentials_file);

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            credentials_file,
        })
    }
}

/// Default config file location (`~/.config/wmt/config.toml` on Linux).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wmt").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn config_path() -> Option<PathBuf> {
    non_empty_env(ENV_CONFIG).map_or_else(default_config_path, |path| Some(PathBuf::from(path)))
}

fn load_config_file() -> Result<ConfigFile> {
    let Some(path) = config_path() else {
        return Ok(ConfigFile::default());
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| WmtError::Config(format!("parse error in {}: {e}", path.display())))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
