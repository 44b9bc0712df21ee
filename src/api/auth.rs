//! Credential loading.
//!
//! The OAuth flow itself is out of scope; this loads a ready-to-use access
//! token either from the `WMT_ACCESS_TOKEN` environment variable or from a
//! JSON credential file named by configuration.

use std::path::Path;

use serde::Deserialize;

use crate::core::config::Config;
use crate::error::{Result, WmtError};

/// Environment variable holding a ready-to-use access token.
pub const ENV_ACCESS_TOKEN: &str = "WMT_ACCESS_TOKEN";

#[derive(Debug, Deserialize)]
struct CredentialFile {
    access_token: Option<String>,
    token: Option<String>,
}

/// Resolve the bearer token for API requests, if any is configured.
///
/// Precedence: `WMT_ACCESS_TOKEN` env var, then the configured credential
/// file. A configured-but-unreadable file is a configuration error; no
/// configuration at all yields `None` (requests go out unauthenticated and
/// the API rejects them).
pub fn load_token(config: &Config) -> Result<Option<String>> {
    if let Ok(token) = std::env::var(ENV_ACCESS_TOKEN) {
        let trimmed = token.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }

    match &config.credentials_file {
        Some(path) => read_token_file(path).map(Some),
        None => {
            tracing::warn!("no credentials configured; requests will be unauthenticated");
            Ok(None)
        }
    }
}

fn read_token_file(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| WmtError::Config(format!("cannot read credential file {}: {e}", path.display())))?;
    let parsed: CredentialFile = serde_json::from_str(&contents)
        .map_err(|e| WmtError::Config(format!("invalid credential file {}: {e}", path.display())))?;
    parsed
        .access_token
        .or(parsed.token)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            WmtError::Config(format!(
                "credential file {} contains no access token",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[allow(unsafe_code)]
    fn with_token_env(value: Option<&str>, f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();
        let prior = std::env::var(ENV_ACCESS_TOKEN).ok();
        unsafe {
            match value {
                Some(val) => std::env::set_var(ENV_ACCESS_TOKEN, val),
                None => std::env::remove_var(ENV_ACCESS_TOKEN),
            }
        }
        f();
        unsafe {
            match prior {
                Some(val) => std::env::set_var(ENV_ACCESS_TOKEN, val),
                None => std::env::remove_var(ENV_ACCESS_TOKEN),
            }
        }
    }

    #[test]
    fn env_token_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(&path, r#"{"access_token": "from-file"}"#).unwrap();

        let config = Config {
            credentials_file: Some(path),
            ..Config::default()
        };

        with_token_env(Some("from-env"), || {
            let token = load_token(&config).unwrap();
            assert_eq!(token.as_deref(), Some("from-env"));
        });
    }

    #[test]
    fn file_token_used_when_env_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(&path, r#"{"access_token": "from-file"}"#).unwrap();

        let config = Config {
            credentials_file: Some(path),
            ..Config::default()
        };

        with_token_env(None, || {
            let token = load_token(&config).unwrap();
            assert_eq!(token.as_deref(), Some("from-file"));
        });
    }

    #[test]
    fn legacy_token_field_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(&path, r#"{"token": "legacy"}"#).unwrap();

        let config = Config {
            credentials_file: Some(path),
            ..Config::default()
        };

        with_token_env(None, || {
            assert_eq!(load_token(&config).unwrap().as_deref(), Some("legacy"));
        });
    }

    #[test]
    fn missing_file_is_config_error() {
        let config = Config {
            credentials_file: Some("/nonexistent/creds.json".into()),
            ..Config::default()
        };
        with_token_env(None, || {
            let err = load_token(&config).unwrap_err();
            assert!(err.to_string().contains("credential file"));
        });
    }

    #[test]
    fn tokenless_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(&path, r"{}").unwrap();

        let config = Config {
            credentials_file: Some(path),
            ..Config::default()
        };
        with_token_env(None, || {
            assert!(load_token(&config).is_err());
        });
    }

    #[test]
    fn nothing_configured_yields_none() {
        let config = Config::default();
        with_token_env(None, || {
            assert!(load_token(&config).unwrap().is_none());
        });
    }
}
