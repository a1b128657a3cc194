//! # Configuration
//!
//! Client settings live in `config.json` inside the user's config directory
//! (resolved via [`directories`], or `RELEASECTL_CONFIG_DIR` when set).
//!
//! Values are resolved in priority order:
//! 1. **Command-line flags / environment variables** (`RELEASECTL_APP`, `RELEASECTL_API_TOKEN`, `RELEASECTL_API_ORIGIN`)
//! 2. **Config file**
//! 3. **Compiled defaults**
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-origin` | `https://api.replicated.com/vendor` | Base URL of the vendor API |
//! | `api-token` | none | Token sent in the `Authorization` header |
//! | `app` | none | Application ID commands operate on |
//! | `timeout` | `30` | Request timeout in seconds |

use crate::error::{ReleaseError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_ORIGIN: &str = "https://api.replicated.com/vendor";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const KEYS: &[&str] = &["api-origin", "api-token", "app", "timeout"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_api_origin")]
    pub api_origin: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_origin() -> String {
    DEFAULT_API_ORIGIN.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: default_api_origin(),
            api_token: None,
            app_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Directory holding `config.json`.
pub fn default_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("RELEASECTL_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "releasectl", "releasectl").map(|d| d.config_dir().to_path_buf())
}

impl ClientConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Layer explicit values (flags, env vars) over what was loaded.
    pub fn with_overrides(
        mut self,
        api_origin: Option<String>,
        api_token: Option<String>,
        app_id: Option<String>,
    ) -> Self {
        if let Some(origin) = api_origin {
            self.api_origin = origin;
        }
        if api_token.is_some() {
            self.api_token = api_token;
        }
        if app_id.is_some() {
            self.app_id = app_id;
        }
        self
    }

    pub fn require_token(&self) -> Result<&str> {
        self.api_token.as_deref().filter(|t| !t.is_empty()).ok_or_else(|| {
            ReleaseError::Config(
                "no API token; set RELEASECTL_API_TOKEN or run `releasectl config api-token <TOKEN>`"
                    .to_string(),
            )
        })
    }

    pub fn require_app(&self) -> Result<&str> {
        self.app_id.as_deref().filter(|a| !a.is_empty()).ok_or_else(|| {
            ReleaseError::Config(
                "no application; pass --app, set RELEASECTL_APP or run `releasectl config app <APP_ID>`"
                    .to_string(),
            )
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api-origin" => Ok(Some(self.api_origin.clone())),
            "api-token" => Ok(self.api_token.as_deref().map(mask_token)),
            "app" => Ok(self.app_id.clone()),
            "timeout" => Ok(Some(self.timeout_secs.to_string())),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-origin" => self.api_origin = value.trim_end_matches('/').to_string(),
            "api-token" => self.api_token = Some(value.to_string()),
            "app" => self.app_id = Some(value.to_string()),
            "timeout" => {
                self.timeout_secs = value.parse().map_err(|_| {
                    ReleaseError::Config(format!("timeout must be a number of seconds: {}", value))
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with display values; unset keys render empty, the token masked.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|key| (*key, self.get(key).ok().flatten().unwrap_or_default()))
            .collect()
    }
}

fn unknown_key(key: &str) -> ReleaseError {
    ReleaseError::Config(format!(
        "unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

fn mask_token(token: &str) -> String {
    let visible: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("****{}", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = ClientConfig::default();
        config.set("app", "app-42").unwrap();
        config.set("timeout", "5").unwrap();
        config.save(&dir).unwrap();

        let loaded = ClientConfig::load(&dir).unwrap();
        assert_eq!(loaded.app_id.as_deref(), Some("app-42"));
        assert_eq!(loaded.timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"app_id":"a1"}"#).unwrap();

        let config = ClientConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.app_id.as_deref(), Some("a1"));
        assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = ClientConfig::default();
        config.set("app", "from-file").unwrap();

        let config = config.with_overrides(None, Some("tok".into()), Some("from-flag".into()));
        assert_eq!(config.require_app().unwrap(), "from-flag");
        assert_eq!(config.require_token().unwrap(), "tok");
        assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = ClientConfig::default().require_token().unwrap_err();
        assert!(matches!(err, ReleaseError::Config(_)));
    }

    #[test]
    fn test_token_is_masked() {
        let mut config = ClientConfig::default();
        config.set("api-token", "secret-abcd").unwrap();
        assert_eq!(config.get("api-token").unwrap().as_deref(), Some("****abcd"));

        config.set("api-token", "abc").unwrap();
        assert_eq!(config.get("api-token").unwrap().as_deref(), Some("****"));
    }

    #[test]
    fn test_unknown_key_and_bad_timeout() {
        let mut config = ClientConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
        assert!(config.set("timeout", "soon").is_err());
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let keys: Vec<_> = ClientConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}
