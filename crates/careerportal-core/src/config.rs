//! Configuration resolution for the Career Portal client.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/careerportal/settings.json)
//! 3. Environment variables
//! 4. CLI arguments (highest priority, applied by the binary)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const ENV_API_URL: &str = "CAREERPORTAL_API_URL";

/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "CAREERPORTAL_TIMEOUT_SECS";

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend REST API root, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,
    /// Timeout applied to every request (seconds).
    pub timeout_secs: u64,
    /// Where the session entries are persisted. `None` means the default
    /// location under the home directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_path: None,
        }
    }
}

impl ClientConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolved session file path: explicit setting, else `~/.careerportal/session.json`.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session_path.clone().or_else(default_session_path)
    }
}

/// Load configuration with hierarchical resolution.
pub fn load_config() -> Result<ClientConfig> {
    load_config_from(global_config_path().as_deref(), |key| std::env::var(key).ok())
}

/// Load configuration from an explicit global file and environment lookup.
pub fn load_config_from<F>(global_path: Option<&Path>, env: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match global_path {
        Some(path) if path.exists() => load_config_file(path)?,
        _ => ClientConfig::default(),
    };
    apply_env_overrides(&mut config, env);
    Ok(config)
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("careerportal").join("settings.json"))
}

/// Default session file: `~/.careerportal/session.json`.
pub fn default_session_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".careerportal").join("session.json"))
}

fn load_config_file(path: &Path) -> Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

fn apply_env_overrides<F>(config: &mut ClientConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url;
    }
    if let Some(n) = env(ENV_TIMEOUT_SECS).and_then(|v| v.parse().ok()) {
        config.timeout_secs = n;
    }
}
