//! Global flags that override the resolved client configuration.

use std::path::PathBuf;

use careerportal_core::ClientConfig;

/// Flags accepted by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Backend API base URL (e.g. http://localhost:8080/api).
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
    /// Session file location (default: ~/.careerportal/session.json).
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl GlobalArgs {
    /// Apply the flags on top of file and environment settings.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(url) = &self.api_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
        if let Some(path) = &self.session_file {
            config.session_path = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = ClientConfig::default();
        GlobalArgs {
            api_url: Some("https://portal.example/api".into()),
            timeout: Some(30),
            session_file: Some(PathBuf::from("/tmp/s.json")),
            log_json: false,
        }
        .apply(&mut config);
        assert_eq!(config.api_base_url, "https://portal.example/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.session_path(), Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = ClientConfig::default();
        GlobalArgs::default().apply(&mut config);
        assert_eq!(config, ClientConfig::default());
    }
}
