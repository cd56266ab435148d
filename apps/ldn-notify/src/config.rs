//! # Configuration
//!
//! Settings are read from a TOML file, then overridden by the environment,
//! then by command-line flags.
//!
//! ```toml
//! profile = "https://alice.example/profile/card#me"
//! poll_interval_secs = 60
//! state_path = "ldn-notify.redb"
//! timeout_secs = 20
//! output = "json"
//! ```

use crate::NotifyError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ldn-notify.toml";

/// Environment variable that overrides the configured profile.
pub const PROFILE_ENV: &str = "LDN_PROFILE";

/// Polling period used when none is configured.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// How records and reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Poller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// WebID of the user whose inbox is polled.
    pub profile: Option<String>,

    /// Seconds between cycles in `watch` mode.
    pub poll_interval_secs: u64,

    /// redb file keeping displayed notifications across restarts.
    /// Without it the handled set lives only as long as the process.
    pub state_path: Option<PathBuf>,

    /// Per-request timeout. No timeout when unset.
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header sent with every fetch.
    pub user_agent: Option<String>,

    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            state_path: None,
            timeout_secs: None,
            user_agent: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, NotifyError> {
        toml::from_str(text).map_err(|e| NotifyError::Configuration(e.to_string()))
    }

    /// Load the configuration file and apply the environment override.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, NotifyError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    NotifyError::Configuration(format!(
                        "cannot read config '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::from_toml(&content)?
            }
            None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(content) => Self::from_toml(&content)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
                Err(e) => return Err(e.into()),
            },
        };

        config.override_profile(std::env::var(PROFILE_ENV).ok());
        Ok(config)
    }

    /// Replace the profile when `profile` is set and non-empty.
    pub fn override_profile(&mut self, profile: Option<String>) {
        if let Some(profile) = profile.filter(|p| !p.trim().is_empty()) {
            self.profile = Some(profile);
        }
    }

    /// The profile to poll, or a configuration error if none was given.
    pub fn profile(&self) -> Result<&str, NotifyError> {
        self.profile.as_deref().ok_or_else(|| {
            NotifyError::Configuration(format!(
                "no profile configured: pass --profile, set {} or add `profile` to {}",
                PROFILE_ENV, DEFAULT_CONFIG_FILE
            ))
        })
    }

    /// Polling period, never shorter than one second.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
