use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SESSION_FILE,
    MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Persisted session settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Credential file, relative to the config directory
    pub file: String,
    /// How often other processes' writes to the credential file are picked up
    pub poll_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_SESSION_FILE),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.is_empty() {
            return Err(ConfigError::session("session.file cannot be empty"));
        }

        let path = std::path::Path::new(&self.file);
        if path.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(ConfigError::session(format!(
                "session.poll_interval_ms must be {}-{}, got {}",
                MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS, self.poll_interval_ms
            )));
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
