//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// First year the puzzle event ran.
const FIRST_YEAR: u32 = 2015;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `year` predates the first event
    /// - `day` is outside 1..=25
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    /// - `base_url` is not an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.year < FIRST_YEAR {
            return Err(ConfigError::Invalid { field: "year".into(), reason: format!("must be {FIRST_YEAR} or later") });
        }

        if !(1..=25).contains(&self.day) {
            return Err(ConfigError::Invalid { field: "day".into(), reason: "must be between 1 and 25".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        match url::Url::parse(self.base_url.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Invalid {
                    field: "base_url".into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
            Err(e) => return Err(ConfigError::Invalid { field: "base_url".into(), reason: e.to_string() }),
        }

        if self.cache_dir.as_os_str().is_empty() {
            tracing::warn!("cache_dir is empty; entries will be written relative to the working directory");
        }

        Ok(())
    }
}
