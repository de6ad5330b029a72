//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (ADVENT_*)
//! 2. TOML config file (if ADVENT_CONFIG_FILE set)
//! 3. Built-in defaults
//!
//! The session cookie is resolved separately by [`resolve_session`].

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod session;
mod validation;

pub use session::{SESSION_ENV, Session, resolve_session};
pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (ADVENT_*)
/// 2. TOML config file (if ADVENT_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Puzzle event year.
    ///
    /// Set via ADVENT_YEAR environment variable.
    #[serde(default = "default_year")]
    pub year: u32,

    /// Puzzle day to run.
    ///
    /// Set via ADVENT_DAY environment variable.
    #[serde(default = "default_day")]
    pub day: u32,

    /// Whether the runner prints the problem text before solving.
    ///
    /// Set via ADVENT_SHOW_PROBLEM environment variable.
    #[serde(default = "default_true")]
    pub show_problem: bool,

    /// Root directory of the on-disk cache.
    ///
    /// Set via ADVENT_CACHE_DIR environment variable.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Origin the day pages and inputs are fetched from.
    ///
    /// Set via ADVENT_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via ADVENT_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via ADVENT_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_year() -> u32 {
    2024
}

fn default_day() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".aoc_cache")
}

fn default_base_url() -> String {
    "https://adventofcode.com".into()
}

fn default_user_agent() -> String {
    concat!("advent/", env!("CARGO_PKG_VERSION")).into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            day: default_day(),
            show_problem: true,
            cache_dir: default_cache_dir(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `ADVENT_`
    /// 2. TOML file from `ADVENT_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("ADVENT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("ADVENT_").map(|key| key.as_str().to_lowercase().into()));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
