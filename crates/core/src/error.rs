//! Unified error types for advent.
//!
//! A cache miss is never an error; see [`crate::cache::Lookup`].

use std::path::PathBuf;

use crate::config::ConfigError;

/// Unified error type shared by the cache, the fetch client and the runner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem failure while reading or writing the cache.
    #[error("CACHE_ERROR: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cache entry could not be serialized.
    #[error("CACHE_ERROR: failed to encode entry: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Non-success response or network failure from the origin.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// The day page carried no problem description.
    #[error("PROBLEM_NOT_FOUND: no description found for day {0}")]
    ProblemNotFound(u32),

    /// Startup configuration could not be resolved.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
