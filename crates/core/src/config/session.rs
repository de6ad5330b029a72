//! Session cookie resolution.
//!
//! The cookie is looked up once at startup, in priority order:
//!
//! 1. An explicit value handed in by the caller
//! 2. `AOC_SESSION` in the process environment
//! 3. `AOC_SESSION` in a `.env` file in the working directory
//!
//! Blank values are skipped.

use std::fmt;
use std::path::Path;

use super::ConfigError;

/// Environment variable (and `.env` key) holding the session cookie.
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Nominal lifetime of a session cookie, in days.
const SESSION_LIFETIME_DAYS: u32 = 30;

/// An opaque session token for the puzzle website.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Cookie` request header.
    pub fn cookie_header(&self) -> String {
        format!("session={}", self.token)
    }

    /// Trivial validity check; the origin is never consulted.
    pub fn is_valid(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Days until the cookie is expected to expire.
    ///
    /// The issue date is not tracked, so this is always the nominal lifetime.
    pub fn days_until_expiry(&self) -> u32 {
        SESSION_LIFETIME_DAYS
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

/// Resolve the session cookie from an explicit value, the environment, or `./.env`.
///
/// # Errors
///
/// Returns `ConfigError::Missing` when no source yields a non-blank token.
pub fn resolve_session(explicit: Option<&str>) -> Result<Session, ConfigError> {
    resolve_from(explicit, std::env::var(SESSION_ENV).ok(), Path::new(".env"))
}

fn resolve_from(explicit: Option<&str>, env_value: Option<String>, dotenv_path: &Path) -> Result<Session, ConfigError> {
    if let Some(token) = non_blank(explicit) {
        tracing::debug!("using explicitly provided session");
        return Ok(Session::new(token));
    }

    if let Some(token) = non_blank(env_value.as_deref()) {
        tracing::debug!("using session from {}", SESSION_ENV);
        return Ok(Session::new(token));
    }

    if let Some(token) = read_dotenv(dotenv_path)? {
        tracing::debug!("using session from {}", dotenv_path.display());
        return Ok(Session::new(token));
    }

    Err(ConfigError::Missing {
        field: "session".into(),
        hint: format!(
            "pass a session cookie explicitly, export {SESSION_ENV}=<cookie>, or add {SESSION_ENV}=<cookie> to .env"
        ),
    })
}

fn read_dotenv(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let iter = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::LoadFailed(format!("failed to read {}: {e}", path.display())))?;

    for item in iter {
        let (key, value) =
            item.map_err(|e| ConfigError::LoadFailed(format!("failed to parse {}: {e}", path.display())))?;
        if key == SESSION_ENV {
            return Ok(non_blank(Some(value.as_str())).map(str::to_string));
        }
    }

    Ok(None)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
