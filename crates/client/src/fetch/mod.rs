//! HTTP fetch pipeline for the puzzle origin.
//!
//! ### Authentication
//! - Every request carries `Cookie: session=<token>` and the configured User-Agent.
//!
//! ### Failure policy
//! - A non-success status is a transport error; nothing is retried.
//! - The only time limit is the client-wide request timeout.

pub mod urls;

use std::time::{Duration, Instant};

use reqwest::{Client, header};

pub use urls::{PuzzleUrls, UrlError, canonicalize_base};

use advent_core::{AppConfig, Error, Session};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "advent/<version>")
    pub user_agent: String,

    /// Request timeout (default: 20s)
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("advent/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_millis(20000),
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.timeout() }
    }
}

/// Authenticated HTTP client for day pages and inputs.
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
    session: Session,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration and session.
    pub fn new(config: FetchConfig, session: Session) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config, session })
    }

    /// Fetch a URL and return its body as text.
    pub async fn fetch_text(&self, url: &url::Url) -> Result<String, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .header(header::COOKIE, self.session.cookie_header())
            .send()
            .await
            .map_err(|e| Error::HttpError(format!("network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpError(format!("status {} for {}", status.as_u16(), url)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response: {}", e)))?;

        tracing::debug!("fetched {} in {}ms ({} bytes)", url, start.elapsed().as_millis(), body.len());

        Ok(body)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
