//! Origin URL handling.

use url::Url;

/// Error type for URL canonicalization failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Canonicalize the configured origin.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Require an explicit http(s) scheme, as config validation does
/// 3. Drop query, fragment and trailing slashes so paths can be appended
pub fn canonicalize_base(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let mut parsed = Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    parsed.set_query(None);
    parsed.set_fragment(None);
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);

    Ok(parsed)
}

/// Builds the day page and input URLs for one event year.
#[derive(Debug, Clone)]
pub struct PuzzleUrls {
    base: Url,
    year: u32,
}

impl PuzzleUrls {
    pub fn new(base_url: &str, year: u32) -> Result<Self, UrlError> {
        Ok(Self { base: canonicalize_base(base_url)?, year })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// `<base>/<year>/day/<day>`
    pub fn problem(&self, day: u32) -> Url {
        self.with_path(&format!("{}/day/{}", self.year, day))
    }

    /// `<base>/<year>/day/<day>/input`
    pub fn input(&self, day: u32) -> Url {
        self.with_path(&format!("{}/day/{}/input", self.year, day))
    }

    fn with_path(&self, suffix: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/{}", self.base.path().trim_end_matches('/'), suffix);
        url.set_path(&path);
        url
    }
}
