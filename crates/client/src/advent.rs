//! Cache-first access to problems, inputs and solutions.
//!
//! Problems and inputs are read from the cache when present and fetched from
//! the origin otherwise; whatever is fetched is written back before returning.
//! Solutions only ever live in the cache.

use advent_core::{AppConfig, Category, ContentCache, Error, Session};

use crate::extract::{DayDescExtractor, ProblemExtractor};
use crate::fetch::{FetchClient, FetchConfig, PuzzleUrls};

/// Front end for one event year.
pub struct Advent {
    urls: PuzzleUrls,
    fetch: FetchClient,
    cache: ContentCache,
    extractor: Box<dyn ProblemExtractor>,
}

impl Advent {
    /// Build a front end from loaded configuration and a resolved session.
    pub fn new(config: &AppConfig, session: Session) -> Result<Self, Error> {
        let urls = PuzzleUrls::new(&config.base_url, config.year).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let fetch = FetchClient::new(FetchConfig::from(config), session)?;
        let cache = ContentCache::open(&config.cache_dir)?;

        Ok(Self { urls, fetch, cache, extractor: Box::new(DayDescExtractor) })
    }

    /// Replace the problem extractor.
    pub fn with_extractor(mut self, extractor: impl ProblemExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn year(&self) -> u32 {
        self.urls.year()
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Problem description for `day`.
    pub async fn get_problem(&self, day: u32) -> Result<String, Error> {
        if let Some(content) = self.cached(Category::Problems, day)? {
            return Ok(content);
        }

        let html = self.fetch.fetch_text(&self.urls.problem(day)).await?;
        let content = self.extractor.extract(&html, day)?;
        self.cache.save(Category::Problems, day, &content, None)?;

        Ok(content)
    }

    /// Puzzle input for `day`, with surrounding whitespace trimmed.
    pub async fn get_input(&self, day: u32) -> Result<String, Error> {
        if let Some(content) = self.cached(Category::Inputs, day)? {
            return Ok(content);
        }

        let body = self.fetch.fetch_text(&self.urls.input(day)).await?;
        let content = body.trim().to_string();
        self.cache.save(Category::Inputs, day, &content, None)?;

        Ok(content)
    }

    /// Record the answer to one part of a day.
    pub fn save_solution(&self, day: u32, part: u32, solution: &str) -> Result<(), Error> {
        self.cache.save(Category::Solutions, day, solution, Some(part))
    }

    /// A previously recorded answer, if any.
    pub fn get_solution(&self, day: u32, part: u32) -> Result<Option<String>, Error> {
        self.cache.load(Category::Solutions, day, Some(part))
    }

    /// Drop cached entries; see [`ContentCache::clear`].
    pub fn clear_cache(&self, category: Option<Category>, day: Option<u32>) -> Result<usize, Error> {
        self.cache.clear(category, day)
    }

    pub fn validate_session(&self) -> bool {
        self.fetch.session().is_valid()
    }

    pub fn session_days_until_expiry(&self) -> u32 {
        self.fetch.session().days_until_expiry()
    }

    // An empty cached payload is refetched.
    fn cached(&self, category: Category, day: u32) -> Result<Option<String>, Error> {
        Ok(self.cache.load(category, day, None)?.filter(|content| !content.is_empty()))
    }
}
