//! Problem text extraction from day pages.
//!
//! A day page carries one `<article class="day-desc">` per unlocked part.
//! Their text content is trimmed and joined with a blank line.
//!
//! Extraction sits behind the `ProblemExtractor` trait so the scraping
//! strategy can change without touching the cache-first front end.

use scraper::{Html, Selector};

use advent_core::Error;

/// Stable extractor trait for problem descriptions.
pub trait ProblemExtractor: Send + Sync {
    /// Extract the plain-text problem description of `day` from its page HTML.
    fn extract(&self, html: &str, day: u32) -> Result<String, Error>;
}

/// Extractor that reads every `article.day-desc` element.
#[derive(Debug, Default, Clone, Copy)]
pub struct DayDescExtractor;

impl ProblemExtractor for DayDescExtractor {
    fn extract(&self, html: &str, day: u32) -> Result<String, Error> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("article.day-desc").expect("invalid selector");

        let parts: Vec<String> = document
            .select(&selector)
            .map(|article| article.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if parts.is_empty() {
            return Err(Error::ProblemNotFound(day));
        }

        Ok(parts.join("\n\n"))
    }
}

/// Extract a problem description using the default extractor.
pub fn extract_problem(html: &str, day: u32) -> Result<String, Error> {
    DayDescExtractor.extract(html, day)
}
