//! Client code for advent.
//!
//! This crate provides the HTTP fetch pipeline, problem extraction, and the
//! cache-first [`Advent`] front end used by the runner.

pub mod advent;
pub mod extract;
pub mod fetch;

pub use advent::Advent;
pub use extract::{DayDescExtractor, ProblemExtractor, extract_problem};
pub use fetch::{FetchClient, FetchConfig, PuzzleUrls, UrlError};
