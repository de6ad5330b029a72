//! Core types and shared functionality for advent.
//!
//! This crate provides:
//! - Content cache with one checksummed JSON file per entry
//! - Unified error types
//! - Configuration and session resolution

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheEntry, CacheKey, Category, ContentCache, Lookup};
pub use config::{AppConfig, ConfigError, Session, resolve_session};
pub use error::Error;
