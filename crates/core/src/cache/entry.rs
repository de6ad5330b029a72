//! The persisted cache record.

use serde::{Deserialize, Serialize};

use super::hash::checksum;
use super::key::CacheKey;

/// A cached payload together with the metadata written next to it.
///
/// `timestamp` is informational only and never drives expiry. It is kept as
/// the raw ISO-8601 string so records written by other tools still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub content: String,
    pub timestamp: String,
    pub day: u32,
    pub part: Option<u32>,
    pub checksum: String,
}

impl CacheEntry {
    /// Build a fresh record for `key`, stamped with the current time.
    pub fn new(key: CacheKey, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            checksum: checksum(&content),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            day: key.day(),
            part: key.part(),
            content,
        }
    }

    /// Whether the stored checksum still matches the stored content.
    pub fn is_intact(&self) -> bool {
        checksum(&self.content) == self.checksum
    }
}
