//! Entry read, write and invalidation.
//!
//! Provides functions for saving, loading and clearing cached entries.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::entry::CacheEntry;
use super::key::{CacheKey, Category};
use super::store::ContentCache;
use crate::Error;

/// Outcome of reading one cache entry.
///
/// Both `Miss` and `Corrupted` surface as "no content" through
/// [`ContentCache::load`]; the distinction exists for callers that care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The entry exists and its checksum matches.
    Found(String),
    /// Nothing has been written under this key.
    Miss,
    /// A file exists but fails to parse or fails its checksum.
    Corrupted,
}

impl Lookup {
    pub fn into_content(self) -> Option<String> {
        match self {
            Lookup::Found(content) => Some(content),
            Lookup::Miss | Lookup::Corrupted => None,
        }
    }
}

impl ContentCache {
    /// Write `content` under `(category, day, part)`, replacing any previous entry.
    pub fn save(&self, category: Category, day: u32, content: &str, part: Option<u32>) -> Result<(), Error> {
        let key = CacheKey::new(day, part);
        let path = self.entry_path(category, key);
        let entry = CacheEntry::new(key, content);
        let json = serde_json::to_string_pretty(&entry)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&path, json).map_err(|e| Error::io(&path, e))?;

        tracing::debug!("cached {} {} ({} bytes)", category, key, content.len());
        Ok(())
    }

    /// Read the content stored under `(category, day, part)`.
    ///
    /// Returns `None` when the entry is absent or fails its integrity check.
    pub fn load(&self, category: Category, day: u32, part: Option<u32>) -> Result<Option<String>, Error> {
        self.lookup(category, day, part).map(Lookup::into_content)
    }

    /// Read an entry, reporting whether a miss was an absence or a damaged file.
    pub fn lookup(&self, category: Category, day: u32, part: Option<u32>) -> Result<Lookup, Error> {
        let key = CacheKey::new(day, part);
        let path = self.entry_path(category, key);

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("cache miss for {} {}", category, key);
                return Ok(Lookup::Miss);
            }
            Err(e) => return Err(Error::io(&path, e)),
        };

        let entry: CacheEntry = match serde_json::from_slice(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("unreadable cache entry {}: {}", path.display(), e);
                return Ok(Lookup::Corrupted);
            }
        };

        if !entry.is_intact() {
            tracing::warn!("checksum mismatch for {}, treating as miss", path.display());
            return Ok(Lookup::Corrupted);
        }

        tracing::debug!("cache hit for {} {}", category, key);
        Ok(Lookup::Found(entry.content))
    }

    /// Delete cache entries.
    ///
    /// - category and day: the single `day_<day>` entry of that category
    /// - category only: every entry of that category
    /// - neither: every entry of every category
    ///
    /// A day without a category clears everything, and day `0` counts as no
    /// day. Part-qualified entries are only reachable through the bulk forms.
    ///
    /// Returns the number of deleted entries.
    pub fn clear(&self, category: Option<Category>, day: Option<u32>) -> Result<usize, Error> {
        let deleted = match (category, day) {
            (Some(category), Some(day)) if day != 0 => {
                let path = self.entry_path(category, CacheKey::new(day, None));
                usize::from(remove_if_exists(&path)?)
            }
            (Some(category), _) => self.clear_category(category)?,
            (None, _) => {
                let mut total = 0;
                for category in Category::ALL {
                    total += self.clear_category(category)?;
                }
                total
            }
        };

        tracing::debug!("cleared {} cache entries", deleted);
        Ok(deleted)
    }

    fn clear_category(&self, category: Category) -> Result<usize, Error> {
        let dir = self.category_dir(category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Error::io(&dir, e)),
        };

        let mut deleted = 0;
        for dir_entry in entries {
            let path = dir_entry.map_err(|e| Error::io(&dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") && remove_if_exists(&path)? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

fn remove_if_exists(path: &Path) -> Result<bool, Error> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}
