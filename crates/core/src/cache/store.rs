//! Cache directory management.
//!
//! Opening a cache creates the root and every category directory. This is
//! idempotent, so opening an already-populated root leaves its entries alone.

use std::fs;
use std::path::{Path, PathBuf};

use super::key::{CacheKey, Category};
use crate::Error;

/// Handle to an on-disk cache root.
#[derive(Clone, Debug)]
pub struct ContentCache {
    pub(crate) root: PathBuf,
}

impl ContentCache {
    /// Open the cache rooted at `root`, creating the directory layout if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let cache = Self { root: root.into() };
        for category in Category::ALL {
            let dir = cache.category_dir(category);
            fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        }

        tracing::debug!("opened cache at {}", cache.root.display());
        Ok(cache)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every entry of `category`.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// File that stores the entry for `key` in `category`.
    pub fn entry_path(&self, category: Category, key: CacheKey) -> PathBuf {
        self.category_dir(category).join(key.file_name())
    }
}
