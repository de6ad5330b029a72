//! File-backed cache for puzzle problems, inputs and solutions.
//!
//! Every entry lives in its own JSON file under a per-category directory:
//!
//! ```text
//! <root>/{problems,inputs,session,solutions}/day_<day>[_part_<part>].json
//! ```
//!
//! - Entries carry an MD5 checksum of their content, verified on every read
//! - A missing, unparsable or checksum-mismatched entry reads as a miss
//! - Entries never expire; they go away only through [`ContentCache::clear`]

pub mod entries;
pub mod entry;
pub mod hash;
pub mod key;
pub mod store;

pub use crate::Error;

pub use entries::Lookup;
pub use entry::CacheEntry;
pub use key::{CacheKey, Category};
pub use store::ContentCache;
