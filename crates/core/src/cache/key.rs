//! Cache partitions and per-day keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed cache partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Problems,
    Inputs,
    Session,
    Solutions,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Problems, Category::Inputs, Category::Session, Category::Solutions];

    /// Directory name of this partition under the cache root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Problems => "problems",
            Category::Inputs => "inputs",
            Category::Session => "session",
            Category::Solutions => "solutions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Identifies one entry within a category: a day and, for solutions, a part.
///
/// Renders as `day_<day>` or `day_<day>_part_<part>`. A part of `0` counts as
/// no part, so `day_3` and `(3, Some(0))` name the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    day: u32,
    part: Option<u32>,
}

impl CacheKey {
    pub fn new(day: u32, part: Option<u32>) -> Self {
        Self { day, part: part.filter(|p| *p != 0) }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn part(&self) -> Option<u32> {
        self.part
    }

    /// File name of the entry inside its category directory.
    pub fn file_name(&self) -> String {
        format!("{self}.json")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.part {
            Some(part) => write!(f, "day_{}_part_{}", self.day, part),
            None => write!(f, "day_{}", self.day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_part() {
        assert_eq!(CacheKey::new(5, None).to_string(), "day_5");
    }

    #[test]
    fn test_key_with_part() {
        let key = CacheKey::new(7, Some(2));
        assert_eq!(key.to_string(), "day_7_part_2");
        assert_eq!(key.file_name(), "day_7_part_2.json");
    }

    #[test]
    fn test_zero_part_is_no_part() {
        assert_eq!(CacheKey::new(3, Some(0)), CacheKey::new(3, None));
        assert_eq!(CacheKey::new(3, Some(0)).file_name(), "day_3.json");
    }

    #[test]
    fn test_category_dir_names() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.dir_name()).collect();
        assert_eq!(names, ["problems", "inputs", "session", "solutions"]);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Solutions).unwrap();
        assert_eq!(json, "\"solutions\"");
        let back: Category = serde_json::from_str("\"inputs\"").unwrap();
        assert_eq!(back, Category::Inputs);
    }
}
