//! Content checksums for corruption detection.
//!
//! MD5 keeps files written by earlier versions of the tool valid. It only
//! guards against accidental damage; nothing relies on it for security.

/// Compute the lowercase hex checksum of an entry's content.
pub fn checksum(content: &str) -> String {
    format!("{:x}", md5::compute(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_stability() {
        assert_eq!(checksum("3   4\n4   3"), checksum("3   4\n4   3"));
    }

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(checksum(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(checksum("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_checksum_different_content() {
        assert_ne!(checksum("42"), checksum("43"));
    }

    #[test]
    fn test_checksum_format() {
        let hash = checksum("some puzzle input");
        assert_eq!(hash.len(), 32);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
