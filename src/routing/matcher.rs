//! Path prefix matching.
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - Empty prefix = always matches (wildcard)
//! - No segment boundary: prefix `/api` also matches `/api2`

/// Matches the request path against a literal prefix.
#[derive(Debug, Clone, Default)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns true if `path` starts with the prefix.
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api");

        assert!(matcher.matches("/api/v1"));
        assert!(matcher.matches("/api"));
        assert!(!matcher.matches("/images"));
        assert!(!matcher.matches("/API/v1")); // Case sensitive
    }

    #[test]
    fn test_prefix_is_not_segment_aware() {
        let matcher = PathPrefixMatcher::new("/api");
        assert!(matcher.matches("/api2/users"));
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let matcher = PathPrefixMatcher::new("");
        assert!(matcher.matches("/"));
        assert!(matcher.matches("/health"));
    }
}
