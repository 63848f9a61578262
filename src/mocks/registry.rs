//! In-memory mock storage.
//!
//! # Responsibilities
//! - Validate submitted mocks and store them under the prefixed path
//! - Exact-match lookup for the routing decision and fallback handler
//! - List and clear for the control API

use std::collections::BTreeMap;

use dashmap::DashMap;

use crate::mocks::types::{Mock, MockDefinition, ValidationError};

/// Mapping from full request path to canned response.
///
/// Owned by one server instance and shared between handlers through an `Arc`.
/// Every operation is visible to the next lookup on any task.
#[derive(Debug, Default)]
pub struct MockRegistry {
    prefix: String,
    mocks: DashMap<String, Mock>,
}

impl MockRegistry {
    /// Create an empty registry whose keys are prefixed with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            mocks: DashMap::new(),
        }
    }

    /// Validate and store a mock, replacing any entry at the same path.
    ///
    /// The registry is untouched when validation fails.
    pub fn add_mock(&self, definition: MockDefinition) -> Result<(), ValidationError> {
        let (path, mock) = definition.validate()?;
        let key = format!("{}{}", self.prefix, path);

        tracing::debug!(path = %key, code = mock.code, "Added mock");
        self.mocks.insert(key, mock);
        Ok(())
    }

    /// Snapshot of every mock, ordered by path.
    pub fn list_mocks(&self) -> BTreeMap<String, Mock> {
        self.mocks
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Remove every mock.
    pub fn clear_mocks(&self) {
        self.mocks.clear();
        tracing::debug!("Cleared all mocks");
    }

    /// Exact lookup on the full request path.
    pub fn lookup(&self, path: &str) -> Option<Mock> {
        self.mocks.get(path).map(|entry| entry.value().clone())
    }

    /// True when a mock is stored under the full request path.
    pub fn contains(&self, path: &str) -> bool {
        self.mocks.contains_key(path)
    }

    /// Number of stored mocks.
    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    /// True when no mocks are stored.
    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_then_lookup() {
        let registry = MockRegistry::new("/api");
        registry
            .add_mock(MockDefinition::new("/users", 200, json!([{ "id": 1 }])))
            .unwrap();

        let mock = registry.lookup("/api/users").unwrap();
        assert_eq!(mock, Mock { code: 200, body: json!([{ "id": 1 }]) });

        // Keys are stored prefixed; the raw submitted path is not a key.
        assert!(registry.contains("/api/users"));
        assert!(!registry.contains("/users"));
        assert!(registry.lookup("/users").is_none());
    }

    #[test]
    fn test_invalid_mock_leaves_registry_unchanged() {
        let registry = MockRegistry::new("");
        registry
            .add_mock(MockDefinition::new("/kept", 200, json!("yes")))
            .unwrap();
        let before = registry.list_mocks();

        let bad = MockDefinition {
            path: Some("/kept".into()),
            code: Some(500),
            body: None,
        };
        assert_eq!(registry.add_mock(bad), Err(ValidationError::Missing("body")));
        assert_eq!(registry.list_mocks(), before);
    }

    #[test]
    fn test_clear_empties_registry() {
        let registry = MockRegistry::new("/api");
        for i in 0..5 {
            registry
                .add_mock(MockDefinition::new(format!("/item/{i}"), 200, json!(i + 1)))
                .unwrap();
        }
        assert_eq!(registry.len(), 5);

        registry.clear_mocks();
        assert!(registry.list_mocks().is_empty());
        assert!(registry.is_empty());

        // Clearing an empty registry is fine too.
        registry.clear_mocks();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_adding_twice_is_idempotent() {
        let registry = MockRegistry::new("");
        let def = MockDefinition::new("/same", 202, json!({ "a": 1 }));
        registry.add_mock(def.clone()).unwrap();
        let once = registry.list_mocks();

        registry.add_mock(def).unwrap();
        assert_eq!(registry.list_mocks(), once);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overwrite_replaces_whole_entry() {
        let registry = MockRegistry::new("");
        registry
            .add_mock(MockDefinition::new("/p", 200, json!({ "a": 1, "b": 2 })))
            .unwrap();
        registry
            .add_mock(MockDefinition::new("/p", 404, json!({ "c": 3 })))
            .unwrap();

        assert_eq!(
            registry.lookup("/p").unwrap(),
            Mock { code: 404, body: json!({ "c": 3 }) }
        );
    }

    #[test]
    fn test_list_is_sorted_by_path() {
        let registry = MockRegistry::new("");
        for path in ["/c", "/a", "/b"] {
            registry.add_mock(MockDefinition::new(path, 200, json!(path))).unwrap();
        }
        let keys: Vec<_> = registry.list_mocks().into_keys().collect();
        assert_eq!(keys, vec!["/a", "/b", "/c"]);
    }
}
