//! Mock-or-proxy routing decision.
//!
//! # Responsibilities
//! - Consult the registry for an exact mock match
//! - Fall back to the prefix test to decide whether to proxy
//! - Return an explicit outcome for the fallback handler to act on

use std::sync::Arc;

use crate::mocks::{Mock, MockRegistry};
use crate::routing::matcher::PathPrefixMatcher;

/// Outcome of routing a request path.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Answer with the stored mock.
    Mock(Mock),
    /// Forward to the upstream.
    Proxy,
    /// Outside the prefix and not mocked.
    NotMocked,
}

/// Decides between the registry and the upstream for every non-control request.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    prefix: PathPrefixMatcher,
    registry: Arc<MockRegistry>,
}

impl RoutingDecision {
    pub fn new(prefix: impl Into<String>, registry: Arc<MockRegistry>) -> Self {
        Self {
            prefix: PathPrefixMatcher::new(prefix),
            registry,
        }
    }

    /// Route a request path with a single registry lookup.
    pub fn decide(&self, path: &str) -> Route {
        if let Some(mock) = self.registry.lookup(path) {
            return Route::Mock(mock);
        }
        if self.prefix.matches(path) {
            Route::Proxy
        } else {
            Route::NotMocked
        }
    }

    /// True when `path` is inside the prefix and not mocked.
    pub fn should_proxy(&self, path: &str) -> bool {
        matches!(self.decide(path), Route::Proxy)
    }
}
