//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → decision.rs (registry lookup, then prefix check)
//!     → matcher.rs (literal prefix test)
//!     → Return: Route::Mock, Route::Proxy or Route::NotMocked
//! ```
//!
//! # Design Decisions
//! - An exact mock match always wins, even inside the prefix
//! - Paths outside the prefix are never proxied
//! - Prefix test is a plain string prefix, not segment aware
//! - The decision is a pure function of path and registry state

pub mod decision;
pub mod matcher;

pub use decision::{Route, RoutingDecision};
pub use matcher::PathPrefixMatcher;
