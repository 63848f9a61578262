//! Mock registry subsystem.
//!
//! # Data Flow
//! ```text
//! POST /mocks body
//!     → types.rs (MockDefinition, unvalidated)
//!     → registry.rs (validate, prefix the path, store)
//!     → Mock (validated, keyed by the full request path)
//!
//! Lookups:
//!     routing decision / fallback handler
//!     → registry.rs (exact key match)
//!     → Some(Mock) or None
//! ```
//!
//! # Design Decisions
//! - One registry per server instance, shared via Arc, never global
//! - Keys are stored already prefixed so lookups compare the raw request path
//! - Re-adding a path replaces the entry; there is no single-path delete

pub mod registry;
pub mod types;

pub use registry::MockRegistry;
pub use types::{Mock, MockDefinition, ValidationError};
