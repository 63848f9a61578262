//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Request routed to Route::Proxy
//!     → target.rs (rewrite scheme, authority and Host)
//!     → forwarder.rs (strip hop-by-hop headers, send via pooled client)
//!     → upstream response streamed back, or 502 on failure
//! ```
//!
//! # Design Decisions
//! - Single upstream origin, fixed at startup
//! - Host header rewritten to the upstream (change-origin)
//! - Bodies streamed in both directions, never buffered
//! - No retries: failures are logged and answered with 502

pub mod forwarder;
pub mod target;

pub use forwarder::{UpstreamError, UpstreamForwarder};
pub use target::{TargetError, UpstreamTarget};
