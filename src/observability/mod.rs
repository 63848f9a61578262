//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and forwarder produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and histograms via the metrics facade)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Library code only emits; the binary installs the subscriber and exporter
//! - Request ID flows through every log line via the trace span
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
