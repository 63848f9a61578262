//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build router → Bind listeners → Spawn serve tasks
//!
//! Shutdown (shutdown.rs):
//!     trigger() → listeners stop accepting → in-flight requests drain → tasks exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → caller triggers graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: config and bind errors are returned before anything serves
//! - Both listeners share one shutdown signal
//! - The library never installs signal handlers on its own

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{RunningServer, StartupError};
