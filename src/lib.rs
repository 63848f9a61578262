//! Development proxy with canned mocks.
//!
//! Requests under a configured prefix are forwarded to a real upstream unless a
//! mock has been registered for their exact path, in which case the mock's
//! status and JSON body are returned instead. Mocks are managed at runtime
//! through the `/mocks` control API and live only as long as the process.
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!   Client Request   │  ┌──────────┐   /mocks   ┌──────────────┐    │
//!   ─────────────────┼─▶│   http   │───────────▶│   control    │──┐ │
//!                    │  │  server  │            └──────────────┘  │ │
//!                    │  └────┬─────┘                              ▼ │
//!                    │       │ anything else             ┌─────────┐│
//!                    │       ▼                           │  mock   ││
//!                    │  ┌──────────┐   lookup            │registry ││
//!                    │  │ routing  │────────────────────▶└─────────┘│
//!                    │  │ decision │                                │
//!                    │  └────┬─────┘                                │
//!                    │       │ Proxy          ┌───────────┐         │
//!                    │       └───────────────▶│ upstream  │─────────┼──▶ Upstream
//!                    │                        │ forwarder │         │
//!                    │                        └───────────┘         │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod mocks;
pub mod net;
pub mod routing;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::{RunningServer, Shutdown, StartupError};
pub use mocks::{Mock, MockDefinition, MockRegistry, ValidationError};
