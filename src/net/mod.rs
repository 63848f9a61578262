//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig (bind address, ports, TLS material)
//!     → listener.rs (bind plaintext and TLS sockets)
//!     → tls.rs (load PEM material into a rustls config)
//!     → Hand off to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Sockets are bound before any serving task starts, so bind errors reach the caller
//! - TLS is optional and only enabled when both key and cert are present

pub mod listener;
pub mod tls;

pub use listener::{bind, ListenerError};
pub use tls::{load_tls_config, TlsError};
