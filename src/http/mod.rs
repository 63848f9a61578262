//! HTTP front door.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, CORS, request ID, tracing, timeout)
//!     → /mocks POST|GET|DELETE → control.rs (registry add/list/clear)
//!     → anything else → dispatch.rs
//!         → routing decision
//!         → Route::Proxy → upstream forwarder
//!         → Route::Mock → response.rs (stored status + JSON body)
//!         → Route::NotMocked → 404 JSON
//! ```

pub mod control;
pub mod dispatch;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, CONTROL_PATH};
