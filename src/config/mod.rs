//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or programmatic ServerConfig
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared by value with the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server starts
//! - All fields except `target` have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ControlConfig, LimitsConfig, ObservabilityConfig, PemSource, ServerConfig, ServerOptions,
    TimeoutConfig,
};
pub use validation::{validate_config, ConfigViolation};
