//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require an upstream target and check that it is a usable origin
//! - Validate value ranges (timeouts > 0, statuses in range, distinct ports)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ConfigViolation>>
//! - Runs before any listener is bound

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::upstream::UpstreamTarget;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("proxy target should be specified")]
    MissingTarget,

    #[error("invalid proxy target `{target}`: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("prefix `{0}` must be empty or start with '/'")]
    InvalidPrefix(String),

    #[error("http_port and https_port are both {0}")]
    PortConflict(u16),

    #[error("control.validation_status {0} is not an error status (400-599)")]
    InvalidValidationStatus(u16),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Parse the configured upstream target.
pub fn upstream_target(config: &ServerConfig) -> Result<UpstreamTarget, ConfigViolation> {
    match config.target.as_deref() {
        None | Some("") => Err(ConfigViolation::MissingTarget),
        Some(target) => {
            UpstreamTarget::parse(target).map_err(|e| ConfigViolation::InvalidTarget {
                target: target.to_string(),
                reason: e.to_string(),
            })
        }
    }
}

/// Check a configuration, collecting every violation.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ConfigViolation>> {
    let mut violations = Vec::new();

    if let Err(violation) = upstream_target(config) {
        violations.push(violation);
    }

    if !config.prefix.is_empty() && !config.prefix.starts_with('/') {
        violations.push(ConfigViolation::InvalidPrefix(config.prefix.clone()));
    }

    // Port 0 asks the OS for an ephemeral port, so two zeros never collide.
    if config.options.tls_material().is_some()
        && config.http_port != 0
        && config.http_port == config.https_port
    {
        violations.push(ConfigViolation::PortConflict(config.http_port));
    }

    if !(400..=599).contains(&config.control.validation_status) {
        violations.push(ConfigViolation::InvalidValidationStatus(
            config.control.validation_status,
        ));
    }

    if config.timeouts.request_secs == 0 {
        violations.push(ConfigViolation::ZeroTimeout("request_secs"));
    }
    if config.timeouts.connect_secs == 0 {
        violations.push(ConfigViolation::ZeroTimeout("connect_secs"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
