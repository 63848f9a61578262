//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ConfigViolation};

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// True when the missing upstream target is among the violations.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, ConfigError::Invalid(v) if v.contains(&ConfigViolation::MissingTarget))
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a configuration file without validating it.
///
/// Callers that layer overrides on top (the binary's CLI flags) validate afterwards.
pub fn read_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}
