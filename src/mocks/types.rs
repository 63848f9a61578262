//! Mock definitions and validation errors.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A canned response served in place of the upstream.
///
/// Serialized as `{"code": .., "body": ..}`, the shape returned by `GET /mocks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mock {
    /// HTTP status code, always within `200..=999`.
    ///
    /// Informational (1xx) statuses cannot be sent as a final response.
    pub code: u16,

    /// JSON body written verbatim to the client.
    pub body: Value,
}

impl Mock {
    /// Status code as an `http` type.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// A mock as submitted to the control API, before validation.
///
/// Every field is optional so that missing fields surface as a
/// [`ValidationError`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MockDefinition {
    /// Path relative to the configured prefix.
    pub path: Option<String>,

    /// Status code to answer with.
    #[serde(alias = "statusCode", alias = "status_code")]
    pub code: Option<u64>,

    /// Body to answer with.
    pub body: Option<Value>,
}

impl MockDefinition {
    pub fn new(path: impl Into<String>, code: u16, body: Value) -> Self {
        Self {
            path: Some(path.into()),
            code: Some(u64::from(code)),
            body: Some(body),
        }
    }

    /// Interpret a parsed JSON document as a definition.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::Malformed(
                "expected a JSON object with path, code and body".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Check that path, code and body are all present and usable.
    ///
    /// Returns the unprefixed path and the mock to store under it.
    pub fn validate(self) -> Result<(String, Mock), ValidationError> {
        let path = match self.path {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ValidationError::Missing("path")),
        };

        let code = match self.code {
            None | Some(0) => return Err(ValidationError::Missing("code")),
            Some(c) if !(200..=999).contains(&c) => return Err(ValidationError::InvalidStatus(c)),
            Some(c) => c as u16,
        };

        let body = match self.body {
            None => return Err(ValidationError::Missing("body")),
            Some(Value::String(s)) if s.is_empty() => return Err(ValidationError::Missing("body")),
            Some(b) => b,
        };

        Ok((path, Mock { code, body }))
    }
}

/// Errors raised when a submitted mock cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent, null, zero or empty.
    #[error("Mock was not properly defined: `{0}` is missing; path, code and body should be provided!")]
    Missing(&'static str),

    /// The status code is not a valid HTTP status.
    #[error("Mock was not properly defined: {0} is not a valid HTTP status code")]
    InvalidStatus(u64),

    /// The submission has the wrong JSON shape.
    #[error("Mock was not properly defined: {0}")]
    Malformed(String),
}
