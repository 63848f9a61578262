//! Response construction.
//!
//! # Design Decisions
//! - Every error answered by the server is a JSON object with one message field
//! - Mock bodies are always serialized as JSON, whatever their type

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::mocks::Mock;

/// `{"<field>": "<message>"}` with the given status.
pub fn json_message(status: StatusCode, field: &str, message: impl Into<String>) -> Response {
    let mut body = Map::new();
    body.insert(field.to_string(), Value::String(message.into()));
    (status, Json(Value::Object(body))).into_response()
}

/// The stored status code and body of a mock.
pub fn mock_response(mock: &Mock) -> Response {
    (mock.status(), Json(&mock.body)).into_response()
}
