//! Control API handlers for `/mocks`.
//!
//! # Responsibilities
//! - POST: parse and register one mock
//! - GET: return every registered mock
//! - DELETE: clear the registry

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::http::response::json_message;
use crate::http::server::AppState;
use crate::mocks::{Mock, MockDefinition};
use crate::observability::metrics;

/// `POST /mocks`
///
/// An empty body is treated as `{}` and so fails validation rather than parsing.
pub async fn add_mock(State(state): State<AppState>, body: Bytes) -> Response {
    metrics::record_control("add");

    let value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Mock submission is not valid JSON");
                return json_message(StatusCode::BAD_REQUEST, "msg", format!("Invalid JSON: {e}"));
            }
        }
    };

    match MockDefinition::from_value(value).and_then(|def| state.registry.add_mock(def)) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Rejected mock");
            json_message(state.validation_status, "msg", e.to_string())
        }
    }
}

/// `GET /mocks`
pub async fn list_mocks(State(state): State<AppState>) -> Json<BTreeMap<String, Mock>> {
    metrics::record_control("list");
    Json(state.registry.list_mocks())
}

/// `DELETE /mocks`
pub async fn clear_mocks(State(state): State<AppState>) -> StatusCode {
    metrics::record_control("clear");
    state.registry.clear_mocks();
    StatusCode::NO_CONTENT
}
