//! Catch-all handler: mock, proxy or 404.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::Response,
};

use crate::http::request::request_id;
use crate::http::response::{json_message, mock_response};
use crate::http::server::AppState;
use crate::observability::metrics::{self, Outcome};
use crate::routing::Route;

/// Route every non-control request through the routing decision.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();

    match state.routing.decide(&path) {
        Route::Proxy => state.forwarder.forward(request).await,
        Route::Mock(mock) => {
            tracing::debug!(
                request_id = %request_id(&request),
                path = %path,
                code = mock.code,
                "Serving mock"
            );
            metrics::record_request(Outcome::Mock);
            mock_response(&mock)
        }
        Route::NotMocked => {
            tracing::debug!(request_id = %request_id(&request), path = %path, "No mock for path");
            metrics::record_request(Outcome::NotFound);
            json_message(
                StatusCode::NOT_FOUND,
                "message",
                format!("No such path mocked: {path}"),
            )
        }
    }
}
