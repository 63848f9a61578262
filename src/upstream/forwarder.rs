//! Request forwarding to the upstream origin.
//!
//! # Responsibilities
//! - Rewrite the request URI and Host header to the upstream
//! - Strip hop-by-hop headers in both directions
//! - Send through a pooled HTTP/HTTPS client
//! - Map connection failures to a 502 JSON response

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, Request, StatusCode, Version},
    response::Response,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;

use crate::config::TimeoutConfig;
use crate::http::response::json_message;
use crate::observability::metrics;
use crate::upstream::target::UpstreamTarget;

/// Client type used for every upstream request.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Failures talking to the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to build upstream request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("upstream request failed: {0}")]
    Client(#[from] hyper_util::client::legacy::Error),
}

/// Headers that describe a single connection and must not be relayed.
static HOP_BY_HOP: [HeaderName; 7] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    HeaderName::from_static("proxy-connection"),
    header::TRANSFER_ENCODING,
    header::TE,
    header::TRAILER,
    header::UPGRADE,
];

/// Relays requests to the configured upstream origin.
#[derive(Clone)]
pub struct UpstreamForwarder {
    target: UpstreamTarget,
    client: UpstreamClient,
}

impl UpstreamForwarder {
    pub fn new(target: UpstreamTarget, timeouts: &TimeoutConfig) -> Self {
        let mut http = HttpConnector::new();
        http.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));
        http.enforce_http(false);

        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .wrap_connector(http);

        let client = Client::builder(TokioExecutor::new()).build(https);

        Self { target, client }
    }

    pub fn target(&self) -> &UpstreamTarget {
        &self.target
    }

    /// Forward a request and return the upstream response.
    ///
    /// Never fails: upstream errors become a 502 with a JSON message.
    pub async fn forward(&self, request: Request<Body>) -> Response {
        let start = Instant::now();
        let path = request.uri().path().to_string();

        match self.send(request).await {
            Ok(response) => {
                metrics::record_upstream(response.status().as_u16(), start);
                response
            }
            Err(e) => {
                tracing::error!(
                    target_origin = %self.target,
                    path = %path,
                    error = %e,
                    "Upstream error"
                );
                metrics::record_request(metrics::Outcome::UpstreamError);
                json_message(StatusCode::BAD_GATEWAY, "message", "Upstream request failed")
            }
        }
    }

    async fn send(&self, request: Request<Body>) -> Result<Response, UpstreamError> {
        let (mut parts, body) = request.into_parts();

        parts.uri = self.target.rewrite(&parts.uri)?;
        parts.version = Version::HTTP_11;
        strip_hop_by_hop(&mut parts.headers);
        parts
            .headers
            .insert(header::HOST, self.target.host_header().clone());

        tracing::debug!(uri = %parts.uri, "Forwarding upstream");

        let response = self.client.request(Request::from_parts(parts, body)).await?;

        let (mut parts, body) = response.into_parts();
        strip_hop_by_hop(&mut parts.headers);
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
}
