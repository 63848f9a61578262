//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mocknroll_requests_total` (counter): non-control requests by outcome
//! - `mocknroll_control_operations_total` (counter): control API calls by operation
//! - `mocknroll_upstream_duration_seconds` (histogram): upstream latency by status

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// How a non-control request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Mock,
    Proxy,
    NotFound,
    UpstreamError,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Mock => "mock",
            Outcome::Proxy => "proxy",
            Outcome::NotFound => "not_found",
            Outcome::UpstreamError => "upstream_error",
        }
    }
}

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(outcome: Outcome) {
    metrics::counter!("mocknroll_requests_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_control(operation: &'static str) {
    metrics::counter!("mocknroll_control_operations_total", "operation" => operation).increment(1);
}

/// Record a completed upstream round trip.
pub fn record_upstream(status: u16, start: Instant) {
    record_request(Outcome::Proxy);
    metrics::histogram!(
        "mocknroll_upstream_duration_seconds",
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
