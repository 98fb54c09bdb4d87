//! Prometheus metrics for request counting and latency tracking.
//!
//! Recording goes through the `metrics` facade, so nothing is collected until
//! a recorder is installed (see [`install_prometheus`]).

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Client calls counter metric name.
pub const METRIC_CLIENT_REQUESTS: &str = "client_requests_total";
/// Client call failures counter metric name.
pub const METRIC_CLIENT_FAILURES: &str = "client_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(METRIC_CLIENT_REQUESTS, "Total number of client calls issued");
    describe_counter!(METRIC_CLIENT_FAILURES, "Total number of client calls that failed");

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder with its own HTTP listener.
pub fn install_prometheus(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the served-requests counter.
pub fn inc_http_requests(endpoint: &str, method: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment client calls counter.
pub fn inc_client_requests() {
    counter!(METRIC_CLIENT_REQUESTS).increment(1);
}

/// Increment client failures counter.
pub fn inc_client_failures() {
    counter!(METRIC_CLIENT_FAILURES).increment(1);
}
