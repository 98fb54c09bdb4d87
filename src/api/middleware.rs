//! Request-metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use crate::metrics::{inc_http_requests, record_http_latency};

/// Label used for requests that matched no route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Count and time every request, labelled by its matched route.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());
    let method = req.method().clone();

    let response = next.run(req).await;

    record_http_latency(start, &endpoint);
    inc_http_requests(&endpoint, method.as_str(), response.status().as_u16());

    response
}
