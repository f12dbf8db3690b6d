//! Metrics collection and exposition.
//!
//! # Metrics
//! - `roman_http_requests_total` (counter): requests by method, path, status
//! - `roman_http_request_duration_seconds` (histogram): latency by method, path
//! - `roman_conversions_total` (counter): conversions by direction and outcome
//!
//! Without an installed recorder every call here is a no-op, so handlers
//! record unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Conversion direction label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    RomanToInt,
    IntToRoman,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::RomanToInt => "roman_to_int",
            Direction::IntToRoman => "int_to_roman",
        }
    }
}

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a completed HTTP request. `path` is the route template.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("roman_http_requests_total", &labels).increment(1);
    metrics::histogram!(
        "roman_http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of a conversion: `ok` or an error kind.
pub fn record_conversion(direction: Direction, outcome: &'static str) {
    metrics::counter!(
        "roman_conversions_total",
        "direction" => direction.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Middleware recording request count and latency per matched route.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    // Label by route template, never the raw path, to bound cardinality.
    // Installed via route_layer, so MatchedPath is always present; the
    // fallback only matters if the layer is ever moved onto the whole router.
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &path, response.status().as_u16(), start);
    response
}
