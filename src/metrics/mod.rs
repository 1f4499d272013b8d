//! Prometheus metrics for the news service.
//!
//! Exposes request collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};
use std::time::Duration;

lazy_static! {
    /// HTTP request latency labeled by method, route pattern and status.
    static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration segmented by method, route and status code",
        &["method", "route", "status_code"],
        vec![0.05, 0.1, 0.2, 0.3, 0.5, 1.0]
    )
    .expect("failed to register http_request_duration_seconds");

    /// Total feed listings served, by variant and partition.
    static ref FEED_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "feed_request_total",
        "Total feed requests segmented by feed type and partition",
        &["feed_type", "partition"]
    )
    .expect("failed to register feed_request_total");
}

/// Record one completed HTTP request.
pub fn observe_http_request(method: &str, route: &str, status: u16, elapsed: Duration) {
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, route, &status.to_string()])
        .observe(elapsed.as_secs_f64());
}

/// Count one feed listing request.
pub fn observe_feed_request(feed_type: &str, partition: &str) {
    FEED_REQUEST_TOTAL
        .with_label_values(&[feed_type, partition])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
