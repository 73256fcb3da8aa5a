//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Spans and responses are logged at `INFO` with latency in milliseconds.
/// `503` health reports count as server errors and are additionally logged
/// at `WARN` by the failure hook, so an unhealthy system shows up in logs
/// even when nobody reads the response body.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/health version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// WARN request{method=GET uri=/health version=HTTP/1.1}: response failed classification=Status code: 503 Service Unavailable latency=6 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
